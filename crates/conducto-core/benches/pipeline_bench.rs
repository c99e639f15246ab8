//! Criterion benchmarks for the conducto-core pipeline engine.
//!
//! Measures engine overhead independently of node cost using trivial relay
//! nodes. Two axes:
//!
//! - **Step** — per-tick resolution throughput over deep chains and wide
//!   fan-in
//! - **Wiring** — build-and-wire cost for a linear chain
//!
//! Run with: `cargo bench -p conducto-core`
#![allow(missing_docs)]

use core::any::TypeId;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use conducto_core::{InputPort, Node, NodeId, OutputPort, Pipeline, Poll, PortHandle};

const CHAIN_DEPTHS: &[usize] = &[8, 64, 256];

/// Source that never closes; isolates engine overhead from node cost.
struct Pulse {
    value: i64,
    out: OutputPort<i64>,
}

impl Pulse {
    fn new() -> Self {
        Self {
            value: 0,
            out: OutputPort::new(),
        }
    }
}

impl Node for Pulse {
    fn name(&self) -> String {
        "Pulse".into()
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<i64>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn advance(&mut self) -> Poll {
        self.value += 1;
        self.out.send(self.value);
        Poll::Ready
    }
}

/// One-input pass-through transform.
struct Relay {
    input: Option<InputPort<i64>>,
    out: OutputPort<i64>,
}

impl Relay {
    fn new() -> Self {
        Self {
            input: None,
            out: OutputPort::new(),
        }
    }
}

impl Node for Relay {
    fn name(&self) -> String {
        "Relay".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<i64>()]
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<i64>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        if slot == 0 {
            self.input = source.and_then(InputPort::from_handle);
        }
    }

    fn advance(&mut self) -> Poll {
        match self.input.as_ref().and_then(InputPort::value) {
            Some(value) => {
                self.out.send(value);
                Poll::Ready
            }
            None => Poll::Empty,
        }
    }
}

/// Sink that folds everything it sees into one accumulator.
struct Drain {
    input: Option<InputPort<i64>>,
    total: i64,
}

impl Drain {
    fn new() -> Self {
        Self {
            input: None,
            total: 0,
        }
    }
}

impl Node for Drain {
    fn name(&self) -> String {
        "Drain".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<i64>()]
    }

    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        if slot == 0 {
            self.input = source.and_then(InputPort::from_handle);
        }
    }

    fn advance(&mut self) -> Poll {
        if let Some(value) = self.input.as_ref().and_then(InputPort::value) {
            self.total = self.total.wrapping_add(value);
        }
        Poll::Ready
    }
}

/// Source → `depth` relays → sink.
fn build_chain(depth: usize) -> Pipeline {
    let mut p = Pipeline::new();
    let mut prev = p.add_node(Box::new(Pulse::new()));
    for _ in 0..depth {
        let relay = p.add_node(Box::new(Relay::new()));
        p.connect(prev, relay, 0).unwrap();
        prev = relay;
    }
    let sink = p.add_node(Box::new(Drain::new()));
    p.connect(prev, sink, 0).unwrap();
    p
}

/// `width` sources all feeding one wide sink through relays.
fn build_fan_in(width: usize) -> Pipeline {
    let mut p = Pipeline::new();
    let sources: Vec<NodeId> = (0..width)
        .map(|_| p.add_node(Box::new(Pulse::new())))
        .collect();
    // One sink per source keeps the arity story simple; the shared tick
    // still resolves every branch in a single step call.
    for src in sources {
        let relay = p.add_node(Box::new(Relay::new()));
        let sink = p.add_node(Box::new(Drain::new()));
        p.connect(src, relay, 0).unwrap();
        p.connect(relay, sink, 0).unwrap();
    }
    p
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/step");
    for &depth in CHAIN_DEPTHS {
        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |b, &depth| {
            let mut p = build_chain(depth);
            b.iter(|| black_box(p.step()));
        });
    }
    for &width in &[4usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("fan", width), &width, |b, &width| {
            let mut p = build_fan_in(width);
            b.iter(|| black_box(p.step()));
        });
    }
    group.finish();
}

fn bench_wiring(c: &mut Criterion) {
    c.bench_function("pipeline/build_chain_64", |b| {
        b.iter(|| black_box(build_chain(64)));
    });
}

criterion_group!(benches, bench_step, bench_wiring);
criterion_main!(benches);
