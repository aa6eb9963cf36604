#[macro_use]
extern crate criterion;
extern crate tdiagram;

use criterion::Criterion;
use tdiagram::Context;

fn bench_setup(c: &mut Criterion) {
    c.bench_function("setup", |b| b.iter(|| Context::new()));
}

criterion_group!(benches, bench_setup);
criterion_main!(benches);
