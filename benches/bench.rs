use criterion::{criterion_group, criterion_main, Criterion};
use time_graphs::TimingTable;

fn synthetic_input(rows: usize) -> String {
    let mut out = String::from("size exact approx1 approx2 approx3\n");
    for i in 0..rows {
        let size = (i + 1) * 10;
        out.push_str(&format!(
            "{size} {} {} {} {}\n",
            size * 50,
            size * 40,
            size * 30,
            size * 20
        ));
    }
    out
}

fn criterion_benchmark(c: &mut Criterion) {
    let small = synthetic_input(100);
    let large = synthetic_input(100_000);

    c.bench_function("parse timing table (100 rows)", |b| {
        b.iter(|| TimingTable::parse(&small).unwrap())
    });
    c.bench_function("parse timing table (100000 rows)", |b| {
        b.iter(|| TimingTable::parse(&large).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
