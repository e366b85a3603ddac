use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use onegin_engine::{LineTable, reversed};

fn generate_lines(count: usize) -> Vec<u8> {
    let words = ["мой", "дядя", "(самых)", "честных", "правил,", "когда", "не", "в", "шутку!"];
    let mut text = String::new();
    for i in 0..count {
        for j in 0..5 {
            text.push_str(words[(i * 7 + j * 3) % words.len()]);
            text.push(' ');
        }
        text.push('\n');
    }

    std::iter::once(0xFEFF_u16)
        .chain(text.encode_utf16())
        .flat_map(u16::to_le_bytes)
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.sample_size(20);

    let bytes = generate_lines(10_000);
    group.bench_function("from_bytes", |b| {
        b.iter(|| {
            let table = LineTable::from_bytes(black_box(&bytes)).unwrap();
            black_box(table);
        });
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.sample_size(20);

    let bytes = generate_lines(10_000);
    let mut table = LineTable::from_bytes(&bytes).unwrap();

    group.bench_function("forward", |b| {
        b.iter(|| {
            table.restore_original();
            table.sort();
            black_box(table.spans().len());
        });
    });

    group.bench_function("reversed", |b| {
        b.iter(|| {
            table.restore_original();
            table.sort_by(reversed);
            black_box(table.spans().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_sort);
criterion_main!(benches);
