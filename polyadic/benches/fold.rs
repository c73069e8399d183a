use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyadic::prelude::*;

fn add(a: u64, b: u64) -> u64 {
    a.wrapping_add(b)
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    let size: usize = 16;

    group.bench_function(BenchmarkId::new("hand-written", size), |b| {
        b.iter(|| {
            let (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15) =
                black_box((0_u64, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15));
            [a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15]
                .into_iter()
                .fold(0, add)
        })
    });

    for (name, fold) in [
        ("left_from", left_from as fn(Sixteen) -> u64),
        ("right_from", right_from),
        ("left", left),
        ("right", right),
    ] {
        group.bench_function(BenchmarkId::new(name, size), |b| {
            b.iter(|| {
                fold(black_box((
                    0_u64, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
                )))
            })
        });
    }

    group.finish();
}

type Sixteen = (
    u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64,
);

fn left_from(values: Sixteen) -> u64 {
    fold_left_from(values, 0, add)
}

fn right_from(values: Sixteen) -> u64 {
    fold_right_from(values, 0, add)
}

fn left(values: Sixteen) -> u64 {
    fold_left(values, add)
}

fn right(values: Sixteen) -> u64 {
    fold_right(values, add)
}

fn bench_visit(c: &mut Criterion) {
    struct Sum(u64);

    impl<T: Into<u64>> Visitor<T> for Sum {
        type Output = ();

        fn visit(&mut self, value: T) {
            self.0 = self.0.wrapping_add(value.into());
        }
    }

    c.bench_function("visit/mixed", |b| {
        b.iter(|| {
            let mut sum = Sum(0);
            let (a, b, c, d) = black_box((1_u8, 2_u16, 3_u32, 4_u64));
            visit!(sum; a, b, c, d, a, b, c, d);
            sum.0
        })
    });
}

criterion_group!(benches, bench_fold, bench_visit);
criterion_main!(benches);
