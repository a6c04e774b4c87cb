#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use advanced_vector::Vector;

fn compare_push(c: &mut Criterion) {
    for count in [100usize, 1000] {
        c.bench_function(&format!("vector push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
                buf
            });
        });

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
                buf
            });
        });

        c.bench_function(
            &format!("vector with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vector::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                    buf
                });
            },
        );

        c.bench_function(
            &format!("stdvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vec::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                    buf
                });
            },
        );
    }
}

fn compare_insert_front(c: &mut Criterion) {
    const COUNT: usize = 500;

    c.bench_function(&format!("vector insert front {} values", COUNT), |b| {
        b.iter(|| {
            let mut buf = Vector::<usize>::new();
            for value in 0..COUNT {
                buf.insert(0, black_box(value));
            }
            buf
        });
    });

    c.bench_function(&format!("stdvec insert front {} values", COUNT), |b| {
        b.iter(|| {
            let mut buf = Vec::<usize>::new();
            for value in 0..COUNT {
                buf.insert(0, black_box(value));
            }
            buf
        });
    });
}

fn compare_clone(c: &mut Criterion) {
    let strings: Vec<String> = (0..200).map(|idx| format!("item-{idx}")).collect();
    let vector = Vector::<String>::from_slice(&strings);

    c.bench_function("vector clone 200 strings", |b| {
        b.iter(|| black_box(&vector).clone());
    });

    c.bench_function("stdvec clone 200 strings", |b| {
        b.iter(|| black_box(&strings).clone());
    });

    c.bench_function("vector clone_from 200 strings", |b| {
        let mut target = vector.clone();
        b.iter(|| target.clone_from(black_box(&vector)));
    });
}

criterion_group!(benches, compare_push, compare_insert_front, compare_clone);
criterion_main!(benches);
