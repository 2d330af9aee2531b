use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use std::thread;

use ledger_xfer::{Account, AccountId, AccountStore, Amount};

/// Store with `count` accounts, each holding a large balance so transfers
/// never reject during measurement.
fn seeded_store(count: AccountId) -> AccountStore {
    AccountStore::from_accounts((1..=count).map(|id| {
        Account::new(
            id,
            format!("account-{id}"),
            Amount::from_scaled(1_000_000_000),
        )
    }))
    .expect("valid seed")
}

fn bench_sequential_transfers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");

    for count in [10_000u32, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let store = seeded_store(2);
                for i in 0..count {
                    // alternate directions over the same pair
                    let (src, dst) = if i % 2 == 0 { (1, 2) } else { (2, 1) };
                    let _ = black_box(store.try_apply_transfer(src, dst, Amount::from_scaled(1)));
                }
                store
            });
        });
    }

    group.finish();
}

fn bench_contended_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_pair");
    group.sample_size(10);

    // All threads fight over the same two accounts.
    for threads in [2u32, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let store = Arc::new(seeded_store(2));
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let store = Arc::clone(&store);
                            thread::spawn(move || {
                                let (src, dst) = if t % 2 == 0 { (1, 2) } else { (2, 1) };
                                for _ in 0..10_000 {
                                    let _ = black_box(store.try_apply_transfer(
                                        src,
                                        dst,
                                        Amount::from_scaled(1),
                                    ));
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                    store
                });
            },
        );
    }

    group.finish();
}

fn bench_disjoint_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_pairs");
    group.sample_size(10);

    // Each thread owns its own pair; no lock contention at all.
    for threads in [2u32, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let store = Arc::new(seeded_store(threads * 2));
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let store = Arc::clone(&store);
                            thread::spawn(move || {
                                let src = t * 2 + 1;
                                let dst = t * 2 + 2;
                                for _ in 0..10_000 {
                                    let _ = black_box(store.try_apply_transfer(
                                        src,
                                        dst,
                                        Amount::from_scaled(1),
                                    ));
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                    store
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_transfers,
    bench_contended_pair,
    bench_disjoint_pairs,
);

criterion_main!(benches);
