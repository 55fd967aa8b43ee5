// ==============================================
// CONCURRENT BOX TESTS (integration)
// ==============================================
#![cfg(feature = "concurrency")]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use boxkit::builder::{ContainerBuilder, Strategy};
use boxkit::concurrent::ConcurrentBox;
use boxkit::error::BoxError;
use boxkit::policy::fifo::FifoBox;
use boxkit::traits::ConcurrentContainer;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

fn shared(strategy: Strategy, max_size: usize) -> Arc<ConcurrentBox<usize>> {
    Arc::new(ConcurrentBox::new(
        ContainerBuilder::new()
            .strategy(strategy)
            .max_size(max_size)
            .build(),
    ))
}

fn assert_concurrent<C: ConcurrentContainer>(_: &C) {}

mod producers_and_consumers {
    use super::*;

    #[test]
    fn concurrent_inserts_are_all_kept() {
        for strategy in Strategy::ALL {
            let container = shared(strategy, 0);
            let barrier = Arc::new(Barrier::new(THREADS));

            let handles: Vec<_> = (0..THREADS)
                .map(|thread_id| {
                    let container = Arc::clone(&container);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        for i in 0..PER_THREAD {
                            container.insert(thread_id * PER_THREAD + i).unwrap();
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(container.len(), THREADS * PER_THREAD, "{strategy}");
            let mut items = container.drain_all();
            items.sort_unstable();
            assert_eq!(items, (0..THREADS * PER_THREAD).collect::<Vec<_>>());
        }
    }

    #[test]
    fn mixed_producers_and_consumers_lose_nothing() {
        for strategy in Strategy::ALL {
            let container = shared(strategy, 64);
            let barrier = Arc::new(Barrier::new(THREADS * 2));
            let consumed = Arc::new(AtomicUsize::new(0));

            let producers: Vec<_> = (0..THREADS)
                .map(|thread_id| {
                    let container = Arc::clone(&container);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        let mut i = 0;
                        while i < PER_THREAD {
                            match container.insert(thread_id * PER_THREAD + i) {
                                Ok(()) => i += 1,
                                Err(BoxError::Full) => thread::yield_now(),
                                Err(other) => panic!("unexpected {other}"),
                            }
                        }
                    })
                })
                .collect();

            let consumers: Vec<_> = (0..THREADS)
                .map(|_| {
                    let container = Arc::clone(&container);
                    let barrier = Arc::clone(&barrier);
                    let consumed = Arc::clone(&consumed);
                    thread::spawn(move || {
                        barrier.wait();
                        let mut got = Vec::new();
                        while consumed.load(Ordering::SeqCst) < THREADS * PER_THREAD {
                            match container.remove() {
                                Ok(item) => {
                                    consumed.fetch_add(1, Ordering::SeqCst);
                                    got.push(item);
                                },
                                Err(BoxError::Empty) => thread::yield_now(),
                                Err(other) => panic!("unexpected {other}"),
                            }
                        }
                        got
                    })
                })
                .collect();

            for producer in producers {
                producer.join().unwrap();
            }
            let mut seen = HashSet::new();
            for consumer in consumers {
                for item in consumer.join().unwrap() {
                    assert!(seen.insert(item), "{strategy}: {item} handed out twice");
                }
            }

            assert_eq!(seen.len(), THREADS * PER_THREAD, "{strategy}");
            assert!(container.is_empty(), "{strategy}");
        }
    }

    #[test]
    fn bounded_container_never_overfills() {
        let container = shared(Strategy::Lifo, 10);
        let barrier = Arc::new(Barrier::new(THREADS));
        let accepted = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..THREADS)
            .map(|thread_id| {
                let container = Arc::clone(&container);
                let barrier = Arc::clone(&barrier);
                let accepted = Arc::clone(&accepted);
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..PER_THREAD {
                        if container.insert(thread_id * PER_THREAD + i).is_ok() {
                            accepted.fetch_add(1, Ordering::SeqCst);
                        }
                        assert!(container.len() <= 10);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(accepted.load(Ordering::SeqCst), 10);
        assert!(container.is_full());
    }
}

#[test]
fn fifo_order_is_preserved_per_producer() {
    let container = Arc::new(ConcurrentBox::new(FifoBox::new(0, 4)));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let container = Arc::clone(&container);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for seq in 0..PER_THREAD {
                    container.insert((thread_id, seq)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut next = [0usize; THREADS];
    for (thread_id, seq) in container.drain_all() {
        assert_eq!(seq, next[thread_id]);
        next[thread_id] += 1;
    }
    assert!(next.iter().all(|&n| n == PER_THREAD));
}

#[test]
fn clear_races_with_inserts_without_corruption() {
    let container = shared(Strategy::Fifo, 0);
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let container = Arc::clone(&container);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..2000 {
                container.insert(i).unwrap();
            }
        })
    };
    let clearer = {
        let container = Arc::clone(&container);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..50 {
                container.clear();
                thread::yield_now();
            }
        })
    };
    writer.join().unwrap();
    clearer.join().unwrap();

    let remaining = container.drain_all();
    assert!(remaining.windows(2).all(|w| w[0] < w[1]));
    assert!(container.with_engine(|engine| engine.check_invariants().is_ok()));
}

#[test]
fn wrapper_is_a_concurrent_container() {
    let container = shared(Strategy::Random, 0);
    assert_concurrent(container.as_ref());
}
