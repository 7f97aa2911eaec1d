use std::sync::{Mutex, PoisonError};

/// A counter that many threads can bump at once. Share it through an `Arc`.
#[derive(Debug, Default)]
pub struct Counter {
    value: Mutex<u64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&self) {
        // A panic elsewhere cannot leave a half-written integer behind, so a
        // poisoned lock is still safe to use.
        let mut value = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        *value += 1;
    }

    pub fn value(&self) -> u64 {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    fn assert_counter(got: &Counter, want: u64) {
        assert_eq!(got.value(), want, "expected {want} got {}", got.value());
    }

    #[test]
    fn test_incrementing_three_times_leaves_it_at_three() {
        let counter = Counter::new();
        counter.inc();
        counter.inc();
        counter.inc();

        assert_counter(&counter, 3);
    }

    #[test]
    fn test_runs_safely_concurrently() {
        let wanted_count = 1000;
        let counter = Arc::new(Counter::new());

        let handles: Vec<_> = (0..wanted_count)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || counter.inc())
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_counter(&counter, wanted_count);
    }

    #[test]
    fn test_scoped_threads_share_by_reference() {
        let counter = Counter::new();

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..125 {
                        counter.inc();
                    }
                });
            }
        });

        assert_counter(&counter, 1000);
    }

    proptest! {
        #[test]
        fn prop_value_matches_number_of_increments(n in 0u64..500) {
            let counter = Counter::new();
            for _ in 0..n {
                counter.inc();
            }
            prop_assert_eq!(counter.value(), n);
        }
    }
}
