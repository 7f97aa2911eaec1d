//! Countdown with an injected `Sleeper`.
//!
//! Production code sleeps for real; tests swap in a spy that records what
//! happened instead of waiting.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub const FINAL_WORD: &str = "Go!";
pub const COUNTDOWN_START: u32 = 3;

pub trait Sleeper {
    fn sleep(&mut self);
}

/// Sleeps for one second.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSleeper;

impl Sleeper for DefaultSleeper {
    fn sleep(&mut self) {
        thread::sleep(Duration::from_secs(1));
    }
}

/// Hands a fixed duration to whatever sleep function it was built with.
pub struct ConfigurableSleeper<F>
where
    F: FnMut(Duration),
{
    duration: Duration,
    sleep: F,
}

impl<F> ConfigurableSleeper<F>
where
    F: FnMut(Duration),
{
    pub fn new(duration: Duration, sleep: F) -> Self {
        Self { duration, sleep }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl ConfigurableSleeper<fn(Duration)> {
    /// A sleeper backed by `std::thread::sleep`.
    pub fn real(duration: Duration) -> Self {
        Self::new(duration, thread::sleep)
    }
}

impl<F> Sleeper for ConfigurableSleeper<F>
where
    F: FnMut(Duration),
{
    fn sleep(&mut self) {
        (self.sleep)(self.duration)
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep(&mut self) {
        (**self).sleep()
    }
}

/// Counts down from 3, sleeping after every number, then prints `Go!`.
pub fn countdown<W: Write, S: Sleeper>(out: W, sleeper: S) -> io::Result<()> {
    Countdown::default().run(out, sleeper)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    start: u32,
    final_word: String,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            start: COUNTDOWN_START,
            final_word: FINAL_WORD.to_string(),
        }
    }
}

impl Countdown {
    pub fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    pub fn final_word(mut self, word: impl Into<String>) -> Self {
        self.final_word = word.into();
        self
    }

    pub fn run<W: Write, S: Sleeper>(&self, mut out: W, mut sleeper: S) -> io::Result<()> {
        for i in (1..=self.start).rev() {
            writeln!(out, "{i}")?;
            sleeper.sleep();
        }
        write!(out, "{}", self.final_word)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const WRITE: &str = "write";
    const SLEEP: &str = "sleep";

    /// Records every sleep and write into one shared log, so the test can
    /// check how they interleave.
    #[derive(Clone, Default)]
    struct SpyCountdownOperations {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl SpyCountdownOperations {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl Sleeper for SpyCountdownOperations {
        fn sleep(&mut self) {
            self.calls.borrow_mut().push(SLEEP);
        }
    }

    impl Write for SpyCountdownOperations {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls.borrow_mut().push(WRITE);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct SpySleeper {
        calls: usize,
    }

    impl Sleeper for SpySleeper {
        fn sleep(&mut self) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_prints_3_to_go() {
        let mut buffer = Vec::new();
        countdown(&mut buffer, SpySleeper::default()).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "3\n2\n1\nGo!");
    }

    #[test]
    fn test_sleeps_three_times() {
        let mut sleeper = SpySleeper::default();
        countdown(io::sink(), &mut sleeper).unwrap();

        assert_eq!(sleeper.calls, 3);
    }

    #[test]
    fn test_sleep_before_every_print() {
        let spy = SpyCountdownOperations::default();
        Countdown::default()
            .final_word("Go!")
            .run(spy.clone(), spy.clone())
            .unwrap();

        // writeln! may split a line into several writes; only the order of
        // line boundaries matters here.
        let mut collapsed: Vec<&str> = spy.calls();
        collapsed.dedup();
        assert_eq!(
            collapsed,
            vec![WRITE, SLEEP, WRITE, SLEEP, WRITE, SLEEP, WRITE]
        );
    }

    #[test]
    fn test_configurable_sleeper_hands_over_duration() {
        let sleep_time = Duration::from_secs(5);
        let mut slept = None;

        {
            let mut sleeper = ConfigurableSleeper::new(sleep_time, |d| slept = Some(d));
            sleeper.sleep();
        }

        assert_eq!(slept, Some(sleep_time));
    }

    #[test]
    fn test_custom_start_and_word() {
        let mut buffer = Vec::new();
        let mut sleeper = SpySleeper::default();
        Countdown::default()
            .start(5)
            .final_word("Liftoff")
            .run(&mut buffer, &mut sleeper)
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "5\n4\n3\n2\n1\nLiftoff");
        assert_eq!(sleeper.calls, 5);
    }

    #[test]
    fn test_zero_start_prints_only_final_word() {
        let mut buffer = Vec::new();
        let mut sleeper = SpySleeper::default();
        Countdown::default().start(0).run(&mut buffer, &mut sleeper).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "Go!");
        assert_eq!(sleeper.calls, 0);
    }

    #[test]
    fn test_writer_errors_propagate() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sleeper = SpySleeper::default();
        let err = countdown(BrokenPipe, &mut sleeper).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sleeper.calls, 0);
    }
}
