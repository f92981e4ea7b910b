//! Page clock abstraction.
//!
//! Everything time-dependent in the page (the fake contact-form delay, toast
//! expiry, the loader overlay, scroll debouncing) reads the current time
//! through [`Clock`]. The browser host backs it with `Date.now()`; tests use
//! [`FakeClock`] and advance it by hand.

use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::ops::{Add, Sub};
use std::rc::Rc;

/// A point in time (or a span) in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Span from `earlier` to `self`, clamped at zero.
    pub fn since(self, earlier: Millis) -> Millis {
        Millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add for Millis {
    type Output = Millis;
    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Millis {
    type Output = Millis;
    fn sub(self, rhs: Millis) -> Millis {
        self.since(rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Millis;
}

/// Manually driven clock.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to a [`Runtime`](crate::runtime::Runtime).
#[derive(Clone, Default, Debug)]
pub struct FakeClock {
    now: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get().saturating_add(by.0));
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_clock_clones_share_time() {
        let clock = FakeClock::new();
        let handle = clock.clone();
        handle.advance(Millis(250));
        assert_eq!(clock.now(), Millis(250));
        clock.advance(Millis(10));
        assert_eq!(handle.now(), Millis(260));
    }

    #[test]
    fn millis_subtraction_saturates() {
        assert_eq!(Millis(5) - Millis(10), Millis::ZERO);
        assert_eq!(Millis(10).since(Millis(4)), Millis(6));
        assert_eq!(Millis(1) + Millis(2), Millis(3));
        assert_eq!(Millis(2000).to_string(), "2000ms");
    }
}
