//! Trailing-edge debounce on top of the timer queue.
//!
//! Every trigger hands out a new token and schedules a wake-up; only the
//! wake-up carrying the latest token counts.

use crate::clock::Millis;

/// ~60 fps.
pub const SCROLL_QUIET: Millis = Millis(16);

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer {
    wait: Millis,
    token: u64,
}

impl Debouncer {
    pub fn new(wait: Millis) -> Self {
        Self { wait, token: 0 }
    }

    pub fn wait(&self) -> Millis {
        self.wait
    }

    /// Restart the quiet period. Returns the token the wake-up must carry.
    pub fn trigger(&mut self) -> u64 {
        self.token += 1;
        self.token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.token == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let mut debouncer = Debouncer::new(SCROLL_QUIET);
        let first = debouncer.trigger();
        let second = debouncer.trigger();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
        assert_eq!(debouncer.wait(), Millis(16));
    }
}
