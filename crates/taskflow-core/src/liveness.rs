//! Liveness Flag
//!
//! A shared flag an owner clears when it goes away. Deferred work captures a
//! clone and checks it before touching the owner again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    /// A new, alive flag
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owner as gone. Every clone observes it.
    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_is_seen_by_clones() {
        let owner = Liveness::new();
        let captured = owner.clone();
        assert!(captured.is_alive());
        owner.end();
        assert!(!captured.is_alive());
    }
}
