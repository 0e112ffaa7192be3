use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// "Still mounted" flag shared between a component and its in-flight requests.
///
/// The component releases the guard from `on_cleanup`; a continuation that
/// resumes afterwards must check [`MountGuard::is_mounted`] and do nothing.
#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_is_shared_between_clones() {
        let guard = MountGuard::new();
        let in_flight = guard.clone();
        assert!(in_flight.is_mounted());

        guard.release();
        assert!(!in_flight.is_mounted());
    }
}
