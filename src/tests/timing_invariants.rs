// Timing invariants - Block time vs. clock, parent, and staker horizon

#[cfg(test)]
mod block_timing_tests {
    use crate::state::view::{ChainView, FeeState, MemoryChain, StakerIter, StateError};
    use crate::state::{next_block_time, next_staker_change_time};
    use crate::time::ManualClock;
    use crate::types::{NodeId, Staker, Timestamp};
    use std::cell::Cell;
    use std::rc::Rc;

    // ===== HELPER FUNCTIONS =====

    fn staker(seed: u8, next_time: Timestamp) -> Staker {
        Staker::new(NodeId::from_bytes([seed; 32]), 2_000, next_time)
    }

    /// Chain view that counts how many times each staker iterator is
    /// released, and can fail the pending acquisition.
    #[derive(Default)]
    struct ReleaseTrackingChain {
        current: Vec<Staker>,
        pending: Vec<Staker>,
        fail_pending: bool,
        current_releases: Rc<Cell<usize>>,
        pending_releases: Rc<Cell<usize>>,
    }

    struct TrackedIter<'a> {
        inner: std::slice::Iter<'a, Staker>,
        releases: Rc<Cell<usize>>,
    }

    impl Iterator for TrackedIter<'_> {
        type Item = Staker;

        fn next(&mut self) -> Option<Staker> {
            self.inner.next().copied()
        }
    }

    impl Drop for TrackedIter<'_> {
        fn drop(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    impl ChainView for ReleaseTrackingChain {
        fn timestamp(&self) -> Timestamp {
            0
        }

        fn fee_state(&self) -> FeeState {
            FeeState::default()
        }

        fn current_stakers(&self) -> Result<StakerIter<'_>, StateError> {
            Ok(Box::new(TrackedIter {
                inner: self.current.iter(),
                releases: Rc::clone(&self.current_releases),
            }))
        }

        fn pending_stakers(&self) -> Result<StakerIter<'_>, StateError> {
            if self.fail_pending {
                return Err(StateError::ReadFailed("pending staker set".into()));
            }
            Ok(Box::new(TrackedIter {
                inner: self.pending.iter(),
                releases: Rc::clone(&self.pending_releases),
            }))
        }
    }

    // ===== BLOCK TIME SELECTION =====

    #[test]
    fn test_no_stakers_means_clock_time_uncapped() {
        super::super::init_tracing();

        let chain = MemoryChain::new(90);
        let clock = ManualClock::new(100);

        let decision = next_block_time(&chain, &clock).unwrap();
        assert_eq!(decision.timestamp, 100);
        assert!(!decision.capped);
    }

    #[test]
    fn test_pending_staker_caps_block_time() {
        let mut chain = MemoryChain::new(90);
        chain.add_pending_staker(staker(1, 95));
        let clock = ManualClock::new(100);

        let decision = next_block_time(&chain, &clock).unwrap();
        assert_eq!(decision.timestamp, 95);
        assert!(decision.capped);
    }

    #[test]
    fn test_parent_ahead_of_clock_lands_on_current_change() {
        let mut chain = MemoryChain::new(90);
        chain.add_current_staker(staker(1, 90));
        let clock = ManualClock::new(50);

        let decision = next_block_time(&chain, &clock).unwrap();
        assert_eq!(decision.timestamp, 90);
        assert!(decision.capped);
    }

    #[test]
    fn test_block_time_never_regresses_below_parent() {
        let mut chain = MemoryChain::new(500);
        chain.add_pending_staker(staker(1, 800));

        for now in [0, 100, 499, 500, 650] {
            let decision = next_block_time(&chain, &ManualClock::new(now)).unwrap();
            assert!(decision.timestamp >= 500, "regressed at now={}", now);
            assert!(decision.timestamp <= 800);
        }
    }

    // ===== ITERATOR RELEASE =====

    #[test]
    fn test_iterators_released_exactly_once() {
        let chain = ReleaseTrackingChain {
            current: vec![staker(1, 60)],
            pending: vec![staker(2, 40)],
            ..Default::default()
        };

        assert_eq!(next_staker_change_time(&chain).unwrap(), Some(40));
        assert_eq!(chain.current_releases.get(), 1);
        assert_eq!(chain.pending_releases.get(), 1);
    }

    #[test]
    fn test_acquired_iterator_released_on_error_path() {
        // Pending acquisition fails after the current iterator was handed
        // out; the current iterator must still be released exactly once.
        let chain = ReleaseTrackingChain {
            current: vec![staker(1, 60)],
            fail_pending: true,
            ..Default::default()
        };

        assert!(next_staker_change_time(&chain).is_err());
        assert_eq!(chain.current_releases.get(), 1);
        assert_eq!(chain.pending_releases.get(), 0);
    }

    #[test]
    fn test_horizon_scan_only_needs_the_heads() {
        let mut chain = MemoryChain::new(0);
        for (seed, t) in [(1u8, 10u64), (2, 20), (3, 30)] {
            chain.add_current_staker(staker(seed, t));
            chain.add_pending_staker(staker(seed + 10, t + 5));
        }

        assert_eq!(next_staker_change_time(&chain).unwrap(), Some(10));
    }
}
