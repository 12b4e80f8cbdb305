//! Benchmark workloads for the slotline queue.
//!
//! Provides deterministic operation streams for benchmarks and soak tests:
//!
//! - [`churn_workload`]: mixed enqueue / dequeue / remove traffic
//! - [`filled_queue`]: a queue at capacity in identity order
//! - [`run_workload`]: apply a workload and report how many ops succeeded

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slotline_arena::IndexedQueue;
use slotline_core::Identity;

/// One step of a benchmark workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Enqueue the identity.
    Enqueue(Identity),
    /// Dequeue from the front.
    Dequeue,
    /// Remove the identity wherever it is.
    Remove(Identity),
}

/// Generate a deterministic mixed workload over identities `[0, universe)`.
///
/// Roughly half the ops are enqueues and the rest split evenly between
/// dequeues and removals, driven by a 64-bit LCG seeded with `seed`.
pub fn churn_workload(len: usize, universe: u32, seed: u64) -> Vec<Op> {
    let mut state = seed;
    let mut ops = Vec::with_capacity(len);
    for _ in 0..len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let roll = (state >> 33) as u32;
        let identity = Identity(roll % universe.max(1));
        ops.push(match roll % 4 {
            0 | 1 => Op::Enqueue(identity),
            2 => Op::Dequeue,
            _ => Op::Remove(identity),
        });
    }
    ops
}

/// A queue of `capacity` slots holding identities `0..capacity` in order.
pub fn filled_queue(capacity: u32) -> IndexedQueue<Identity> {
    let mut queue = match IndexedQueue::new(capacity.max(1)) {
        Ok(q) => q,
        Err(e) => panic!("invalid bench capacity {capacity}: {e}"),
    };
    for id in 0..capacity {
        let _ = queue.enqueue(Identity(id));
    }
    queue
}

/// Apply `ops` to `queue`, returning how many ops changed the queue.
pub fn run_workload(queue: &mut IndexedQueue<Identity>, ops: &[Op]) -> usize {
    let mut applied = 0;
    for op in ops {
        let changed = match *op {
            Op::Enqueue(id) => queue.enqueue(id).is_ok_and(|e| e.is_inserted()),
            Op::Dequeue => queue.dequeue().is_some(),
            Op::Remove(id) => queue.remove_identity(id).is_some(),
        };
        applied += usize::from(changed);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn churn_workload_deterministic() {
        let a = churn_workload(500, 64, 42);
        let b = churn_workload(500, 64, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 500);
    }

    #[test]
    fn churn_workload_stays_in_universe() {
        for op in churn_workload(1000, 10, 7) {
            if let Op::Enqueue(id) | Op::Remove(id) = op {
                assert!(id.0 < 10, "identity {id} out of universe");
            }
        }
    }

    #[test]
    fn filled_queue_is_full() {
        let q = filled_queue(16);
        assert!(q.is_full());
        assert_eq!(q.front(), Some(&Identity(0)));
        assert_eq!(q.back(), Some(&Identity(15)));
    }

    #[test]
    fn workload_leaves_queue_consistent() {
        let mut q = IndexedQueue::new(32).unwrap();
        let applied = run_workload(&mut q, &churn_workload(5_000, 32, 3));
        assert!(applied > 0);
        q.check_invariants().unwrap();
    }
}
