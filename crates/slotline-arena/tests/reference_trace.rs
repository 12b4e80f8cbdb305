//! Integration test: replay the reference demo trace.
//!
//! Four subjects (identities 1..=4) move through a four-slot queue. Each
//! block starts from an empty queue and checks the exact dequeue order,
//! covering FIFO reuse of recycled slots and removal at the head, the
//! tail and the interior.

use slotline_arena::{IndexedQueue, QueueConfig};
use slotline_core::Identified;
use slotline_test_utils::{
    assert_queue_matches, demo_config, demo_subjects, ReferenceQueue, Subject,
};

fn names(out: &[Option<Subject>]) -> Vec<Option<&str>> {
    out.iter().map(|s| s.as_ref().map(Subject::name)).collect()
}

fn fill(q: &mut IndexedQueue<Subject>) {
    for s in demo_subjects() {
        q.enqueue(s).unwrap();
    }
}

#[test]
fn fifo_with_reenqueue() {
    let mut q = IndexedQueue::with_config(demo_config()).unwrap();
    let [a, b, ..] = demo_subjects();

    fill(&mut q);
    let mut out = vec![q.dequeue(), q.dequeue()];
    q.enqueue(a.clone()).unwrap();
    out.push(q.dequeue());
    q.enqueue(b).unwrap();
    out.extend([q.dequeue(), q.dequeue(), q.dequeue()]);
    q.enqueue(a).unwrap();
    out.push(q.dequeue());

    assert_eq!(
        names(&out),
        vec![
            Some("Aaron"),
            Some("Baron"),
            Some("Cauron"),
            Some("Dareon"),
            Some("Aaron"),
            Some("Baron"),
            Some("Aaron"),
        ]
    );
    assert!(q.is_empty());
    q.check_invariants().unwrap();
}

#[test]
fn remove_head_then_tail() {
    let mut q = IndexedQueue::with_config(demo_config()).unwrap();
    let [a, _, _, d] = demo_subjects();

    fill(&mut q);
    q.remove(&a);
    let first = q.dequeue();
    q.remove(&d);
    let second = q.dequeue();

    assert_eq!(names(&[first, second]), vec![Some("Baron"), Some("Cauron")]);
    assert!(q.is_empty());
    q.check_invariants().unwrap();
}

#[test]
fn remove_two_interior() {
    let mut q = IndexedQueue::with_config(demo_config()).unwrap();
    let [_, b, c, _] = demo_subjects();

    fill(&mut q);
    q.remove(&b);
    q.remove(&c);
    let out = [q.dequeue(), q.dequeue()];

    assert_eq!(names(&out), vec![Some("Aaron"), Some("Dareon")]);
    assert!(q.is_empty());
}

#[test]
fn remove_interior_and_tail() {
    let mut q = IndexedQueue::with_config(demo_config()).unwrap();
    let [_, b, _, d] = demo_subjects();

    fill(&mut q);
    q.remove(&b);
    q.remove(&d);
    let out = [q.dequeue(), q.dequeue()];

    assert_eq!(names(&out), vec![Some("Aaron"), Some("Cauron")]);
    assert!(q.is_empty());
}

#[test]
fn blocks_chain_on_one_queue() {
    // The demo runs every block on the same queue; slot recycling across
    // blocks must not leak state.
    let mut q = IndexedQueue::with_config(demo_config()).unwrap();
    let mut model = ReferenceQueue::new(demo_config());
    let [a, b, c, d] = demo_subjects();

    for removals in [vec![&a, &d], vec![&b, &c], vec![&b, &d]] {
        for s in demo_subjects() {
            q.enqueue(s.clone()).unwrap();
            model.enqueue(s).unwrap();
        }
        for s in removals {
            assert_eq!(q.remove(s), model.remove(s.identity()));
            assert_queue_matches(&q, &model);
        }
        while let Some(s) = q.dequeue() {
            assert_eq!(Some(s), model.dequeue());
        }
        assert_queue_matches(&q, &model);
    }
}

#[test]
fn full_queue_rejects_fifth_subject() {
    let config = QueueConfig::new(4).with_identity_bound(6);
    let mut q = IndexedQueue::with_config(config).unwrap();
    fill(&mut q);

    let rejected = q.enqueue(Subject::new(5, "Eron")).unwrap_err();
    assert!(rejected.is_full());
    assert_eq!(rejected.into_inner().name(), "Eron");
    assert_eq!(q.len(), 4);

    q.dequeue();
    assert!(q.enqueue(Subject::new(5, "Eron")).unwrap().is_inserted());
    q.check_invariants().unwrap();
}
