//! FIFO contract tests lewat public API
//!
//! Usage:
//!   cargo test --test fifo_contract

use std::collections::VecDeque;

use proptest::prelude::*;
use ringkit::core::{
    BufferError, FixedRingBuffer, GrowableRingBuffer, OverwritingRingBuffer, RingQueue,
};

fn assert_flags<Q: RingQueue<u32>>(queue: &Q) {
    let size = queue.len();
    assert_eq!(queue.is_empty(), size == 0);
    assert_eq!(queue.is_full(), size == queue.capacity());
    assert!(!(queue.is_empty() && queue.is_full()));
}

#[test]
fn fixed_and_growable_fill_then_drain_in_order() {
    const N: u32 = 6;
    let mut fixed = FixedRingBuffer::new(N as usize);
    let mut growable = GrowableRingBuffer::new(N as usize);

    for i in 0..N {
        fixed.enqueue(i).unwrap();
        growable.enqueue(i).unwrap();
        assert_flags(&fixed);
        assert_flags(&growable);
    }

    assert_eq!(
        fixed.enqueue(N).unwrap_err().error(),
        BufferError::CapacityExceeded { capacity: 6 }
    );
    assert_eq!(
        growable.enqueue(N).unwrap_err().error(),
        BufferError::CapacityExceeded { capacity: 6 }
    );

    for i in 0..N {
        assert_eq!(fixed.dequeue(), Ok(i));
        assert_eq!(growable.dequeue(), Ok(i));
    }
    assert_eq!(fixed.dequeue(), Err(BufferError::BufferEmpty));
    assert_eq!(growable.dequeue(), Err(BufferError::BufferEmpty));
}

#[test]
fn failed_operations_leave_state_untouched() {
    let mut rb = FixedRingBuffer::new(2);
    rb.enqueue(1u32).unwrap();
    rb.enqueue(2).unwrap();
    let snapshot = rb.peek_raw().to_vec();

    assert!(rb.enqueue(3).is_err());

    assert_eq!(rb.peek_raw(), snapshot.as_slice());
    assert_eq!(rb.len(), 2);
    assert_eq!(rb.drain().collect::<Vec<_>>(), vec![1, 2]);
    assert!(rb.dequeue().is_err());
    assert!(rb.is_empty());
}

#[test]
fn overwriting_keeps_newest_items() {
    let mut rb = OverwritingRingBuffer::new(3);

    for item in [10, 20, 30, 40] {
        rb.enqueue(item);
        assert_flags(&rb);
    }

    assert_eq!(rb.drain().collect::<Vec<_>>(), vec![20, 30, 40]);
}

#[test]
fn interleaved_operations_wrap_around() {
    const N: usize = 5;
    let mut fixed = FixedRingBuffer::new(N);
    let mut growable = GrowableRingBuffer::new(N);
    let mut overwriting = OverwritingRingBuffer::new(N);

    for i in 0..(2 * N as u32) {
        fixed.enqueue(i).unwrap();
        growable.enqueue(i).unwrap();
        assert_eq!(overwriting.enqueue(i), None);

        assert_eq!(fixed.dequeue(), Ok(i));
        assert_eq!(growable.dequeue(), Ok(i));
        assert_eq!(overwriting.dequeue(), Some(i));
    }

    assert_eq!(growable.allocated(), 1);
}

#[test]
fn raw_view_is_read_only() {
    let mut rb = OverwritingRingBuffer::new(4);
    for i in 0..6u32 {
        rb.enqueue(i);
    }
    let cursor = rb.cursor();
    let len = rb.len();

    for _ in 0..3 {
        let _ = rb.peek_raw();
        let _ = rb.to_string();
    }

    assert_eq!(rb.cursor(), cursor);
    assert_eq!(rb.len(), len);
}

#[test]
fn zero_capacity_is_rejected() {
    assert_eq!(
        FixedRingBuffer::<u8>::try_new(0).unwrap_err(),
        BufferError::ZeroCapacity
    );
    assert_eq!(
        GrowableRingBuffer::<u8>::try_new(0).unwrap_err(),
        BufferError::ZeroCapacity
    );
    assert_eq!(
        OverwritingRingBuffer::<u8>::try_new(0).unwrap_err(),
        BufferError::ZeroCapacity
    );
}

/// `Some(x)` = enqueue x, `None` = dequeue
fn ops() -> impl Strategy<Value = Vec<Option<u32>>> {
    prop::collection::vec(prop::option::of(any::<u32>()), 0..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fixed_matches_bounded_model(capacity in 1usize..16, ops in ops()) {
        let mut rb = FixedRingBuffer::new(capacity);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Some(item) => {
                    let result = rb.enqueue(item);
                    if model.len() == capacity {
                        prop_assert_eq!(result.unwrap_err().into_inner(), item);
                    } else {
                        prop_assert!(result.is_ok());
                        model.push_back(item);
                    }
                }
                None => prop_assert_eq!(rb.dequeue().ok(), model.pop_front()),
            }
            prop_assert_eq!(rb.len(), model.len());
        }
    }

    #[test]
    fn prop_growable_matches_bounded_model(capacity in 1usize..16, ops in ops()) {
        let mut rb = GrowableRingBuffer::new(capacity);
        let mut model = VecDeque::new();
        let mut peak = 0;

        for op in ops {
            match op {
                Some(item) => {
                    if model.len() == capacity {
                        prop_assert!(rb.enqueue(item).is_err());
                    } else {
                        prop_assert!(rb.enqueue(item).is_ok());
                        model.push_back(item);
                    }
                }
                None => prop_assert_eq!(rb.dequeue().ok(), model.pop_front()),
            }
            peak = peak.max(model.len());
            prop_assert_eq!(rb.len(), model.len());
            prop_assert!(rb.allocated() <= peak);
        }
    }

    #[test]
    fn prop_overwriting_keeps_last_capacity_items(capacity in 1usize..16, ops in ops()) {
        let mut rb = OverwritingRingBuffer::new(capacity);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Some(item) => {
                    let evicted = if model.len() == capacity { model.pop_front() } else { None };
                    model.push_back(item);
                    prop_assert_eq!(rb.enqueue(item), evicted);
                }
                None => prop_assert_eq!(rb.dequeue(), model.pop_front()),
            }
            prop_assert_eq!(rb.len(), model.len());
            prop_assert!(rb.len() <= rb.capacity());
        }

        prop_assert_eq!(rb.drain().collect::<Vec<_>>(), Vec::from(model));
    }
}
