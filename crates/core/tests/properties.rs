use proptest::prelude::*;
use ringlink_core::{CircularBuffer, OverwritePolicy};

const CAPACITY: usize = 8;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn puts_without_gets_report_unread_data(count in 1..=CAPACITY, seed in any::<u32>()) {
        let mut cb: CircularBuffer<u32, CAPACITY> = CircularBuffer::new();
        for i in 0..count {
            cb.put(seed.wrapping_add(i as u32));
        }
        prop_assert!(!cb.is_empty());
        prop_assert!(cb.has_unread_data());
        prop_assert_eq!(cb.is_full(), count == CAPACITY);
        prop_assert_eq!(cb.len(), count);
    }

    #[test]
    fn full_round_trip_preserves_order(values in prop::array::uniform8(any::<i64>())) {
        let mut cb: CircularBuffer<i64, CAPACITY> = CircularBuffer::new();
        for v in values {
            cb.put(v);
        }
        let got: Vec<i64> = (0..CAPACITY).map(|_| cb.get()).collect();
        prop_assert_eq!(got, values.to_vec());
        prop_assert!(cb.is_empty());
    }

    #[test]
    fn overwrite_reads_back_the_last_n_values(values in prop::collection::vec(any::<u16>(), CAPACITY + 1..64)) {
        let mut cb: CircularBuffer<u16, CAPACITY> = CircularBuffer::new();
        for v in &values {
            cb.put(*v);
        }
        // Reads start at slot 0, so the last N values come back rotated by
        // where the final lap left off.
        let got: Vec<u16> = (0..CAPACITY).map(|_| cb.get()).collect();
        let mut expected: Vec<u16> = values[values.len() - CAPACITY..].to_vec();
        expected.rotate_left((CAPACITY - values.len() % CAPACITY) % CAPACITY);
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn drop_oldest_reads_back_the_last_n_values_in_order(values in prop::collection::vec(any::<u16>(), CAPACITY..64)) {
        let mut cb: CircularBuffer<u16, CAPACITY> =
            CircularBuffer::new().with_policy(OverwritePolicy::DropOldest);
        for v in &values {
            cb.put(*v);
        }
        prop_assert!(cb.is_full());
        let got: Vec<u16> = cb.drain().collect();
        prop_assert_eq!(got, values[values.len() - CAPACITY..].to_vec());
    }

    #[test]
    fn sweep_visits_exactly_capacity_cells(puts in 0..40usize, gets in 0..40usize) {
        let mut cb: CircularBuffer<u8, CAPACITY> = CircularBuffer::new();
        for i in 0..puts {
            cb.put(i as u8);
        }
        for _ in 0..gets.min(puts) {
            cb.get();
        }
        prop_assert_eq!(cb.iter().count(), CAPACITY);
        prop_assert_eq!(cb.iter_mut().count(), CAPACITY);
        prop_assert_eq!(cb.capacity(), CAPACITY);
        prop_assert_eq!(cb.advance(cb.begin(), CAPACITY).cursor(), cb.begin().cursor());
    }
}
