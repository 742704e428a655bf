//! Test utilities for record parser testing

use crate::app::models::Record;


/// Assert that a sequence satisfies the ascending ordering-key invariant
pub fn assert_sorted_by_order(records: &[Record]) {
    for pair in records.windows(2) {
        assert!(
            pair[0].order_key() <= pair[1].order_key(),
            "records out of order: {:?} before {:?}",
            pair[0].raw,
            pair[1].raw
        );
    }
}
