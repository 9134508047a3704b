//! Wall-clock source for record timestamps.
//!
//! # Responsibility
//! - Provide the single epoch-millisecond source used by build paths.
//!
//! # Invariants
//! - Never panics; a pre-epoch system clock degrades to `0`.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::now_epoch_ms;

    #[test]
    fn now_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }
}
