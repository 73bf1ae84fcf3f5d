/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Error taxonomy for the margin engine.
//!
//! Every failure mode is a distinct, recoverable [`MarginError`] variant.
//! Nothing is coerced to zero: the reference contract system let unset
//! parameters default to zero and then panicked on division deep inside the
//! math; here the same conditions surface as `InvalidParameters` at
//! configuration time or `DivisionByZero` at the arithmetic layer.

use thiserror::Error;

use crate::params::MarketId;
use crate::wad::Wad;

// ---------------------------------------------------------------------------
// MarginError
// ---------------------------------------------------------------------------

/// Reason a margin computation or configuration call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarginError {
    /// A checked fixed-point operation exceeded the `i128` raw range.
    #[error("fixed-point arithmetic overflow")]
    ArithmeticOverflow,

    /// Division by a divisor of exactly zero.
    #[error("fixed-point division by zero")]
    DivisionByZero,

    /// A term window with `term_end` earlier than `term_start`.
    #[error("invalid time range: term end {term_end} precedes term start {term_start}")]
    InvalidTimeRange {
        /// Wad-scaled start timestamp in seconds.
        term_start: Wad,
        /// Wad-scaled end timestamp in seconds.
        term_end: Wad,
    },

    /// A risk parameter record violated an ordering or positivity invariant.
    #[error("invalid risk parameters: {reason}")]
    InvalidParameters {
        /// The invariant that failed, naming the offending field.
        reason: &'static str,
    },

    /// The market has never been configured.
    #[error("unknown market {market}")]
    UnknownMarket {
        /// The key that was looked up.
        market: MarketId,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MarginError::ArithmeticOverflow.to_string(),
            "fixed-point arithmetic overflow"
        );
        assert_eq!(
            MarginError::DivisionByZero.to_string(),
            "fixed-point division by zero"
        );
        let err = MarginError::InvalidTimeRange {
            term_start: Wad::from_int(10),
            term_end: Wad::from_int(5),
        };
        assert_eq!(
            err.to_string(),
            "invalid time range: term end 5 precedes term start 10"
        );
    }

    #[test]
    fn test_unknown_market_display_includes_key() {
        let err = MarginError::UnknownMarket {
            market: MarketId::from_label("AaveV2"),
        };
        assert!(err.to_string().contains("AaveV2"));
    }

    #[test]
    fn test_equality_and_clone() {
        let a = MarginError::InvalidParameters {
            reason: "min_delta_im must be >= min_delta_lm",
        };
        assert_eq!(a.clone(), a);
        assert_ne!(a, MarginError::DivisionByZero);
    }
}
