/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Worst-case accrued variable-rate factor.
//!
//! A deterministic stress model: direction and tier select one of four
//! monotone stress rates, which then scales the year fraction of the time
//! remaining to maturity.  For fixed takers the initial-margin tier is
//! stressed upward relative to liquidation; for variable takers downward.
//! The cell values are the reference system's calibration constants and are
//! reproduced operation-for-operation for bit parity.

use crate::error::MarginError;
use crate::params::MarginTier;
use crate::time::accrual_factor;
use crate::wad::Wad;

// ---------------------------------------------------------------------------
// Stress table constants
// ---------------------------------------------------------------------------

/// Liquidation-tier stress rate applied against a fixed taker: 0.09.
const STRESS_RATE_FIXED_TAKER_LM: Wad = Wad::from_raw(90_000_000_000_000_000);

/// Initial-margin scale-up applied to the fixed-taker base rate: 2.0.
const INITIAL_SCALE_FIXED_TAKER: Wad = Wad::from_int(2);

/// Liquidation-tier stress rate applied against a variable taker: 0.01.
const STRESS_RATE_VARIABLE_TAKER_LM: Wad = Wad::from_raw(10_000_000_000_000_000);

/// Initial-margin scale-down of the fixed-taker base rate for variable
/// takers: 0.5.
const INITIAL_SCALE_VARIABLE_TAKER: Wad = Wad::from_raw(500_000_000_000_000_000);

// ---------------------------------------------------------------------------
// TakerSide
// ---------------------------------------------------------------------------

/// Direction of a swap position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TakerSide {
    /// Pays fixed, receives floating (negative variable-token balance).
    FixedTaker,
    /// Pays floating, receives fixed (non-negative variable-token balance).
    VariableTaker,
}

impl TakerSide {
    /// Classify a position by the sign of its variable-token balance.
    #[inline(always)]
    pub fn from_variable_balance(variable_token_balance: Wad) -> TakerSide {
        if variable_token_balance.is_negative() {
            TakerSide::FixedTaker
        } else {
            TakerSide::VariableTaker
        }
    }
}

// ---------------------------------------------------------------------------
// Worst-case variable factor
// ---------------------------------------------------------------------------

/// Worst-case accrued variable-rate factor at maturity.
///
/// `time_in_seconds` is the wad-scaled time remaining to maturity and must
/// be non-negative (callers derive it from a validated term window).  A zero
/// duration yields a zero factor for every table cell.
pub fn worst_case_variable_factor(
    time_in_seconds: Wad,
    side: TakerSide,
    tier: MarginTier,
) -> Result<Wad, MarginError> {
    let time_in_years = accrual_factor(time_in_seconds)?;
    let stress_rate = match (side, tier) {
        (TakerSide::FixedTaker, MarginTier::Liquidation) => STRESS_RATE_FIXED_TAKER_LM,
        (TakerSide::FixedTaker, MarginTier::Initial) => {
            STRESS_RATE_FIXED_TAKER_LM.mul(INITIAL_SCALE_FIXED_TAKER)?
        }
        (TakerSide::VariableTaker, MarginTier::Liquidation) => STRESS_RATE_VARIABLE_TAKER_LM,
        (TakerSide::VariableTaker, MarginTier::Initial) => {
            STRESS_RATE_FIXED_TAKER_LM.mul(INITIAL_SCALE_VARIABLE_TAKER)?
        }
    };
    time_in_years.mul(stress_rate)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
