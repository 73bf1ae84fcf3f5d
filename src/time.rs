/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Time-to-year-fraction conversion and the accrued fixed-rate factor.
//!
//! Durations and timestamps cross this API wad-scaled, exactly as the
//! reference contracts pass them; `accrual_factor` is a single wad division
//! by [`SECONDS_IN_YEAR`] and inherits its truncation behaviour.

use crate::error::MarginError;
use crate::wad::Wad;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Seconds per year (365 days), wad-scaled.
pub const SECONDS_IN_YEAR: Wad = Wad::from_int(31_536_000);

/// Constant per-annum fixed rate of the covered model: 1%, wad-scaled.
pub const FIXED_RATE: Wad = Wad::from_raw(10_000_000_000_000_000);

// ---------------------------------------------------------------------------
// Accrual
// ---------------------------------------------------------------------------

/// Convert a wad-scaled duration in seconds to a year fraction.
#[inline(always)]
pub fn accrual_factor(time_in_seconds: Wad) -> Result<Wad, MarginError> {
    time_in_seconds.div(SECONDS_IN_YEAR)
}

/// Accrued fixed-rate yield factor over a term window, at maturity.
///
/// `accrual_factor(term_end - term_start) * FIXED_RATE`.  Fails with
/// [`MarginError::InvalidTimeRange`] when `term_end` precedes `term_start`.
pub fn fixed_factor(term_start: Wad, term_end: Wad) -> Result<Wad, MarginError> {
    if term_end < term_start {
        return Err(MarginError::InvalidTimeRange {
            term_start,
            term_end,
        });
    }
    let time_in_years = accrual_factor(term_end.sub(term_start)?)?;
    time_in_years.mul(FIXED_RATE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
