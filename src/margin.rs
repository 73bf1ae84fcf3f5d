/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Margin requirement calculation for leveraged swap positions.
//!
//! [`MarginCalculator`] composes the fixed-rate accrual factor, the
//! worst-case variable factor and the parameter-driven minimum floor into a
//! single collateral requirement.  The modeled margin and the floor are
//! computed independently and compared as whole-position totals; the greater
//! of the two is the requirement.  Association order inside the floor
//! follows the reference contracts exactly — it affects the last wad digit
//! and is part of the parity contract.

use crate::error::MarginError;
use crate::params::{MarginTier, RiskParameters};
use crate::stress::{worst_case_variable_factor, TakerSide};
use crate::time::{accrual_factor, fixed_factor};
use crate::wad::Wad;

// ---------------------------------------------------------------------------
// MarginCalculator
// ---------------------------------------------------------------------------

/// Computes margin requirements against one immutable parameter snapshot.
///
/// Pure: every result depends only on the call arguments and the snapshot
/// captured at construction.  Any number of calculators may run in parallel.
pub struct MarginCalculator {
    params: RiskParameters,
}

impl MarginCalculator {
    /// Create a calculator from a parameter snapshot.
    ///
    /// The record is validated up front so a zero-valued divisor or an
    /// inverted delta pair can never reach the computation path.
    pub fn new(params: RiskParameters) -> Result<Self, MarginError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameter snapshot this calculator was built from.
    #[inline(always)]
    pub fn params(&self) -> &RiskParameters {
        &self.params
    }

    /// Minimum margin requirement (the parameter-driven floor), clamped at
    /// zero.
    ///
    /// Exposed standalone for callers that need the floor alone, e.g.
    /// liquidation checks.
    pub fn minimum_margin_requirement(
        &self,
        fixed_token_balance: Wad,
        variable_token_balance: Wad,
        term_start: Wad,
        term_end: Wad,
        tier: MarginTier,
    ) -> Result<Wad, MarginError> {
        let floor = self.minimum_margin_floor(
            fixed_token_balance,
            variable_token_balance,
            term_start,
            term_end,
            tier,
        )?;
        Ok(floor.max(Wad::ZERO))
    }

    /// Total margin requirement for a trader position.
    ///
    /// `max(modeled, floor)` where the modeled margin is
    /// `fixed * fixedFactor + variable * worstCaseVariableFactor` and the
    /// floor is [`Self::minimum_margin_requirement`] before clamping.  The
    /// result is never negative.
    pub fn trader_margin_requirement(
        &self,
        fixed_token_balance: Wad,
        variable_token_balance: Wad,
        term_start: Wad,
        term_end: Wad,
        tier: MarginTier,
    ) -> Result<Wad, MarginError> {
        if term_end < term_start {
            return Err(MarginError::InvalidTimeRange {
                term_start,
                term_end,
            });
        }
        let side = TakerSide::from_variable_balance(variable_token_balance);
        let time_in_seconds = term_end.sub(term_start)?;

        let fixed_leg = fixed_token_balance.mul(fixed_factor(term_start, term_end)?)?;
        let variable_leg = variable_token_balance
            .mul(worst_case_variable_factor(time_in_seconds, side, tier)?)?;
        let modeled = fixed_leg.add(variable_leg)?;

        let floor = self.minimum_margin_floor(
            fixed_token_balance,
            variable_token_balance,
            term_start,
            term_end,
            tier,
        )?;

        Ok(modeled.max(floor).max(Wad::ZERO))
    }

    /// Reference-exact floor, before the zero clamp.
    ///
    /// Fixed takers: `notional * (minDelta * timeInYears)` over the absolute
    /// variable balance.  Variable takers: `(variable * minDelta) *
    /// timeInYears`, capped above by `fixed * (fixedFactor * -1)` — the
    /// worst case of a variable-rate receiver cannot exceed giving up its
    /// entire fixed leg.
    fn minimum_margin_floor(
        &self,
        fixed_token_balance: Wad,
        variable_token_balance: Wad,
        term_start: Wad,
        term_end: Wad,
        tier: MarginTier,
    ) -> Result<Wad, MarginError> {
        if term_end < term_start {
            return Err(MarginError::InvalidTimeRange {
                term_start,
                term_end,
            });
        }
        let time_in_seconds = term_end.sub(term_start)?;
        let time_in_years = accrual_factor(time_in_seconds)?;
        let min_delta = self.params.min_delta(tier);

        if variable_token_balance.is_negative() {
            let notional = variable_token_balance.neg()?;
            notional.mul(min_delta.mul(time_in_years)?)
        } else {
            let zero_lower_bound =
                fixed_token_balance.mul(fixed_factor(term_start, term_end)?.neg()?)?;
            let floor = variable_token_balance.mul(min_delta)?.mul(time_in_years)?;
            Ok(floor.min(zero_lower_bound))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
