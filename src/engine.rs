/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Per-market parameter store and the host-facing engine interface.
//!
//! [`MarginEngine`] owns the keyed risk-parameter table and exposes the four
//! operations the host system calls: configure a market, read a market's
//! record back, and compute the trader or minimum margin requirement against
//! the market's current snapshot.  Records are validated before insertion
//! and replaced wholesale, so a reader can never observe a half-updated or
//! half-valid record.  The engine itself performs no locking; it is a plain
//! `Send + Sync` value the host wraps in its own single-writer protocol.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::MarginError;
use crate::margin::MarginCalculator;
use crate::params::{MarginTier, MarketId, RiskParameters};
use crate::wad::Wad;

// ---------------------------------------------------------------------------
// MarginEngine
// ---------------------------------------------------------------------------

/// Margin requirement engine over a per-market parameter store.
#[derive(Debug, Default)]
pub struct MarginEngine {
    markets: HashMap<MarketId, RiskParameters>,
}

impl MarginEngine {
    /// Create an engine with no markets configured.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure or replace the full risk parameter record for a market.
    ///
    /// The record is validated first; on rejection the store is left
    /// untouched, so a previously configured record stays in force.
    pub fn set_risk_parameters(
        &mut self,
        market: MarketId,
        params: RiskParameters,
    ) -> Result<(), MarginError> {
        if let Err(err) = params.validate() {
            warn!(%market, %err, "rejected risk parameter update");
            return Err(err);
        }
        let replaced = self.markets.insert(market, params).is_some();
        info!(%market, replaced, "risk parameters configured");
        Ok(())
    }

    /// Read a market's current parameter record.
    pub fn risk_parameters(&self, market: MarketId) -> Result<&RiskParameters, MarginError> {
        self.markets
            .get(&market)
            .ok_or(MarginError::UnknownMarket { market })
    }

    /// Total margin requirement for a trader position in `market`.
    pub fn trader_margin_requirement(
        &self,
        market: MarketId,
        fixed_token_balance: Wad,
        variable_token_balance: Wad,
        term_start: Wad,
        term_end: Wad,
        tier: MarginTier,
    ) -> Result<Wad, MarginError> {
        let requirement = self.calculator(market)?.trader_margin_requirement(
            fixed_token_balance,
            variable_token_balance,
            term_start,
            term_end,
            tier,
        )?;
        debug!(%market, ?tier, %requirement, "trader margin requirement");
        Ok(requirement)
    }

    /// Minimum (floor) margin requirement for a position in `market`.
    ///
    /// Exposed standalone for liquidation checks that need the floor alone.
    pub fn minimum_margin_requirement(
        &self,
        market: MarketId,
        fixed_token_balance: Wad,
        variable_token_balance: Wad,
        term_start: Wad,
        term_end: Wad,
        tier: MarginTier,
    ) -> Result<Wad, MarginError> {
        let requirement = self.calculator(market)?.minimum_margin_requirement(
            fixed_token_balance,
            variable_token_balance,
            term_start,
            term_end,
            tier,
        )?;
        debug!(%market, ?tier, %requirement, "minimum margin requirement");
        Ok(requirement)
    }

    /// Build a calculator over the market's current snapshot.
    ///
    /// The snapshot is cloned so the computation sees one consistent record
    /// even if the host replaces the stored one afterwards.
    fn calculator(&self, market: MarketId) -> Result<MarginCalculator, MarginError> {
        MarginCalculator::new(self.risk_parameters(market)?.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
