/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Per-market risk parameter configuration.
//!
//! A [`RiskParameters`] record holds every risk coefficient used by the
//! margin models for one market, keyed by an opaque [`MarketId`].  Records
//! are validated as a whole before use and replaced wholesale on update;
//! there is no field-by-field mutation path, which is what makes the
//! reader-sees-a-consistent-snapshot invariant enforceable.

use crate::error::MarginError;
use crate::wad::Wad;

// ---------------------------------------------------------------------------
// MarketId
// ---------------------------------------------------------------------------

/// Opaque 32-byte market identifier.
///
/// Mirrors the reference system's `bytes32` rate-oracle key.  Short
/// human-readable labels are zero-padded on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarketId(pub [u8; 32]);

impl MarketId {
    /// Build a key from a short label, zero-padded to 32 bytes.
    ///
    /// Labels longer than 32 bytes are truncated.
    pub fn from_label(label: &str) -> MarketId {
        let mut bytes = [0u8; 32];
        let src = label.as_bytes();
        let n = src.len().min(32);
        bytes[..n].copy_from_slice(&src[..n]);
        MarketId(bytes)
    }
}

impl core::fmt::Display for MarketId {
    /// Print the label when the key is NUL-padded UTF-8, hex otherwise.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(32);
        match core::str::from_utf8(&self.0[..end]) {
            Ok(label) if !label.is_empty() && self.0[end..].iter().all(|&b| b == 0) => {
                f.write_str(label)
            }
            _ => {
                for byte in &self.0 {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// MarginTier
// ---------------------------------------------------------------------------

/// Risk tier a margin requirement is computed for.
///
/// Initial margin is the stricter of the two: it must always be at least the
/// liquidation margin for the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginTier {
    /// Liquidation margin (LM) — the tighter, lower threshold below which a
    /// position becomes liquidatable.
    Liquidation,
    /// Initial margin (IM) — the looser, higher threshold required to open
    /// or extend a position.
    Initial,
}

// ---------------------------------------------------------------------------
// RiskParameters
// ---------------------------------------------------------------------------

/// Risk coefficients for one market.
///
/// All fields are wad-scaled.  `sigma_squared`, `alpha`, `beta`, `xi_upper`
/// and `xi_lower` feed a volatility/APY-band bound that is configured and
/// carried but not consumed by the stress model in this crate; they are
/// validated here so a later consumer never sees a nonsense record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskParameters {
    /// Upper multiplier applied to historical APY when building the rate band.
    pub apy_upper_multiplier: Wad,
    /// Lower multiplier applied to historical APY when building the rate band.
    pub apy_lower_multiplier: Wad,
    /// Floor-model minimum rate delta for the liquidation margin tier.
    pub min_delta_lm: Wad,
    /// Floor-model minimum rate delta for the initial margin tier.
    pub min_delta_im: Wad,
    /// Position leverage ceiling.
    pub max_leverage: Wad,
    /// Variance input for the volatility-based bound (carried, not consumed).
    pub sigma_squared: Wad,
    /// Shape parameter of the dynamic bound model (carried, not consumed).
    pub alpha: Wad,
    /// Shape parameter of the dynamic bound model (carried, not consumed).
    pub beta: Wad,
    /// Upper xi bound of the dynamic bound model (carried, not consumed).
    pub xi_upper: Wad,
    /// Lower xi bound of the dynamic bound model (carried, not consumed).
    pub xi_lower: Wad,
    /// Historical-APY observation horizon in wad-scaled seconds.
    pub lookback_window_seconds: Wad,
}

impl Default for RiskParameters {
    /// Reference calibration values.
    fn default() -> Self {
        Self {
            apy_upper_multiplier: Wad::from_raw(1_500_000_000_000_000_000), // 1.5
            apy_lower_multiplier: Wad::from_raw(700_000_000_000_000_000),   // 0.7
            min_delta_lm: Wad::from_raw(30_000_000_000_000_000),            // 0.03
            min_delta_im: Wad::from_raw(60_000_000_000_000_000),            // 0.06
            max_leverage: Wad::from_int(10),
            sigma_squared: Wad::from_raw(10_000_000_000_000_000), // 0.01
            alpha: Wad::from_raw(40_000_000_000_000_000),         // 0.04
            beta: Wad::ONE,
            xi_upper: Wad::from_int(2),
            xi_lower: Wad::from_raw(1_500_000_000_000_000_000), // 1.5
            lookback_window_seconds: Wad::from_int(1_209_600),  // 14 days
        }
    }
}

impl RiskParameters {
    /// Check every ordering and positivity invariant.
    ///
    /// Called before a record is stored and before a calculator is built, so
    /// a zero-valued divisor or inverted delta pair can never reach the
    /// computation path.
    pub fn validate(&self) -> Result<(), MarginError> {
        if self.apy_upper_multiplier <= Wad::ZERO {
            return Err(MarginError::InvalidParameters {
                reason: "apy_upper_multiplier must be > 0",
            });
        }
        if self.apy_lower_multiplier <= Wad::ZERO {
            return Err(MarginError::InvalidParameters {
                reason: "apy_lower_multiplier must be > 0",
            });
        }
        if self.min_delta_lm.is_negative() {
            return Err(MarginError::InvalidParameters {
                reason: "min_delta_lm must be >= 0",
            });
        }
        if self.min_delta_im < self.min_delta_lm {
            return Err(MarginError::InvalidParameters {
                reason: "min_delta_im must be >= min_delta_lm",
            });
        }
        if self.max_leverage <= Wad::ZERO {
            return Err(MarginError::InvalidParameters {
                reason: "max_leverage must be > 0",
            });
        }
        if self.sigma_squared.is_negative() {
            return Err(MarginError::InvalidParameters {
                reason: "sigma_squared must be >= 0",
            });
        }
        if self.lookback_window_seconds <= Wad::ZERO {
            return Err(MarginError::InvalidParameters {
                reason: "lookback_window_seconds must be > 0",
            });
        }
        Ok(())
    }

    /// Select the floor-model minimum rate delta for a tier.
    #[inline(always)]
    pub fn min_delta(&self, tier: MarginTier) -> Wad {
        match tier {
            MarginTier::Liquidation => self.min_delta_lm,
            MarginTier::Initial => self.min_delta_im,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
