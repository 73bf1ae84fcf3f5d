/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! # ALICE-IRS-Margin
//!
//! Margin requirement engine for leveraged fixed/variable interest-rate-swap
//! positions in the ALICE financial system.
//!
//! Given a position's fixed and variable token balances, its term window and
//! a market's configured risk parameters, the engine computes the minimum
//! collateral that keeps the position safely collateralized under two risk
//! tiers: liquidation margin (LM) and the stricter initial margin (IM).
//! All arithmetic is 18-decimal fixed point ([`Wad`]) reproducing the
//! reference contract system bit for bit.
//!
//! Subsystems, leaf first:
//!
//! - [`wad`]    — checked signed 18-decimal fixed-point arithmetic
//! - [`time`]   — year-fraction accrual and the fixed-rate yield factor
//! - [`params`] — per-market [`RiskParameters`] and their validation
//! - [`stress`] — worst-case accrued variable-rate factor model
//! - [`margin`] — [`MarginCalculator`]: floor model and requirement engine
//! - [`engine`] — [`MarginEngine`]: keyed parameter store and host interface
//! - [`error`]  — the [`MarginError`] failure taxonomy
//!
//! ## Example
//!
//! ```rust
//! use alice_irs_margin::{MarginEngine, MarginTier, MarketId, RiskParameters, Wad};
//!
//! let market = MarketId::from_label("AaveV2");
//! let mut engine = MarginEngine::new();
//! engine
//!     .set_risk_parameters(market, RiskParameters::default())
//!     .expect("default calibration is valid");
//!
//! // A fixed taker: short 2000 variable tokens against 1000 fixed tokens,
//! // ten million seconds to maturity.
//! let requirement = engine
//!     .trader_margin_requirement(
//!         market,
//!         Wad::from_int(1000),
//!         Wad::from_int(-2000),
//!         Wad::from_int(1_636_996_083),
//!         Wad::from_int(1_646_996_083),
//!         MarginTier::Initial,
//!     )
//!     .unwrap();
//!
//! assert!(requirement > Wad::ZERO);
//! ```

pub mod engine;
pub mod error;
pub mod margin;
pub mod params;
pub mod stress;
pub mod time;
pub mod wad;

pub use engine::MarginEngine;
pub use error::MarginError;
pub use margin::MarginCalculator;
pub use params::{MarginTier, MarketId, RiskParameters};
pub use stress::{worst_case_variable_factor, TakerSide};
pub use time::{accrual_factor, fixed_factor, FIXED_RATE, SECONDS_IN_YEAR};
pub use wad::Wad;

/// ALICE-IRS-Margin crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
