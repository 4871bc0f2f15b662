//! # Share Math
//!
//! Fixed-point helpers for converting between assets and shares.
//!
//! Conversions use a virtual offset of one share and one asset:
//!
//! ```text
//! shares = assets * (totalShares + 1) / (totalAssets + 1)
//! assets = shares * (totalAssets + 1) / (totalShares + 1)
//! ```
//!
//! For an unslashed pool this is exactly the plain `totalAssets / totalShares`
//! price (1:1 on the first deposit). It also stays defined when slashing has
//! driven `totalAssets` to zero while shares are still outstanding.

use crate::entities::{U256, U512};
use crate::errors::MathError;

/// Rounding direction for a division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
}

/// `x * y / denominator` with a 512-bit intermediate.
pub fn mul_div(x: U256, y: U256, denominator: U256, rounding: Rounding) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (mut quotient, remainder) = x.full_mul(y).div_mod(U512::from(denominator));
    if rounding == Rounding::Ceil && !remainder.is_zero() {
        quotient += U512::one();
    }
    U256::try_from(quotient).map_err(|_| MathError::Overflow)
}

pub fn checked_add(a: U256, b: U256) -> Result<U256, MathError> {
    a.checked_add(b).ok_or(MathError::Overflow)
}

pub fn checked_sub(a: U256, b: U256) -> Result<U256, MathError> {
    a.checked_sub(b).ok_or(MathError::Underflow)
}

/// Assets to shares against a pool of `total_assets` backing `total_shares`.
pub fn convert_to_shares(
    assets: U256,
    total_shares: U256,
    total_assets: U256,
    rounding: Rounding,
) -> Result<U256, MathError> {
    mul_div(
        assets,
        checked_add(total_shares, U256::one())?,
        checked_add(total_assets, U256::one())?,
        rounding,
    )
}

/// Shares to assets against a pool of `total_assets` backing `total_shares`.
pub fn convert_to_assets(
    shares: U256,
    total_assets: U256,
    total_shares: U256,
    rounding: Rounding,
) -> Result<U256, MathError> {
    mul_div(
        shares,
        checked_add(total_assets, U256::one())?,
        checked_add(total_shares, U256::one())?,
        rounding,
    )
}

/// Shares minted for a deposit of `assets` (rounds down).
pub fn preview_deposit(assets: U256, total_shares: U256, total_assets: U256) -> Result<U256, MathError> {
    convert_to_shares(assets, total_shares, total_assets, Rounding::Floor)
}

/// Shares burned to withdraw exactly `assets` (rounds up).
pub fn preview_withdraw(assets: U256, total_shares: U256, total_assets: U256) -> Result<U256, MathError> {
    convert_to_shares(assets, total_shares, total_assets, Rounding::Ceil)
}

/// Assets paid out for burning `shares` (rounds down).
pub fn preview_redeem(shares: U256, total_assets: U256, total_shares: U256) -> Result<U256, MathError> {
    convert_to_assets(shares, total_assets, total_shares, Rounding::Floor)
}
