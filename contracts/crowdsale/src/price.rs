use soroban_sdk::Env;

use crate::errors::Error;
use crate::interfaces::PriceOracleClient;
use crate::types::SaleConfig;

/// Canonical fixed-point scale: all prices are normalized to 18 decimals.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

const SCALE_DECIMALS: u32 = 18;

/// Convert a contributed monetary value into asset units at the oracle's
/// current price.
///
/// The oracle price is normalized to 18 decimals, then applied together with
/// the configured rate through two sequential fixed-point divisions to keep
/// intermediate magnitudes bounded:
///
/// `tokens = ((value * normalized_price) / SCALE) * rate / SCALE`
///
/// Oracles reporting more than 18 decimals have no defined normalization and
/// are rejected rather than truncated.
pub fn estimate(env: &Env, config: &SaleConfig, value: i128) -> Result<i128, Error> {
    if value <= 0 {
        return Err(Error::ZeroValue);
    }

    let oracle = PriceOracleClient::new(env, &config.oracle);
    let data = oracle.latest_price();
    if data.price <= 0 {
        return Err(Error::PriceUnavailable);
    }

    let decimals = oracle.decimals();
    if decimals > SCALE_DECIMALS {
        return Err(Error::PriceUnavailable);
    }
    let normalized = data
        .price
        .checked_mul(10i128.pow(SCALE_DECIMALS - decimals))
        .ok_or(Error::Overflow)?;

    let valued = value.checked_mul(normalized).ok_or(Error::Overflow)? / SCALE;
    let tokens = valued.checked_mul(config.rate).ok_or(Error::Overflow)? / SCALE;
    Ok(tokens)
}
