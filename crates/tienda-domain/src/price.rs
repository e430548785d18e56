//! Price filter bounds for catalog search.

use std::str::FromStr;

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("price is not a decimal number")]
    Malformed,
    #[error("price must not be negative")]
    Negative,
}

/// Parse an optional price bound from a raw query value.
///
/// Absent or blank input means "no bound". Anything else must be a
/// non-negative decimal.
pub fn parse_price_bound(raw: Option<&str>) -> Result<Option<Decimal>, PriceError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let price = Decimal::from_str(raw).map_err(|_| PriceError::Malformed)?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(PriceError::Negative);
    }
    Ok(Some(price))
}

/// Inclusive price interval; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}
