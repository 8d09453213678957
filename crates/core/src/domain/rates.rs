// Gross daily rate table (constant, read-only)

use rust_decimal::Decimal;

use super::error::{DomainError, Result};
use super::Contract;

/// Fixed daily pay rate per contract kind.
///
/// The null contract has no entry: nothing is ever paid against it.
pub struct GrossDailyRates;

impl GrossDailyRates {
    /// Daily rate for permanent employees (3000)
    pub const PERMANENT: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);

    /// Look up the daily rate for a contract kind
    ///
    /// # Errors
    /// `DomainError::RateNotFound` when the table has no entry for `contract`.
    pub fn rate(contract: Contract) -> Result<Decimal> {
        match contract {
            Contract::Permanent => Ok(Self::PERMANENT),
            Contract::Null => Err(DomainError::RateNotFound(contract)),
        }
    }
}
