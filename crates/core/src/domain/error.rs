// Domain Error Types

use thiserror::Error;

use super::Contract;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No gross daily rate for contract: {0}")]
    RateNotFound(Contract),
}

pub type Result<T> = std::result::Result<T, DomainError>;
