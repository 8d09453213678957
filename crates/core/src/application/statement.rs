// Pay Statement (read model)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Contract, Employee};
use crate::error::Result;

/// Snapshot of one employee's pay at the moment it was taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayStatement {
    pub name: String,
    pub contract: Contract,
    pub gross_to_date: Decimal,
}

impl PayStatement {
    pub fn of(employee: &dyn Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            contract: employee.contract(),
            gross_to_date: employee.gross_to_date().normalize(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for PayStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] gross to date: {}",
            self.name, self.contract, self.gross_to_date
        )
    }
}
