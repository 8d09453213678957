// Domain Layer - Pure business logic and entities

pub mod contract;
pub mod employee;
pub mod error;
pub mod rates;

// Re-exports
pub use contract::Contract;
pub use employee::{
    Employee, EmployeeRecord, NullEmployee, PermanentEmployee, NULL_EMPLOYEE_NAME, PERIOD_DAYS,
};
pub use error::DomainError;
pub use rates::GrossDailyRates;
