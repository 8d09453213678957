// Special Case Core - Payroll Domain, Ports & Use Cases
// NO infrastructure dependencies (hexagonal core)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
