// Application Layer - Use Cases

pub mod roster;
pub mod statement;

// Re-exports
pub use roster::EmployeeRoster;
pub use statement::PayStatement;
