// Employee Roster - lookup that never comes back empty-handed

use rust_decimal::Decimal;
use tracing::debug;

use super::statement::PayStatement;
use crate::domain::{Employee, NullEmployee};

/// In-memory set of hired employees
///
/// `find` hands out the roster's [`NullEmployee`] on a miss, so callers can
/// read a name, contract and gross pay without checking for presence first.
#[derive(Debug, Default)]
pub struct EmployeeRoster {
    employees: Vec<Box<dyn Employee>>,
    vacant: NullEmployee,
}

impl EmployeeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hire(&mut self, employee: Box<dyn Employee>) {
        debug!(
            name = %employee.name(),
            contract = %employee.contract(),
            "Hired employee"
        );
        self.employees.push(employee);
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// First employee named exactly `name`, or the null employee
    pub fn find(&self, name: &str) -> &dyn Employee {
        match self.employees.iter().find(|e| e.name() == name) {
            Some(employee) => employee.as_ref(),
            None => {
                debug!(name = %name, "Employee not found, using null employee");
                &self.vacant
            }
        }
    }

    /// Statements for every hired employee, in hiring order
    pub fn statements(&self) -> Vec<PayStatement> {
        self.employees
            .iter()
            .map(|e| PayStatement::of(e.as_ref()))
            .collect()
    }

    pub fn total_gross_to_date(&self) -> Decimal {
        self.employees.iter().map(|e| e.gross_to_date()).sum()
    }
}
