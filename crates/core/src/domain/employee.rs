// Employee Domain Model
//
// One capability (`Employee`), one variant per contract kind. Call sites hold
// `&dyn Employee` and never an `Option`: the absence of an employee is itself
// an employee (`NullEmployee`).

use std::fmt;
use std::sync::Arc;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::trace;

use super::{Contract, GrossDailyRates};
use crate::port::time_provider::SystemTimeProvider;
use crate::port::TimeProvider;

/// Name carried by every null employee
pub const NULL_EMPLOYEE_NAME: &str = "Null Employee";

/// Length of the pay period in days
pub const PERIOD_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// State shared by every employee variant.
///
/// The contract is fixed at construction. There is no setter, and the field
/// is private:
///
/// ```compile_fail
/// use special_case_core::domain::{Contract, EmployeeRecord};
///
/// let mut record = EmployeeRecord::new("John Doe", Contract::Permanent);
/// record.contract = Contract::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    name: String,
    contract: Contract,
}

impl EmployeeRecord {
    pub fn new(name: impl Into<String>, contract: Contract) -> Self {
        Self {
            name: name.into(),
            contract,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }
}

/// Employee capability
///
/// Variants expose their record read-only and supply their own renaming and
/// `gross_to_date`; there is no default computation. A record is never handed
/// out mutably, so neither replacing nor swapping it compiles:
///
/// ```compile_fail
/// use special_case_core::domain::{Contract, Employee, EmployeeRecord, PermanentEmployee};
///
/// let mut employee = PermanentEmployee::new("John Doe");
/// *employee.record_mut() = EmployeeRecord::new("John Doe", Contract::Null);
/// ```
///
/// ```compile_fail
/// use special_case_core::domain::{Employee, NullEmployee, PermanentEmployee};
///
/// let mut permanent = PermanentEmployee::new("A");
/// let mut null = NullEmployee::new();
/// std::mem::swap(permanent.record_mut(), null.record_mut());
/// ```
///
/// ```compile_fail
/// use special_case_core::domain::{Contract, Employee, EmployeeRecord, PermanentEmployee};
///
/// let employee = PermanentEmployee::new("John Doe");
/// *employee.record() = EmployeeRecord::new("John Doe", Contract::Null);
/// ```
pub trait Employee: fmt::Debug + Send + Sync {
    fn record(&self) -> &EmployeeRecord;

    /// Rename in place; the contract is untouched
    fn set_name(&mut self, name: String);

    /// Gross pay accrued in the current period, recomputed on every call
    fn gross_to_date(&self) -> Decimal;

    fn name(&self) -> &str {
        self.record().name()
    }

    fn contract(&self) -> Contract {
        self.record().contract()
    }
}

/// Salaried employee on a permanent contract
pub struct PermanentEmployee {
    record: EmployeeRecord,
    clock: Arc<dyn TimeProvider>,
}

impl PermanentEmployee {
    /// Permanent employee reading the local system date
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, Arc::new(SystemTimeProvider))
    }

    /// Permanent employee reading "today" from `clock`
    pub fn with_clock(name: impl Into<String>, clock: Arc<dyn TimeProvider>) -> Self {
        Self {
            record: EmployeeRecord::new(name, Contract::Permanent),
            clock,
        }
    }
}

impl Employee for PermanentEmployee {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn set_name(&mut self, name: String) {
        self.record.set_name(name);
    }

    /// `rate(PERMANENT) * 30 / day_of_month`
    ///
    /// The clock yields a calendar date, so the day is always in 1..=31 and
    /// the divisor is never zero. On the 1st this is the full `rate * 30`.
    fn gross_to_date(&self) -> Decimal {
        let day = self.clock.today().day();
        let gross = GrossDailyRates::PERMANENT * PERIOD_DAYS / Decimal::from(day);

        trace!(
            employee = %self.record.name(),
            day,
            gross = %gross,
            "Computed gross to date"
        );

        gross
    }
}

impl fmt::Debug for PermanentEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermanentEmployee")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

/// Stand-in for a missing employee: named, contracted, and never paid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullEmployee {
    record: EmployeeRecord,
}

impl NullEmployee {
    pub fn new() -> Self {
        Self {
            record: EmployeeRecord::new(NULL_EMPLOYEE_NAME, Contract::Null),
        }
    }
}

impl Default for NullEmployee {
    fn default() -> Self {
        Self::new()
    }
}

impl Employee for NullEmployee {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn set_name(&mut self, name: String) {
        self.record.set_name(name);
    }

    fn gross_to_date(&self) -> Decimal {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::time_provider::FixedTimeProvider;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts every read so tests can tell whether a value was cached
    struct CountingTimeProvider {
        date: NaiveDate,
        reads: AtomicUsize,
    }

    impl TimeProvider for CountingTimeProvider {
        fn today(&self) -> NaiveDate {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.date
        }
    }

    fn on(year: i32, month: u32, day: u32) -> Arc<dyn TimeProvider> {
        Arc::new(FixedTimeProvider::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        ))
    }

    #[test]
    fn test_permanent_employee_identity() {
        let employee = PermanentEmployee::new("John Doe");

        assert_eq!(employee.name(), "John Doe");
        assert_eq!(employee.contract(), Contract::Permanent);
    }

    #[test]
    fn test_gross_on_the_fifteenth() {
        let employee = PermanentEmployee::with_clock("Jane", on(2024, 3, 15));

        // 3000 * 30 / 15
        assert_eq!(employee.gross_to_date(), Decimal::from(6000));
    }

    #[test]
    fn test_gross_on_the_first_is_full_period() {
        let employee = PermanentEmployee::with_clock("Jane", on(2024, 3, 1));

        assert_eq!(employee.gross_to_date(), Decimal::from(90_000));
    }

    #[test]
    fn test_gross_on_every_day_of_a_long_month() {
        for day in 1..=31 {
            let employee = PermanentEmployee::with_clock("Jane", on(2024, 1, day));
            let expected = GrossDailyRates::PERMANENT * PERIOD_DAYS / Decimal::from(day);

            assert_eq!(employee.gross_to_date(), expected, "day {}", day);
            assert!(employee.gross_to_date() > Decimal::ZERO);
        }
    }

    #[test]
    fn test_gross_is_recomputed_on_every_read() {
        let clock = Arc::new(CountingTimeProvider {
            date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
            reads: AtomicUsize::new(0),
        });
        let employee = PermanentEmployee::with_clock("Jane", clock.clone());

        let first = employee.gross_to_date();
        let second = employee.gross_to_date();

        assert_eq!(first, second);
        assert_eq!(clock.reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_rename_keeps_contract() {
        let mut employee = PermanentEmployee::new("John Doe");
        employee.set_name("John Smith".to_string());

        assert_eq!(employee.name(), "John Smith");
        assert_eq!(employee.contract(), Contract::Permanent);
    }

    #[test]
    fn test_renaming_never_changes_any_contract() {
        let mut employees: Vec<Box<dyn Employee>> = vec![
            Box::new(PermanentEmployee::with_clock("A", on(2024, 3, 15))),
            Box::new(NullEmployee::new()),
        ];

        for employee in employees.iter_mut() {
            employee.set_name("B".to_string());
        }

        assert_eq!(employees[0].name(), "B");
        assert_eq!(employees[0].contract(), Contract::Permanent);
        assert_eq!(employees[0].gross_to_date(), Decimal::from(6000));
        assert_eq!(employees[1].name(), "B");
        assert_eq!(employees[1].contract(), Contract::Null);
        assert_eq!(employees[1].gross_to_date(), Decimal::ZERO);
    }

    #[test]
    fn test_null_employee_identity() {
        let employee = NullEmployee::new();

        assert_eq!(employee.name(), NULL_EMPLOYEE_NAME);
        assert_eq!(employee.name(), "Null Employee");
        assert_eq!(employee.contract(), Contract::Null);
        assert_eq!(employee, NullEmployee::default());
    }

    #[test]
    fn test_null_employee_gross_is_exactly_zero() {
        let employee = NullEmployee::new();

        assert_eq!(employee.gross_to_date(), Decimal::ZERO);
        assert!(employee.gross_to_date().is_zero());
    }

    #[test]
    fn test_variants_behind_trait_object() {
        let employees: Vec<Box<dyn Employee>> = vec![
            Box::new(PermanentEmployee::with_clock("Jane", on(2024, 3, 15))),
            Box::new(NullEmployee::new()),
        ];

        let total: Decimal = employees.iter().map(|e| e.gross_to_date()).sum();
        assert_eq!(total, Decimal::from(6000));
    }

    #[test]
    fn test_debug_omits_clock() {
        let employee = PermanentEmployee::new("John Doe");
        let debug = format!("{:?}", employee);

        assert!(debug.contains("John Doe"));
        assert!(debug.contains(".."));
    }
}
