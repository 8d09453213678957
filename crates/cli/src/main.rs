//! Special Case Payroll CLI - pay statements for a roster of employees
//!
//! Missing employees are answered by the Null Employee rather than an error.

mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing::info;

use logging::{init_logging, LogFormat};
use special_case_core::application::{EmployeeRoster, PayStatement};
use special_case_core::domain::PermanentEmployee;
use special_case_core::port::{FixedTimeProvider, SystemTimeProvider, TimeProvider};

#[derive(Parser)]
#[command(name = "payroll")]
#[command(about = "Special Case payroll statements", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Permanent employee to hire onto the roster (repeatable)
    #[arg(short, long = "employee", global = true)]
    employees: Vec<String>,

    /// Compute as of this date (YYYY-MM-DD) instead of today
    #[arg(long, env = "PAYROLL_AS_OF", global = true)]
    as_of: Option<String>,

    /// Statement output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    /// Log output format
    #[arg(long, value_enum, env = "PAYROLL_LOG_FORMAT", default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a statement for every employee on the roster
    Statements,

    /// Show the statement for one employee (Null Employee if not on the roster)
    Lookup {
        /// Employee name
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Tabled)]
struct StatementRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Contract")]
    contract: String,
    #[tabled(rename = "Gross to date")]
    gross_to_date: String,
}

impl From<&PayStatement> for StatementRow {
    fn from(statement: &PayStatement) -> Self {
        Self {
            name: statement.name.clone(),
            contract: statement.contract.to_string(),
            gross_to_date: statement.gross_to_date.to_string(),
        }
    }
}

fn clock_from(as_of: Option<&str>) -> Result<Arc<dyn TimeProvider>> {
    match as_of {
        Some(date) => {
            let clock = FixedTimeProvider::parse(date).context("Invalid --as-of")?;
            Ok(Arc::new(clock))
        }
        None => Ok(Arc::new(SystemTimeProvider)),
    }
}

fn build_roster(names: &[String], clock: &Arc<dyn TimeProvider>) -> EmployeeRoster {
    let mut roster = EmployeeRoster::new();
    for name in names {
        roster.hire(Box::new(PermanentEmployee::with_clock(
            name.as_str(),
            Arc::clone(clock),
        )));
    }
    roster
}

fn print_statements(statements: &[PayStatement], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(statements)
                .context("Failed to serialize statements")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let rows: Vec<StatementRow> = statements.iter().map(StatementRow::from).collect();
            println!("{}", Table::new(rows));
        }
    }
    Ok(())
}

/// One statement, rendered the same way for every kind of employee
fn render_statement(statement: &PayStatement, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(statement.to_json()?),
        OutputFormat::Text => Ok(statement.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format)?;

    let clock = clock_from(cli.as_of.as_deref())?;
    info!(
        as_of = %clock.today(),
        employees = cli.employees.len(),
        "Special Case payroll v{} starting...",
        special_case_core::VERSION
    );

    let roster = build_roster(&cli.employees, &clock);

    match cli.command {
        Commands::Statements => {
            let statements = roster.statements();

            if cli.output == OutputFormat::Text {
                println!("{}", "Pay statements".cyan().bold());
            }
            print_statements(&statements, cli.output)?;

            if cli.output == OutputFormat::Text {
                println!(
                    "  {} {}",
                    "Total:".bold(),
                    roster.total_gross_to_date().to_string().green()
                );
            }
        }

        Commands::Lookup { name } => {
            let employee = roster.find(&name);
            let statement = PayStatement::of(employee);

            println!("{}", render_statement(&statement, cli.output)?);
        }
    }

    Ok(())
}
