//! Scripted demo scenarios: a library and a parking lot running on the
//! same engine with different terms and rate tables.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use clap::{Args, ValueEnum};
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use lendhub_core::error::LendError;
use lendhub_core::types::LoanLimit;
use lendhub_engine::{ChargeModel, LendingEngine, LoanLedger, LoanTerms, RatePolicy, ResourcePool};
use lendhub_entity::holder::Holder;
use lendhub_entity::loan::Loan;
use lendhub_entity::resource::ResourceKind;

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Which scenario to run
    #[arg(value_enum)]
    pub scenario: DemoScenario,
}

/// Available demo scenarios
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DemoScenario {
    /// Library: 14-day term, flat overdue fine, 5-loan ceiling
    Library,
    /// Parking lot: open-ended, metered hourly fee
    Parking,
}

/// One row in the loan history table.
#[derive(Debug, serde::Serialize, Tabled)]
struct LoanRow {
    /// Holder display name.
    holder: String,
    /// Resource label.
    resource: String,
    /// Open/closed state.
    state: String,
    /// Charge, if settled.
    charge: String,
}

impl LoanRow {
    fn new(holder: &Holder, label: &str, loan: &Loan) -> Self {
        Self {
            holder: holder.name.clone(),
            resource: label.to_string(),
            state: if loan.is_open() { "open" } else { "closed" }.to_string(),
            charge: loan
                .charge_cents
                .map(output::format_cents)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute the selected demo scenario
pub fn execute(args: &DemoArgs, format: OutputFormat) -> Result<(), LendError> {
    match args.scenario {
        DemoScenario::Library => run_library(format),
        DemoScenario::Parking => run_parking(format),
    }
}

/// A member borrows a book and returns it two days late.
fn run_library(format: OutputFormat) -> Result<(), LendError> {
    let book = ResourceKind::from("book");

    let mut pool = ResourcePool::new();
    pool.add(book.clone(), "C# Basics");
    let ledger = LoanLedger::new(LoanTerms {
        max_open_loans: LoanLimit::Fixed(5),
        term: Some(Duration::days(14)),
    });
    let policy = RatePolicy::new(
        ChargeModel::FlatOverdue,
        HashMap::from([(book.clone(), 500)]),
    );
    let mut engine = LendingEngine::new(pool, ledger, policy);

    let member = Holder::new("Bob");
    let now = Utc::now();

    let loan = engine.check_out(&member, &book, now)?;
    let label = engine
        .resource(loan.resource_id)
        .map(|r| r.label.clone())
        .unwrap_or_default();
    output::print_success(&format!("{} borrowed '{}'", member.name, label));

    // Sixteen days later: two whole days past the due date.
    let charge = engine.check_in(member.id, loan.resource_id, now + Duration::days(16))?;
    output::print_success(&format!("{} returned '{}'", member.name, label));
    if charge > 0 {
        output::print_error(&format!(
            "Book returned late! Fine: {}",
            output::format_cents(charge)
        ));
    }

    let rows: Vec<LoanRow> = engine
        .history_for(member.id)
        .into_iter()
        .map(|l| LoanRow::new(&member, &label, l))
        .collect();
    output::print_list(&rows, format);

    Ok(())
}

/// Three cars compete for two car spots; the loser is turned away.
fn run_parking(format: OutputFormat) -> Result<(), LendError> {
    let car = ResourceKind::from("car");

    let mut pool = ResourcePool::new();
    for (kind, count) in [("motorcycle", 2), ("car", 2), ("truck", 1)] {
        for n in 0..count {
            pool.add(ResourceKind::from(kind), format!("{kind}-{}", n + 1));
        }
    }
    let ledger = LoanLedger::new(LoanTerms::unbounded());
    let policy = RatePolicy::new(
        ChargeModel::Metered,
        HashMap::from([
            (ResourceKind::from("motorcycle"), 200),
            (ResourceKind::from("car"), 500),
            (ResourceKind::from("truck"), 1000),
        ]),
    );
    let mut engine = LendingEngine::new(pool, ledger, policy);

    let now = Utc::now();
    let vehicles = [
        Holder::new("ABC123"),
        Holder::new("ABCABC"),
        Holder::new("BRUCE"),
    ];
    let mut parked = Vec::new();

    for vehicle in &vehicles {
        match engine.check_out(vehicle, &car, now) {
            Ok(loan) => {
                let label = engine
                    .resource(loan.resource_id)
                    .map(|r| r.label.clone())
                    .unwrap_or_default();
                output::print_success(&format!("Vehicle {} parked at {}", vehicle.name, label));
                parked.push((vehicle, loan, label));
            }
            Err(e) => output::print_error(&format!("Vehicle {}: {}", vehicle.name, e)),
        }
    }

    // Everyone leaves after two hours and six minutes: bills as 3 hours.
    let leave_at = now + Duration::minutes(126);
    let mut rows = Vec::new();
    for (vehicle, loan, label) in &parked {
        let charge = engine.check_in(vehicle.id, loan.resource_id, leave_at)?;
        output::print_success(&format!(
            "Vehicle {} left, fee {}",
            vehicle.name,
            output::format_cents(charge)
        ));
        if let Some(settled) = engine.history_for(vehicle.id).into_iter().next() {
            rows.push(LoanRow::new(vehicle, label, settled));
        }
    }
    output::print_list(&rows, format);

    Ok(())
}
