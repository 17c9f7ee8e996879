//! Integration tests for the full checkout/checkin lifecycle.

use crate::helpers;

use lendhub::{ErrorKind, Holder, ResourceKind};

#[test]
fn test_late_return_pays_two_days_fine() {
    let mut engine = helpers::library_engine();
    let member = Holder::new("Bob");

    let loan = engine
        .check_out(&member, &ResourceKind::from("book"), helpers::day(1))
        .unwrap();
    assert_eq!(loan.due_at, Some(helpers::day(15)));

    // Returned on day 17: two whole days past the due date.
    let charge = engine
        .check_in(member.id, loan.resource_id, helpers::day(17))
        .unwrap();
    assert_eq!(charge, 2 * 500);
}

#[test]
fn test_on_time_return_is_free() {
    let mut engine = helpers::library_engine();
    let member = Holder::new("Bob");

    let loan = engine
        .check_out(&member, &ResourceKind::from("book"), helpers::day(1))
        .unwrap();

    let charge = engine
        .check_in(member.id, loan.resource_id, helpers::day(15))
        .unwrap();
    assert_eq!(charge, 0);
}

#[test]
fn test_five_loan_ceiling_then_freed_slot() {
    let mut engine = helpers::library_engine();
    let member = Holder::new("Bob");
    let book = ResourceKind::from("book");

    let loans: Vec<_> = (0..5)
        .map(|_| engine.check_out(&member, &book, helpers::day(1)).unwrap())
        .collect();
    assert_eq!(engine.open_loan_count_for(member.id), 5);

    let err = engine.check_out(&member, &book, helpers::day(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::LimitExceeded);

    engine
        .check_in(member.id, loans[0].resource_id, helpers::day(2))
        .unwrap();
    engine.check_out(&member, &book, helpers::day(2)).unwrap();
    assert_eq!(engine.open_loan_count_for(member.id), 5);
}

#[test]
fn test_privileged_holder_has_no_ceiling() {
    let mut engine = helpers::library_engine();
    let librarian = Holder::privileged("Alice");
    let book = ResourceKind::from("book");

    for _ in 0..6 {
        engine.check_out(&librarian, &book, helpers::day(1)).unwrap();
    }
    assert_eq!(engine.open_loan_count_for(librarian.id), 6);
}

#[test]
fn test_exclusivity_across_holders() {
    let mut engine = helpers::parking_engine();
    let bike = ResourceKind::from("truck");

    // The single truck spot goes to the first arrival only.
    let first = Holder::new("TRK001");
    let second = Holder::new("TRK002");

    engine.check_out(&first, &bike, helpers::day(1)).unwrap();
    let err = engine.check_out(&second, &bike, helpers::day(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoResourceAvailable);
}

#[test]
fn test_terminal_close_via_engine() {
    let mut engine = helpers::library_engine();
    let member = Holder::new("Bob");

    let loan = engine
        .check_out(&member, &ResourceKind::from("book"), helpers::day(1))
        .unwrap();
    engine
        .check_in(member.id, loan.resource_id, helpers::day(2))
        .unwrap();

    // The loan is settled and the resource is free again: a second
    // checkin must fail no matter how often it is retried.
    for _ in 0..3 {
        let err = engine
            .check_in(member.id, loan.resource_id, helpers::day(3))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyClosed);
    }
}

#[test]
fn test_history_spans_open_and_closed_loans() {
    let mut engine = helpers::library_engine();
    let member = Holder::new("Bob");
    let book = ResourceKind::from("book");

    let first = engine.check_out(&member, &book, helpers::day(1)).unwrap();
    engine
        .check_in(member.id, first.resource_id, helpers::day(3))
        .unwrap();
    engine.check_out(&member, &book, helpers::day(5)).unwrap();

    let history = engine.history_for(member.id);
    assert_eq!(history.len(), 2);
    assert!(!history[0].is_open());
    assert!(history[1].is_open());

    // Queries are idempotent.
    assert_eq!(engine.history_for(member.id).len(), 2);
    assert_eq!(engine.open_loan_count_for(member.id), 1);
}

#[test]
fn test_overdue_report() {
    let mut engine = helpers::library_engine();
    let member = Holder::new("Bob");
    let book = ResourceKind::from("book");

    engine.check_out(&member, &book, helpers::day(1)).unwrap();
    engine.check_out(&member, &book, helpers::day(10)).unwrap();

    // Day 16: the day-1 loan (due day 15) is overdue, the day-10 one not.
    let overdue = engine.overdue_loans(helpers::day(16));
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].opened_at, helpers::day(1));
}
