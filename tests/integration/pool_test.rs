//! Integration tests for pool composition and administrative flows.

use crate::helpers;

use lendhub::{ErrorKind, Holder, ResourceKind};

#[test]
fn test_first_fit_follows_composition_order() {
    let mut engine = helpers::parking_engine();
    let driver = Holder::new("ABC123");

    // The first car checkout always gets the first car spot from the
    // composition, repeatably.
    let loan = engine
        .check_out(&driver, &ResourceKind::from("car"), helpers::day(1))
        .unwrap();
    let label = engine.resource(loan.resource_id).unwrap().label.clone();
    assert_eq!(label, "car-1");

    engine
        .check_in(driver.id, loan.resource_id, helpers::day(1))
        .unwrap();
    let again = engine
        .check_out(&driver, &ResourceKind::from("car"), helpers::day(2))
        .unwrap();
    assert_eq!(again.resource_id, loan.resource_id);
}

#[test]
fn test_round_trip_restores_pool_state() {
    let mut engine = helpers::parking_engine();
    let driver = Holder::new("ABC123");
    let before = engine.pool_status();

    let loan = engine
        .check_out(&driver, &ResourceKind::from("car"), helpers::day(1))
        .unwrap();
    engine
        .check_in(driver.id, loan.resource_id, helpers::day(1))
        .unwrap();

    let after = engine.pool_status();
    assert_eq!(before.occupied, after.occupied);
    assert_eq!(before.available, after.available);
    assert_eq!(before.total, after.total);
}

#[test]
fn test_admin_add_and_remove() {
    let mut engine = helpers::library_engine();
    let librarian = Holder::privileged("Alice");

    let id = engine.add_resource(ResourceKind::from("book"), "Dune");
    assert_eq!(engine.pool_status().total, 7);

    // Check out every copy so the added one is occupied too.
    for _ in 0..7 {
        engine
            .check_out(&librarian, &ResourceKind::from("book"), helpers::day(1))
            .unwrap();
    }
    let err = engine.remove_resource(id).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ResourceBusy);

    engine.check_in(librarian.id, id, helpers::day(2)).unwrap();
    let removed = engine.remove_resource(id).unwrap();
    assert_eq!(removed.label, "Dune");
    assert_eq!(engine.pool_status().total, 6);
}

#[test]
fn test_remove_unknown_resource() {
    let mut engine = helpers::library_engine();
    let err = engine
        .remove_resource(lendhub::ResourceId::new())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_pool_exhaustion_and_recovery() {
    let mut engine = helpers::parking_engine();
    let car = ResourceKind::from("car");

    let first = Holder::new("AAA");
    let second = Holder::new("BBB");
    let third = Holder::new("CCC");

    let loan_a = engine.check_out(&first, &car, helpers::day(1)).unwrap();
    engine.check_out(&second, &car, helpers::day(1)).unwrap();

    let err = engine.check_out(&third, &car, helpers::day(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NoResourceAvailable);

    // One car leaves; the queued-up third driver fits now.
    engine
        .check_in(first.id, loan_a.resource_id, helpers::day(1))
        .unwrap();
    engine.check_out(&third, &car, helpers::day(1)).unwrap();
}
