//! Integration tests for charge computation through the engine.

use chrono::Duration;

use crate::helpers;

use lendhub::{ErrorKind, Holder, ResourceKind};

#[test]
fn test_metered_fee_rounds_started_hours_up() {
    let mut engine = helpers::parking_engine();
    let driver = Holder::new("ABC123");

    let arrive = helpers::day(1);
    let loan = engine
        .check_out(&driver, &ResourceKind::from("car"), arrive)
        .unwrap();

    // 2.1 hours parked bills as 3 started hours at 5.00 EUR each.
    let charge = engine
        .check_in(driver.id, loan.resource_id, arrive + Duration::minutes(126))
        .unwrap();
    assert_eq!(charge, 3 * 500);
}

#[test]
fn test_metered_fee_differs_per_kind() {
    let mut engine = helpers::parking_engine();
    let rider = Holder::new("MOTO1");
    let trucker = Holder::new("TRK01");

    let arrive = helpers::day(1);
    let moto_loan = engine
        .check_out(&rider, &ResourceKind::from("motorcycle"), arrive)
        .unwrap();
    let truck_loan = engine
        .check_out(&trucker, &ResourceKind::from("truck"), arrive)
        .unwrap();

    let leave = arrive + Duration::hours(2);
    let moto_fee = engine
        .check_in(rider.id, moto_loan.resource_id, leave)
        .unwrap();
    let truck_fee = engine
        .check_in(trucker.id, truck_loan.resource_id, leave)
        .unwrap();

    assert_eq!(moto_fee, 2 * 200);
    assert_eq!(truck_fee, 2 * 1000);
}

#[test]
fn test_unrated_kind_fails_checkin_and_keeps_loan_open() {
    let mut engine = helpers::parking_engine();
    let pilot = Holder::new("ZEP01");

    // A kind the rate table does not know about.
    engine.add_resource(ResourceKind::from("zeppelin"), "zeppelin-1");
    let loan = engine
        .check_out(&pilot, &ResourceKind::from("zeppelin"), helpers::day(1))
        .unwrap();

    let err = engine
        .check_in(pilot.id, loan.resource_id, helpers::day(2))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownResourceKind);

    // The failed checkin settles nothing: loan open, spot occupied.
    assert_eq!(engine.open_loan_count_for(pilot.id), 1);
    assert!(engine.resource(loan.resource_id).unwrap().is_occupied());
}

#[test]
fn test_zero_duration_metered_stay_is_free() {
    let mut engine = helpers::parking_engine();
    let driver = Holder::new("ABC123");

    let arrive = helpers::day(1);
    let loan = engine
        .check_out(&driver, &ResourceKind::from("car"), arrive)
        .unwrap();
    let charge = engine.check_in(driver.id, loan.resource_id, arrive).unwrap();
    assert_eq!(charge, 0);
}
