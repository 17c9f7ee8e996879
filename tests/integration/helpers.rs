//! Shared test helpers for integration tests.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use lendhub::config::ledger::LedgerConfig;
use lendhub::config::logging::LoggingConfig;
use lendhub::config::pool::{PoolConfig, PoolSlotConfig};
use lendhub::config::rates::{ChargeModelConfig, RateConfig};
use lendhub::{AppConfig, LendingEngine};

/// A fixed, readable timestamp: noon on the given day of March 2025.
pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, d, 12, 0, 0).unwrap()
}

/// Library-shaped configuration: six book copies, a 5-loan ceiling,
/// a 14-day term, and a flat 5.00 EUR/day overdue fine.
pub fn library_config() -> AppConfig {
    AppConfig {
        pool: PoolConfig {
            composition: vec![PoolSlotConfig {
                kind: "book".into(),
                count: 6,
            }],
        },
        ledger: LedgerConfig {
            max_open_loans: 5,
            term_days: Some(14),
        },
        rates: RateConfig {
            model: ChargeModelConfig::FlatOverdue,
            table: HashMap::from([("book".to_string(), 500)]),
        },
        logging: LoggingConfig::default(),
    }
}

/// Parking-shaped configuration: two motorcycle, two car, and one truck
/// spot, no ceiling, no term, metered hourly fees.
pub fn parking_config() -> AppConfig {
    AppConfig {
        pool: PoolConfig {
            composition: vec![
                PoolSlotConfig {
                    kind: "motorcycle".into(),
                    count: 2,
                },
                PoolSlotConfig {
                    kind: "car".into(),
                    count: 2,
                },
                PoolSlotConfig {
                    kind: "truck".into(),
                    count: 1,
                },
            ],
        },
        ledger: LedgerConfig::default(),
        rates: RateConfig {
            model: ChargeModelConfig::Metered,
            table: HashMap::from([
                ("motorcycle".to_string(), 200),
                ("car".to_string(), 500),
                ("truck".to_string(), 1000),
            ]),
        },
        logging: LoggingConfig::default(),
    }
}

/// Engine built from the library configuration.
pub fn library_engine() -> LendingEngine {
    LendingEngine::from_config(&library_config()).expect("valid library config")
}

/// Engine built from the parking configuration.
pub fn parking_engine() -> LendingEngine {
    LendingEngine::from_config(&parking_config()).expect("valid parking config")
}
