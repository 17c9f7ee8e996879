//! Layered configuration loading: default file, environment overlay,
//! and `LENDHUB`-prefixed environment variables.

use lendhub::config::rates::ChargeModelConfig;
use lendhub::{AppConfig, LoanLimit};

#[test]
fn test_load_merges_default_with_environment_overlay() {
    // Runs from the workspace root, where config/default.toml (the
    // parking lot) and config/library.toml both live.
    let config = AppConfig::load("library").expect("load layered config");

    // The overlay replaces the pool composition and the charge model.
    assert_eq!(config.pool.composition.len(), 1);
    assert_eq!(config.pool.composition[0].kind, "book");
    assert_eq!(config.pool.total_slots(), 6);
    assert_eq!(config.rates.model, ChargeModelConfig::FlatOverdue);
    assert_eq!(config.rates.table["book"], 500);

    // Rate tables merge key-wise, so the default kinds survive.
    assert_eq!(config.rates.table["car"], 500);

    assert_eq!(config.ledger.loan_limit(), LoanLimit::Fixed(5));
    assert_eq!(config.ledger.term(), Some(chrono::Duration::days(14)));
}

#[test]
fn test_load_applies_prefixed_environment_variables() {
    // SAFETY: no other test in this binary reads or writes this variable.
    unsafe { std::env::set_var("LENDHUB__LOGGING__LEVEL", "trace") };
    let result = AppConfig::load("library");
    unsafe { std::env::remove_var("LENDHUB__LOGGING__LEVEL") };

    let config = result.expect("load layered config");
    assert_eq!(config.logging.level, "trace");
}
