//! Rate table configuration for the Labor Cost Engine.
//!
//! This module provides the statutory [`RateTable`] and the loader that
//! reads one from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use labor_cost_engine::config::RateTableLoader;
//!
//! let rates = RateTableLoader::load("./config/rates/co-2026.yaml").unwrap();
//! println!("Loaded rates for {}", rates.metadata().year);
//! ```

mod loader;
mod types;

pub use loader::RateTableLoader;
pub use types::{
    PAYROLL_TAX_EXEMPTION_WAGE_MULTIPLE, PayrollTaxRates, RISK_LEVELS, RateTable, RateTableConfig,
    RateTableMetadata, SocialBenefitRates, SocialSecurityRates,
    TRANSPORT_ALLOWANCE_WAGE_MULTIPLE,
};
