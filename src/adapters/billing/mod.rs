//! Billing gateway adapters.

mod simulated_billing;

pub use simulated_billing::SimulatedBilling;
