//! Alert dispatcher adapters.

mod simulated_dispatcher;

pub use simulated_dispatcher::SimulatedAlertDispatcher;
