// Deterministic creator calculators: no provider calls, no state.

pub mod analytics;
pub mod handlers;
pub mod script;
