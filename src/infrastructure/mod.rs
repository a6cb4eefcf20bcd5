//! Infrastructure layer - logging and observability wiring

pub mod logging;
pub mod observability;
