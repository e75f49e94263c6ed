pub mod credit_gate;

pub use credit_gate::{CreditGate, LOW_CREDIT_THRESHOLD};
