pub mod attempt;
pub mod query;

pub use attempt::AttemptId;
pub use query::{Query, QueryOrigin};
