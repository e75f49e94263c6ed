pub mod input;
pub mod search;
