pub mod client;
pub mod mapper;
pub mod models;

pub use client::CatalogClient;
pub use mapper::CatalogMapper;
pub use models::{ErrorEnvelope, SearchEnvelope};
