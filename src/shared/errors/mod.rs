mod app_error;
mod search_error;

pub use app_error::{AppError, AppResult};
pub use search_error::SearchError;
