pub mod types;
pub mod response;
pub mod utils;
pub mod env;

pub use response::{ApiResponse, ResponseStatus};
pub use types::HealthReport;
