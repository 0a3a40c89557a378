pub mod auth;
pub mod fallback;
pub mod json;
pub mod response;

pub use auth::Authorized;
pub use fallback::{json_error_fallback, not_found};
pub use json::JsonBody;
pub use response::{ApiResponse, ApiResult};
