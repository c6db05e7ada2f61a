//! HTTP API layer

mod error;
mod handlers;
mod routes;

pub use error::{ApiError, ValidPath};
pub use handlers::{
    ErrorResponse, FileResponse, ItemResponse, MessageResponse, ModelResponse, UserResponse,
    CURRENT_USER,
};
pub use routes::{create_router, route_table, ApiDoc, RouteEntry};
