//! Web layer for the rail router.
//!
//! Provides HTTP endpoints for listing stations and finding routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
