//! HTTP API module for the shift compensation engine.
//!
//! This module exposes the shift book and the pay engine over REST:
//! shift CRUD, month totals and per-employee hours.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ShiftRequest, ShiftsQuery, TotalsQuery};
pub use response::{ApiError, ApiErrorResponse, ShiftView};
pub use state::AppState;
