//! HTTP API module for the fee engine.
//!
//! Exposes `POST /calculate`, which resolves the fee schedule for the
//! requested date, runs the engine and returns the breakdown together with
//! the record the caller would persist.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, OtherFeeRequest};
pub use response::{ApiError, CalculationResponse, DisplaySummary};
pub use state::AppState;
