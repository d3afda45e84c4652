//! HTTP API module for the payroll registry.
//!
//! This module provides the REST endpoints a presentation layer needs to
//! drive the registry: employee and work type management, work recording,
//! strategy selection, and pay reporting. The core itself stays free of any
//! I/O; these handlers only parse input, call registry operations, and
//! render the results.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AddEmployeeRequest, AddWorkTypeRequest, RecordWorkRequest, SetStrategyRequest,
};
pub use response::ApiError;
pub use state::AppState;
