// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between request routing and the managers
// - Controllers translate request bundles into manager calls
// - Manager results and errors become ResultStatus values
// - Wiring happens once, in AppState

pub mod controllers;
pub mod error_handling;
pub mod request;
pub mod router;
pub mod state;

pub use controllers::ApiRequestController;
pub use error_handling::{ErrorType, ResultStatus};
pub use request::{ApiRequest, MissingApiRequestKeyError, RequestBody, RequestFields};
pub use router::ApiRouter;
pub use state::AppState;
