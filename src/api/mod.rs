// report-generation-service/src/api/mod.rs

mod handler;
mod routes;

pub use handler::{ReportHandler, ReportOutcome};
pub use routes::{create_router, AppState};
