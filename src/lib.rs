// report-generation-service/src/lib.rs

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod naming;
pub mod renderers;
pub mod validation;
