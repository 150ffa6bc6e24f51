// report-generation-service/src/renderers/mod.rs

mod docx;

pub use docx::{DocumentRenderer, SUMMARY_PLACEHOLDER};
