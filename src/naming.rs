// report-generation-service/src/naming.rs

use crate::clock::{Clock, SystemClock};
use std::sync::Arc;

pub const DOCX_EXTENSION: &str = "docx";

const INVALID_FILENAME_CHARS: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// Derives download file names of the form
/// `Report_{client}_{year}_{YYYYMMDD_HHMMSS}.docx`.
#[derive(Clone)]
pub struct FileNamer {
    clock: Arc<dyn Clock>,
}

impl FileNamer {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn name(&self, client_name: &str, year: i32) -> String {
        let timestamp = self.clock.now().format("%Y%m%d_%H%M%S");
        format!(
            "Report_{}_{}_{}.{}",
            sanitize(client_name),
            year,
            timestamp,
            DOCX_EXTENSION
        )
    }
}

impl Default for FileNamer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_invalid_filename_char(c: char) -> bool {
    c.is_control() || INVALID_FILENAME_CHARS.contains(&c)
}

/// Replaces each run of characters that are not allowed in a file name with
/// a single underscore.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_invalid_run = false;

    for c in name.chars() {
        if is_invalid_filename_char(c) {
            if !in_invalid_run {
                out.push('_');
            }
            in_invalid_run = true;
        } else {
            out.push(c);
            in_invalid_run = false;
        }
    }

    out
}
