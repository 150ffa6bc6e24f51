// report-generation-service/src/renderers/docx.rs

use crate::clock::{Clock, SystemClock};
use crate::error::{DocumentError, Result};
use docx_rs::{BreakType, Docx, Paragraph, Run};
use std::io::Cursor;
use std::sync::Arc;
use tracing::{debug, info};

/// Body text of the "Financial Summary" section.
pub const SUMMARY_PLACEHOLDER: &str =
    "This is a sample financial report generated by the report generation service.";

// Font sizes are in half-points.
const TITLE_SIZE: usize = 32;
const HEADING_SIZE: usize = 24;
const METADATA_SIZE: usize = 20;

const TITLE_COLOR: &str = "1a1a1a";
const METADATA_COLOR: &str = "737373";

/// Builds the Word report for a validated request.
#[derive(Clone)]
pub struct DocumentRenderer {
    clock: Arc<dyn Clock>,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn render(
        &self,
        client_name: &str,
        report_type_name: &str,
        year: i32,
        report_id: &str,
    ) -> Result<Vec<u8>> {
        // Callers validate first; reaching here with blank text is a bug.
        if client_name.trim().is_empty() {
            return Err(DocumentError::InvalidData(
                "client name is empty".to_string(),
            ));
        }
        if report_type_name.trim().is_empty() {
            return Err(DocumentError::InvalidData(
                "report type name is empty".to_string(),
            ));
        }

        for (field, text) in [
            ("client name", client_name),
            ("report type name", report_type_name),
            ("report id", report_id),
        ] {
            if let Some(c) = text.chars().find(|&c| !is_xml_char(c)) {
                return Err(DocumentError::GenerationFailed(format!(
                    "{} contains U+{:04X}, which cannot be stored in a Word document",
                    field, c as u32
                )));
            }
        }

        info!(
            client = %client_name,
            report_type = %report_type_name,
            year,
            "Rendering Word document"
        );

        let generated_at = self.clock.now().format("%Y-%m-%d %H:%M:%S").to_string();

        let docx = Docx::new()
            .add_paragraph(title(report_type_name))
            .add_paragraph(detail_line(format!("Client: {}", client_name)))
            .add_paragraph(detail_line(format!("Reporting Year: {}", year)))
            .add_paragraph(Paragraph::new())
            .add_paragraph(metadata(&generated_at, report_id))
            .add_paragraph(Paragraph::new())
            .add_paragraph(section_header("Financial Summary"))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(SUMMARY_PLACEHOLDER)));

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| DocumentError::GenerationFailed(e.to_string()))?;

        let bytes = buffer.into_inner();

        debug!(generated_at = %generated_at, "Document package written");
        info!(
            report_type = %report_type_name,
            size_kb = bytes.len() / 1024,
            "Word document generated successfully"
        );

        Ok(bytes)
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// XML 1.0 `Char` production. Surrogates are not Rust `char`s.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn title(report_type_name: &str) -> Paragraph {
    Paragraph::new().add_run(
        Run::new()
            .add_text(format!("{} Report", report_type_name))
            .bold()
            .size(TITLE_SIZE)
            .color(TITLE_COLOR),
    )
}

fn detail_line(text: String) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(HEADING_SIZE))
}

fn metadata(generated_at: &str, report_id: &str) -> Paragraph {
    Paragraph::new().add_run(
        Run::new()
            .add_text(format!("Generated: {}", generated_at))
            .add_break(BreakType::TextWrapping)
            .add_text(format!("Report ID: {}", report_id))
            .italic()
            .size(METADATA_SIZE)
            .color(METADATA_COLOR),
    )
}

fn section_header(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(HEADING_SIZE))
}
