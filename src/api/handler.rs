// report-generation-service/src/api/handler.rs

use crate::error::{DocumentError, Result};
use crate::models::{GeneratedReport, ReportRequest};
use crate::naming::FileNamer;
use crate::renderers::DocumentRenderer;
use crate::validation::{Rejection, RequestValidator, ValidationOutcome};
use tracing::{error, info, warn};

/// Result of one generate call, mapped onto an HTTP response by the router.
#[derive(Debug)]
pub enum ReportOutcome {
    Generated(GeneratedReport),
    Rejected(Rejection),
    Failed(DocumentError),
}

/// Validates, renders and names a single report. Holds no per-request state
/// and is shared by every connection.
#[derive(Clone, Default)]
pub struct ReportHandler {
    validator: RequestValidator,
    renderer: DocumentRenderer,
    namer: FileNamer,
}

impl ReportHandler {
    pub fn new() -> Self {
        Self::with_parts(RequestValidator::new(), DocumentRenderer::new(), FileNamer::new())
    }

    pub fn with_parts(
        validator: RequestValidator,
        renderer: DocumentRenderer,
        namer: FileNamer,
    ) -> Self {
        Self {
            validator,
            renderer,
            namer,
        }
    }

    pub fn handle_request(&self, body: &[u8]) -> ReportOutcome {
        let request_id = uuid::Uuid::new_v4().to_string();

        let request = match ReportRequest::from_json(body) {
            Ok(request) => request,
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Failed to parse report request");
                None
            }
        };

        if let ValidationOutcome::Invalid(rejection) = self.validator.validate(request.as_ref()) {
            info!(
                request_id = %request_id,
                reason = %rejection,
                "Report request rejected"
            );
            return ReportOutcome::Rejected(rejection);
        }
        let Some(request) = request else {
            return ReportOutcome::Rejected(Rejection::InvalidRequest);
        };

        info!(
            request_id = %request_id,
            report_type = ?request.report_type,
            year = request.year,
            "Processing report generation request"
        );

        match self.generate(&request) {
            Ok(report) => {
                info!(
                    request_id = %request_id,
                    filename = %report.filename,
                    size_bytes = report.bytes.len(),
                    "Successfully generated report"
                );
                ReportOutcome::Generated(report)
            }
            Err(e) => {
                error!(request_id = %request_id, error = %e, "Failed to generate report");
                ReportOutcome::Failed(e)
            }
        }
    }

    fn generate(&self, request: &ReportRequest) -> Result<GeneratedReport> {
        let client_name = request.client_name.as_deref().unwrap_or_default();
        let report_type_name = request.report_type_name.as_deref().unwrap_or_default();

        let bytes = self.renderer.render(
            client_name,
            report_type_name,
            request.year,
            request.report_id_or_default(),
        )?;
        let filename = self.namer.name(client_name, request.year);

        Ok(GeneratedReport::docx(bytes, filename))
    }
}
