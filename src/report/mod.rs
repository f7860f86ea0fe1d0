pub mod json;
pub mod text;

use crate::error::ScanError;
use crate::types::report::ScanReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String, ScanError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(ScanError::Json),
    }
}
