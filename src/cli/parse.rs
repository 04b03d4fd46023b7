use snapnotes_core::export::ExportFormat;

/// Parse export format from string
pub fn parse_export_format(s: &str) -> std::result::Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}
