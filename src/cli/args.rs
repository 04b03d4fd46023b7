use std::path::PathBuf;

use super::parse::parse_export_format;
use clap::Args;
use snapnotes_core::export::ExportFormat;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note body (you can use quotes)
    #[arg(long, short, default_value = "")]
    pub body: String,

    /// Comma-separated tags
    #[arg(long, short)]
    pub tags: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Filter by tag (single, exact match)
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Note id
    pub id: u64,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Note id
    pub id: u64,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    pub path: PathBuf,

    /// Output format: md or json (default: md)
    #[arg(long, value_parser = parse_export_format)]
    pub format: Option<ExportFormat>,
}
