//! CLI commands for snapnotes

pub mod add;
pub mod delete;
pub mod dispatch;
pub mod export;
pub mod list;
pub mod search;
pub mod view;
