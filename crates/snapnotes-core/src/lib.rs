//! SnapNotes Core Library
//!
//! Note store, search, and export logic behind the `snapnotes` CLI.

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod note;
pub mod store;
