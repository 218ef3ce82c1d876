//! locsheet API Server module
//!
//! HTTP surface for spreadsheet conversion.
//! Run with `locsheet serve` or `locsheet-server`.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server, ApiConfig, AppState};
