//! locsheet API Server binary
//!
//! Standalone HTTP server for spreadsheet conversion.

use clap::Parser;
use locsheet::api::{run_api_server, server::DEFAULT_MAX_UPLOAD_BYTES, ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "locsheet-server")]
#[command(version)]
#[command(about = "locsheet API Server - convert localization spreadsheets over HTTP")]
#[command(long_about = r#"
locsheet API Server

Endpoints:
  - POST /api/convert  - Convert an uploaded workbook
                         multipart parts: file (required), mode (app|backend), sheet
  - GET  /health       - Health check
  - GET  /version      - Server version info
  - GET  /             - API documentation

Responses:
  app mode      {"tr": "<json>", "en": "<json>", "version": "1.0.N"}
  backend mode  {"combined": "<json>"}
  failure       {"error": "..."}  (400 bad request, 500 processing failure)

Example usage:
  locsheet-server                           # Start on localhost:8080
  locsheet-server --host 0.0.0.0 --port 3000

  curl -F file=@strings.xlsx -F mode=backend http://localhost:8080/api/convert
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "LOCSHEET_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "LOCSHEET_PORT")]
    port: u16,

    /// Maximum upload size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "LOCSHEET_MAX_UPLOAD")]
    max_upload: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        max_upload_bytes: args.max_upload,
    };

    run_api_server(config).await
}
