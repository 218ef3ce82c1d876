//! Conversion core: typed row records, per-mode mapping, dispatch

pub mod dispatcher;
pub mod mapper;
pub mod records;

pub use dispatcher::{convert, convert_bytes, version_tag, version_tag_at, ConversionOutput};
pub use mapper::{map_app_rows, map_backend_rows};
pub use records::{AppRecord, BackendRecord};
