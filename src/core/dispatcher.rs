//! Mode dispatch: sheet selection → mapping → serialization

use super::mapper::{map_app_rows, map_backend_rows};
use crate::error::{LocsheetError, LocsheetResult};
use crate::excel::Workbook;
use crate::types::{ConversionMode, SheetSelector};
use crate::writer::to_pretty_json;
use serde::Serialize;
use tracing::info;

/// Serialized result of one conversion.
///
/// Serializes as `{ "tr", "en", "version" }` or `{ "combined" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConversionOutput {
    App {
        tr: String,
        en: String,
        version: String,
    },
    Backend {
        combined: String,
    },
}

impl ConversionOutput {
    pub fn mode(&self) -> ConversionMode {
        match self {
            ConversionOutput::App { .. } => ConversionMode::App,
            ConversionOutput::Backend { .. } => ConversionMode::Backend,
        }
    }
}

/// Convert the selected sheet of a decoded workbook
pub fn convert(
    workbook: &Workbook,
    selector: &SheetSelector,
    mode: ConversionMode,
) -> LocsheetResult<ConversionOutput> {
    let sheet = workbook.select(selector)?;

    let output = match mode {
        ConversionMode::App => {
            let dicts = map_app_rows(&sheet.rows);
            info!(
                sheet = %sheet.name,
                rows = sheet.rows.len(),
                keys = dicts.en.len(),
                "converted app sheet"
            );
            ConversionOutput::App {
                tr: to_pretty_json(&dicts.tr)?,
                en: to_pretty_json(&dicts.en)?,
                version: version_tag(),
            }
        }
        ConversionMode::Backend => {
            let combined = map_backend_rows(&sheet.rows);
            info!(
                sheet = %sheet.name,
                rows = sheet.rows.len(),
                keys = combined.en.len(),
                "converted backend sheet"
            );
            ConversionOutput::Backend {
                combined: to_pretty_json(&combined)?,
            }
        }
    };

    Ok(output)
}

/// Decode and convert an uploaded file. `None` means nothing was uploaded.
pub fn convert_bytes(
    bytes: Option<&[u8]>,
    selector: &SheetSelector,
    mode: ConversionMode,
) -> LocsheetResult<ConversionOutput> {
    let bytes = bytes.ok_or(LocsheetError::InputMissing)?;
    let workbook = Workbook::from_bytes(bytes)?;
    convert(&workbook, selector, mode)
}

/// Cosmetic build tag `1.0.<unix seconds mod 1000>`
pub fn version_tag() -> String {
    version_tag_at(chrono::Utc::now().timestamp())
}

pub fn version_tag_at(unix_seconds: i64) -> String {
    format!("1.0.{}", unix_seconds.rem_euclid(1000))
}
