//! Typed row records for each conversion mode
//!
//! A [`Row`] is a loose bag of named cells. Each mode reads its columns once
//! into a record, applying blank-cell defaults, so the mappers only branch on
//! typed fields.

use crate::types::{CellValue, Row};

/// Column headers the mappers read
pub mod columns {
    pub const KEY: &str = "Key";
    pub const HAS_LINKS: &str = "HAS_LINKS";

    pub const TR_TEXT: &str = "tr_TR";
    pub const TR_LINK_TEXT: &str = "tr_TR_Link_Text";
    pub const TR_LINK_URL: &str = "tr_TR_Link_URL";

    pub const EN_TEXT: &str = "en_INT";
    pub const EN_LINK_TEXT: &str = "en_INT_Link_Text";
    pub const EN_LINK_URL: &str = "en_INT_Link_URL";

    pub const BACKEND_EN: &str = "en";
    pub const BACKEND_TR: &str = "tr";
}

/// Stand-in for a blank text cell
pub const MISSING_TEXT: &str = "-";

/// Stand-in for a blank link URL
pub const MISSING_URL: &str = "";

/// One language's cells of an app sheet row, defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedCells {
    pub text: String,
    pub link_text: String,
    pub link_url: String,
}

impl LocalizedCells {
    fn read(row: &Row, text: &str, link_text: &str, link_url: &str) -> Self {
        Self {
            text: row.get(text).text_or(MISSING_TEXT),
            link_text: row.get(link_text).text_or(MISSING_TEXT),
            link_url: row.get(link_url).text_or(MISSING_URL),
        }
    }
}

/// A row of an app UI sheet
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    /// `None` when the key cell is blank
    pub key: Option<String>,
    pub has_links: CellValue,
    pub tr: LocalizedCells,
    pub en: LocalizedCells,
}

impl AppRecord {
    pub fn from_row(row: &Row) -> Self {
        Self {
            key: row.get(columns::KEY).as_text(),
            has_links: row.get(columns::HAS_LINKS).clone(),
            tr: LocalizedCells::read(
                row,
                columns::TR_TEXT,
                columns::TR_LINK_TEXT,
                columns::TR_LINK_URL,
            ),
            en: LocalizedCells::read(
                row,
                columns::EN_TEXT,
                columns::EN_LINK_TEXT,
                columns::EN_LINK_URL,
            ),
        }
    }

    /// Only an exact numeric `0` means "no links". Anything else,
    /// including an unset cell or the text `"0"`, carries links.
    pub fn has_links(&self) -> bool {
        !self.has_links.is_zero()
    }
}

/// A row of a backend sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRecord {
    /// `None` unless the key cell is text with non-whitespace content
    pub key: Option<String>,
    pub en: String,
    pub tr: String,
}

impl BackendRecord {
    pub fn from_row(row: &Row) -> Self {
        let key = match row.get(columns::KEY) {
            CellValue::Text(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        };

        Self {
            key,
            en: row.get(columns::BACKEND_EN).text_or(MISSING_TEXT),
            tr: row.get(columns::BACKEND_TR).text_or(MISSING_TEXT),
        }
    }
}
