use crate::error::LocsheetError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//==============================================================================
// Decoded Cells and Rows
//==============================================================================

/// A single decoded spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    /// Numbers, including date serials
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Blank cells are the ones a sheet author left unset: empty, `""`, `0`, `false`.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            CellValue::Bool(b) => !b,
        }
    }

    /// Exact numeric zero. The text `"0"` does not count.
    pub fn is_zero(&self) -> bool {
        matches!(self, CellValue::Number(n) if *n == 0.0)
    }

    /// Cell rendered as text, or `None` when blank
    pub fn as_text(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Empty => None,
        }
    }

    /// Cell rendered as text, with `fallback` for blank cells
    pub fn text_or(&self, fallback: &str) -> String {
        self.as_text().unwrap_or_else(|| fallback.to_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Integral values print without a fraction (`42`, not `42.0`)
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One data row of a sheet: column header → cell, in column order.
/// Blank cells are not stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: IndexMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    /// Cell under `column`; missing columns read as [`CellValue::Empty`]
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

//==============================================================================
// Conversion Options
//==============================================================================

/// Output shape to produce from a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Two dictionaries (`tr`, `en`) with optional link lists
    #[default]
    App,
    /// One dictionary nesting `en` and `tr`
    Backend,
}

impl ConversionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::App => "app",
            ConversionMode::Backend => "backend",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = LocsheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "app" => Ok(ConversionMode::App),
            "backend" => Ok(ConversionMode::Backend),
            _ => Err(LocsheetError::InvalidMode(s.to_string())),
        }
    }
}

/// Which worksheet of a workbook to convert
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelector {
    #[default]
    First,
    /// Zero-based position
    Index(usize),
    Name(String),
}

impl SheetSelector {
    /// A name wins over a position; neither means the first sheet
    pub fn from_options(name: Option<String>, index: Option<usize>) -> Self {
        match (name, index) {
            (Some(name), _) => SheetSelector::Name(name),
            (None, Some(index)) => SheetSelector::Index(index),
            (None, None) => SheetSelector::First,
        }
    }
}

//==============================================================================
// Localization Dictionaries
//==============================================================================

/// A placeholder/URL pair attached to an entry.
///
/// The placeholder is written under the `%1$s` format token that client apps
/// substitute with the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "%1$s")]
    pub placeholder: String,
    pub link: String,
}

/// Localized value for one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl Entry {
    pub fn plain(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            links: None,
        }
    }

    pub fn with_link(
        default: impl Into<String>,
        placeholder: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            default: default.into(),
            links: Some(vec![Link {
                placeholder: placeholder.into(),
                link: link.into(),
            }]),
        }
    }
}

/// Key → entry for one language, in first-insertion order
pub type LanguageDictionary = IndexMap<String, Entry>;

/// App mode output: one dictionary per language
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppDictionaries {
    pub tr: LanguageDictionary,
    pub en: LanguageDictionary,
}

/// Backend mode output, serialized as `{ "en": {...}, "tr": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombinedDictionary {
    pub en: LanguageDictionary,
    pub tr: LanguageDictionary,
}
