//! JSON serialization and output files

use crate::core::ConversionOutput;
use crate::error::LocsheetResult;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Pretty-printed JSON with 2-space indentation, keys in dictionary order
pub fn to_pretty_json<T: Serialize>(value: &T) -> LocsheetResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// A named JSON document ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub file_name: String,
    pub contents: String,
}

/// File names for a conversion result.
///
/// App mode gives `localization_tr.json` and `localization_en.json`, or
/// `localization_dev_<version>_tr.json` / `_en.json` when `versioned`.
/// Backend mode gives `localization.json`.
pub fn output_files(output: &ConversionOutput, versioned: bool) -> Vec<OutputFile> {
    match output {
        ConversionOutput::App { tr, en, version } => {
            let prefix = if versioned {
                format!("localization_dev_{}", version)
            } else {
                "localization".to_string()
            };
            vec![
                OutputFile {
                    file_name: format!("{}_tr.json", prefix),
                    contents: tr.clone(),
                },
                OutputFile {
                    file_name: format!("{}_en.json", prefix),
                    contents: en.clone(),
                },
            ]
        }
        ConversionOutput::Backend { combined } => vec![OutputFile {
            file_name: "localization.json".to_string(),
            contents: combined.clone(),
        }],
    }
}

/// Write files into `dir`, creating it if needed. Returns the written paths.
pub fn write_output_files(dir: &Path, files: &[OutputFile]) -> LocsheetResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.contents)?;
        written.push(path);
    }
    Ok(written)
}
