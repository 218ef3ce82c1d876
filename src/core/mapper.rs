//! Row → dictionary mapping for both sheet layouts

use super::records::{AppRecord, BackendRecord};
use crate::types::{AppDictionaries, CombinedDictionary, Entry, LanguageDictionary, Row};
use tracing::debug;

/// Map app UI sheet rows into `tr` and `en` dictionaries.
///
/// The first data row is a label row and is never read. Rows with a blank
/// `Key` are dropped. A `HAS_LINKS` of exactly `0` yields `{ default }`
/// entries; any other value yields `{ default, links: [..] }` with one link.
pub fn map_app_rows(rows: &[Row]) -> AppDictionaries {
    let mut dictionaries = AppDictionaries::default();

    for (index, row) in rows.iter().enumerate().skip(1) {
        let record = AppRecord::from_row(row);
        let has_links = record.has_links();

        let Some(key) = record.key else {
            debug!(index, "skipping row without key");
            continue;
        };

        let (tr, en) = if has_links {
            (
                Entry::with_link(record.tr.text, record.tr.link_text, record.tr.link_url),
                Entry::with_link(record.en.text, record.en.link_text, record.en.link_url),
            )
        } else {
            (Entry::plain(record.tr.text), Entry::plain(record.en.text))
        };

        write_entry(&mut dictionaries.tr, &key, tr);
        write_entry(&mut dictionaries.en, &key, en);
    }

    dictionaries
}

/// Map backend sheet rows into one dictionary nesting `en` and `tr`.
///
/// Every row is read. Rows whose `Key` is not non-blank text are dropped.
pub fn map_backend_rows(rows: &[Row]) -> CombinedDictionary {
    let mut combined = CombinedDictionary::default();

    for (index, row) in rows.iter().enumerate() {
        let record = BackendRecord::from_row(row);

        let Some(key) = record.key else {
            debug!(index, "skipping row without key");
            continue;
        };

        write_entry(&mut combined.en, &key, Entry::plain(record.en));
        write_entry(&mut combined.tr, &key, Entry::plain(record.tr));
    }

    combined
}

/// Last write wins; an overwritten key keeps its first position.
fn write_entry(dictionary: &mut LanguageDictionary, key: &str, entry: Entry) {
    if dictionary.insert(key.to_string(), entry).is_some() {
        debug!(key, "duplicate key, earlier row overwritten");
    }
}
