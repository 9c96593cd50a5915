use std::path::Path;

use chrono::{DateTime, Utc};
use toml_edit::{DocumentMut, InlineTable, Item, Table, TableLike, Value};
use tracing::debug;

use crate::atomic::replace_atomically;
use crate::error::{ManifestError, UpdateError};

pub const PROJECT_VERSION_KEY: &str = "project.version";
pub const DEFAULT_TIMESTAMP_KEY: &str = "tool.uv.exclude-newer";

/// Renders `timestamp` as `YYYY-MM-DDTHH:MM:SSZ`.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Sets the string at the dotted path `dotted`, creating intermediate tables
/// as needed.
///
/// Missing intermediates are created implicitly so that only the innermost
/// header is rendered. An existing value keeps its surrounding whitespace and
/// trailing comment.
///
/// # Errors
///
/// Returns [`UpdateError::StructuredEdit`] if an intermediate entry exists
/// but is not a table.
pub fn set_dotted_key(doc: &mut DocumentMut, dotted: &str, text: &str) -> Result<(), UpdateError> {
    let segments: Vec<&str> = dotted.split('.').collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return Ok(());
    };

    let mut current: &mut dyn TableLike = doc.as_table_mut();
    let mut inline = false;

    for (depth, segment) in parents.iter().enumerate() {
        let item = current.entry(segment).or_insert(empty_table(inline));
        inline = item.is_inline_table();
        current = item
            .as_table_like_mut()
            .ok_or_else(|| UpdateError::StructuredEdit {
                key: dotted.to_string(),
                blocking: segments[..=depth].join("."),
            })?;
    }

    if let Some(existing) = current.get_mut(leaf).and_then(Item::as_value_mut) {
        let decor = existing.decor().clone();
        *existing = Value::from(text);
        *existing.decor_mut() = decor;
    } else {
        current.insert(leaf, toml_edit::value(text));
    }

    Ok(())
}

fn empty_table(inline: bool) -> Item {
    if inline {
        Item::Value(Value::InlineTable(InlineTable::new()))
    } else {
        let mut table = Table::new();
        table.set_implicit(true);
        Item::Table(table)
    }
}

/// Atomically writes `project.version` and the refresh timestamp.
///
/// Both keys are set on one parsed document, so either both land or the file
/// is left untouched.
///
/// # Errors
///
/// Returns [`ManifestError::UpdateFailed`] if the file cannot be read, parsed,
/// edited, or replaced.
pub fn write_version(
    path: &Path,
    version: &str,
    timestamp_key: &str,
    timestamp: DateTime<Utc>,
) -> Result<(), ManifestError> {
    let stamp = format_timestamp(timestamp);

    replace_atomically(path, |reader, writer| {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut doc = content.parse::<DocumentMut>()?;
        set_dotted_key(&mut doc, PROJECT_VERSION_KEY, version)?;
        set_dotted_key(&mut doc, timestamp_key, &stamp)?;

        writer.write_all(doc.to_string().as_bytes())?;
        Ok(())
    })?;

    debug!(file = %path.display(), version, timestamp = %stamp, "updated manifest");
    Ok(())
}
