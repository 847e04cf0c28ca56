use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// Location of the Armbian build metadata file.
pub const ARMBIAN_RELEASE_PATH: &str = "/etc/armbian-release";

/// Keys whose normalized name is not just the lower-cased original.
const KEY_RENAMES: &[(&str, &str)] = &[
    ("LINUXFAMILY", "linux_family"),
    ("BOARDFAMILY", "board_family"),
];

/// Normalized `/etc/armbian-release` contents.
pub type ReleaseRecord = HashMap<String, String>;

/// Reads the release file at [`ARMBIAN_RELEASE_PATH`].
///
/// Returns an empty record when the file is missing or unreadable, so this is
/// safe to run on non-Armbian hosts.
pub fn parse_armbian_release() -> ReleaseRecord {
    parse_armbian_release_at(ARMBIAN_RELEASE_PATH)
}

/// Like [`parse_armbian_release`], for a release file at another location.
pub fn parse_armbian_release_at(path: impl AsRef<Path>) -> ReleaseRecord {
    let path = path.as_ref();
    match read_armbian_release(path) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!("no Armbian release facts from {}: {:#}", path.display(), err);
            ReleaseRecord::new()
        }
    }
}

/// Reads and parses a release file, surfacing open and read errors.
pub fn read_armbian_release(path: impl AsRef<Path>) -> Result<ReleaseRecord> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let reader = std::io::BufReader::new(file);
    parse_armbian_release_from_reader(reader)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Parses release data from `reader`.
///
/// Whitespace around the whole content is dropped before splitting into lines,
/// so it never ends up in the first key or the last value.
pub fn parse_armbian_release_from_reader<R: BufRead>(mut reader: R) -> Result<ReleaseRecord> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let mut record = ReleaseRecord::new();
    for line in content.trim().lines() {
        if line.trim_start_matches(' ').starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::trace!("skipping line without '=': {line:?}");
            continue;
        };
        record.insert(normalize_key(key), strip_quotes(value).to_string());
    }
    Ok(record)
}

/// Applies the rename table, then lower-cases.
pub fn normalize_key(key: &str) -> String {
    KEY_RENAMES
        .iter()
        .find(|(raw, _)| *raw == key)
        .map_or(key, |&(_, renamed)| renamed)
        .to_lowercase()
}

/// Strips every leading and trailing `'` or `"`, not just a matching pair.
pub fn strip_quotes(value: &str) -> &str {
    value.trim_matches(['"', '\''])
}
