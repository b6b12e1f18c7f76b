//! Save format version detection from the file header.

use log::{debug, warn};

use crate::schema::{self, FormatSchema, HEADER_LEN};
use crate::source::ByteSource;

/// Inspect the fixed header region and select the matching format.
///
/// Returns `None` when no registered signature matches; the file can
/// still be hex dumped. A header too short for any signature fails
/// every match and likewise yields `None`. When more than one schema
/// claims the header (a schema authoring error) the earliest registered
/// one wins and the conflict is logged.
pub fn detect(source: &ByteSource) -> Option<&'static FormatSchema> {
    let header = source.read(0, HEADER_LEN);

    let mut matches = schema::registry()
        .iter()
        .filter(|s| header.starts_with(s.signature));

    let selected = matches.next();
    match selected {
        Some(schema) => {
            let extra: Vec<&str> = matches.map(|s| s.version).collect();
            if !extra.is_empty() {
                warn!(
                    "header matches multiple schema signatures; using {} over {}",
                    schema.version,
                    extra.join(", ")
                );
            }
            debug!("detected save format {}", schema.version);
        }
        None => {
            debug!(
                "no registered signature matches header ({} bytes available)",
                header.len()
            );
        }
    }
    selected
}
