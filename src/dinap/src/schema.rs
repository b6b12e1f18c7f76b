//! Versioned field layout tables for known DINAP save formats.
//!
//! Each save format version is described by a [`FormatSchema`]: a header
//! signature plus an ordered table of byte-range interpretation rules.
//! The table of known versions is compiled in and read-only, so lookups
//! need no locking.

use std::fmt;
use std::sync::Once;

use log::warn;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("unknown save format version: {0}")]
    UnknownVersion(String),
}

/// How the bytes of one field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    UInt8,
    UInt16Le,
    UInt32Le,
    Ascii,
    Raw,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::UInt8 => "uint8",
            FieldKind::UInt16Le => "uint16-le",
            FieldKind::UInt32Le => "uint32-le",
            FieldKind::Ascii => "ascii",
            FieldKind::Raw => "raw",
        };
        f.pad(name)
    }
}

/// One named byte-range interpretation rule within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub offset: u64,
    pub width: usize,
    pub kind: FieldKind,
    pub label: &'static str,
    /// Set when this field intentionally reuses bytes covered by another
    /// field, so overlap checking skips it.
    pub allow_overlap: bool,
}

impl FieldDescriptor {
    pub const fn new(offset: u64, width: usize, kind: FieldKind, label: &'static str) -> Self {
        Self {
            offset,
            width,
            kind,
            label,
            allow_overlap: false,
        }
    }

    pub const fn overlapping(
        offset: u64,
        width: usize,
        kind: FieldKind,
        label: &'static str,
    ) -> Self {
        Self {
            offset,
            width,
            kind,
            label,
            allow_overlap: true,
        }
    }
}

/// Field layout for one save format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSchema {
    pub version: &'static str,
    /// Magic bytes matched against the start of the header region.
    pub signature: &'static [u8],
    /// Declaration order is presentation order.
    pub fields: &'static [FieldDescriptor],
}

impl FormatSchema {
    /// Pairs of fields that cover the same bytes without either being
    /// marked as an intentional overlap.
    pub fn overlapping_fields(&self) -> Vec<(&FieldDescriptor, &FieldDescriptor)> {
        let mut pairs = Vec::new();
        for (i, a) in self.fields.iter().enumerate() {
            for b in &self.fields[i + 1..] {
                if a.allow_overlap || b.allow_overlap {
                    continue;
                }
                let a_end = a.offset + a.width as u64;
                let b_end = b.offset + b.width as u64;
                if a.offset < b_end && b.offset < a_end {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

/// Size of the header region read during version detection. Large enough
/// for every registered signature.
pub const HEADER_LEN: usize = 8;

/// All known DINAP save layouts, in registration order. Earliest entry
/// wins when more than one signature matches a header.
pub const VERSIONS: &[FormatSchema] = &[DINAP_V1, DINAP_V2];

pub const DINAP_V1: FormatSchema = FormatSchema {
    version: "DINAP v1",
    signature: b"DINAP\x01",
    fields: &[
        FieldDescriptor::overlapping(0x00, 8, FieldKind::Raw, "header"),
        FieldDescriptor::new(0x00, 6, FieldKind::Raw, "magic"),
        FieldDescriptor::new(0x06, 2, FieldKind::UInt16Le, "build"),
        FieldDescriptor::new(0x08, 16, FieldKind::Ascii, "pilot name"),
        FieldDescriptor::new(0x18, 4, FieldKind::UInt32Le, "play time (s)"),
        FieldDescriptor::new(0x1c, 4, FieldKind::UInt32Le, "credits"),
        FieldDescriptor::new(0x20, 2, FieldKind::UInt16Le, "alloy"),
        FieldDescriptor::new(0x22, 2, FieldKind::UInt16Le, "fuel"),
        FieldDescriptor::new(0x24, 1, FieldKind::UInt8, "sector"),
        FieldDescriptor::new(0x25, 1, FieldKind::UInt8, "difficulty"),
    ],
};

// v2 widened the resource counters to 32 bits and the pilot name to 24
// bytes, and added the plasma counter.
pub const DINAP_V2: FormatSchema = FormatSchema {
    version: "DINAP v2",
    signature: b"DINAP\x02",
    fields: &[
        FieldDescriptor::overlapping(0x00, 8, FieldKind::Raw, "header"),
        FieldDescriptor::new(0x00, 6, FieldKind::Raw, "magic"),
        FieldDescriptor::new(0x06, 2, FieldKind::UInt16Le, "build"),
        FieldDescriptor::new(0x08, 24, FieldKind::Ascii, "pilot name"),
        FieldDescriptor::new(0x20, 4, FieldKind::UInt32Le, "play time (s)"),
        FieldDescriptor::new(0x24, 4, FieldKind::UInt32Le, "credits"),
        FieldDescriptor::new(0x28, 4, FieldKind::UInt32Le, "alloy"),
        FieldDescriptor::new(0x2c, 4, FieldKind::UInt32Le, "fuel"),
        FieldDescriptor::new(0x30, 4, FieldKind::UInt32Le, "plasma"),
        FieldDescriptor::new(0x34, 1, FieldKind::UInt8, "sector"),
        FieldDescriptor::new(0x35, 1, FieldKind::UInt8, "difficulty"),
    ],
};

static VALIDATE: Once = Once::new();

/// The compiled-in schema table, validated on first access.
///
/// Validation only emits warnings (duplicate version keys, unflagged
/// field overlaps); a misauthored table still serves lookups.
pub fn registry() -> &'static [FormatSchema] {
    VALIDATE.call_once(|| {
        for (i, schema) in VERSIONS.iter().enumerate() {
            for earlier in &VERSIONS[..i] {
                if earlier.version == schema.version {
                    warn!("duplicate schema version key: {}", schema.version);
                }
            }
            for (a, b) in schema.overlapping_fields() {
                warn!(
                    "schema {}: fields '{}' and '{}' overlap",
                    schema.version, a.label, b.label
                );
            }
        }
    });
    VERSIONS
}

/// Iterate over all registered format versions.
pub fn versions() -> impl Iterator<Item = &'static FormatSchema> {
    registry().iter()
}

/// Look up a schema by its version identifier.
pub fn lookup(version: &str) -> Result<&'static FormatSchema, SchemaError> {
    registry()
        .iter()
        .find(|s| s.version == version)
        .ok_or_else(|| SchemaError::UnknownVersion(version.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_version() {
        let schema = lookup("DINAP v1").unwrap();
        assert_eq!(schema.signature, b"DINAP\x01");
    }

    #[test]
    fn test_lookup_unknown_version() {
        match lookup("DINAP v9") {
            Err(SchemaError::UnknownVersion(v)) => assert_eq!(v, "DINAP v9"),
            Ok(_) => panic!("expected UnknownVersion"),
        }
    }

    #[test]
    fn test_version_keys_unique() {
        for (i, schema) in VERSIONS.iter().enumerate() {
            for earlier in &VERSIONS[..i] {
                assert_ne!(earlier.version, schema.version);
            }
        }
    }

    #[test]
    fn test_signatures_fit_header_region() {
        for schema in VERSIONS {
            assert!(schema.signature.len() <= HEADER_LEN);
            assert!(!schema.signature.is_empty());
        }
    }

    #[test]
    fn test_builtin_schemas_have_no_unflagged_overlaps() {
        for schema in VERSIONS {
            assert!(
                schema.overlapping_fields().is_empty(),
                "schema {} has unflagged overlaps",
                schema.version
            );
        }
    }

    #[test]
    fn test_overlap_detection_flags_unmarked_pair() {
        const BAD: FormatSchema = FormatSchema {
            version: "bad",
            signature: b"BAD",
            fields: &[
                FieldDescriptor::new(0, 4, FieldKind::Raw, "a"),
                FieldDescriptor::new(2, 4, FieldKind::Raw, "b"),
            ],
        };
        let pairs = BAD.overlapping_fields();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.label, "a");
        assert_eq!(pairs[0].1.label, "b");
    }

    #[test]
    fn test_overlap_detection_skips_flagged_pair() {
        const INTENTIONAL: FormatSchema = FormatSchema {
            version: "intentional",
            signature: b"OK",
            fields: &[
                FieldDescriptor::overlapping(0, 8, FieldKind::Raw, "whole header"),
                FieldDescriptor::new(0, 4, FieldKind::UInt32Le, "first word"),
            ],
        };
        assert!(INTENTIONAL.overlapping_fields().is_empty());
    }

    #[test]
    fn test_adjacent_fields_do_not_overlap() {
        const ADJACENT: FormatSchema = FormatSchema {
            version: "adjacent",
            signature: b"ADJ",
            fields: &[
                FieldDescriptor::new(0, 4, FieldKind::Raw, "a"),
                FieldDescriptor::new(4, 4, FieldKind::Raw, "b"),
            ],
        };
        assert!(ADJACENT.overlapping_fields().is_empty());
    }
}
