//! Schema-driven decoding of save file fields.

use std::fmt;

use log::warn;

use crate::hexdump;
use crate::schema::{FieldDescriptor, FieldKind, FormatSchema};
use crate::source::ByteSource;

/// A decoded field value, or an explicit marker when the file ended
/// before the field did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    UInt(u64),
    Text(String),
    Bytes(Vec<u8>),
    Truncated,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::UInt(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bytes(b) => f.write_str(&hex::encode(b)),
            FieldValue::Truncated => f.write_str("<truncated>"),
        }
    }
}

/// One decoded field with its provenance in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub label: &'static str,
    pub value: FieldValue,
    pub offset: u64,
    pub width: usize,
}

/// Decode every field the schema declares, in declaration order.
///
/// Never fails as a whole: a field the file is too short for becomes
/// [`FieldValue::Truncated`] rather than an error, so a short or corrupt
/// save still yields a best-effort table.
pub fn decode(source: &ByteSource, schema: &FormatSchema) -> Vec<DecodedField> {
    schema
        .fields
        .iter()
        .map(|field| decode_field(source, field))
        .collect()
}

fn decode_field(source: &ByteSource, field: &FieldDescriptor) -> DecodedField {
    let bytes = source.read(field.offset, field.width);
    let value = if bytes.len() < field.width {
        warn!(
            "field '{}' truncated: wanted {} bytes at {:#x}, file has {}",
            field.label,
            field.width,
            field.offset,
            bytes.len()
        );
        FieldValue::Truncated
    } else {
        decode_value(bytes, field.kind)
    };
    DecodedField {
        label: field.label,
        value,
        offset: field.offset,
        width: field.width,
    }
}

fn decode_value(bytes: &[u8], kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::UInt8 | FieldKind::UInt16Le | FieldKind::UInt32Le => {
            FieldValue::UInt(uint_le(bytes))
        }
        FieldKind::Ascii => {
            // Stop at the first NUL; take the full width when there is none.
            let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
            FieldValue::Text(hexdump::printable(&bytes[..end]))
        }
        FieldKind::Raw => FieldValue::Bytes(bytes.to_vec()),
    }
}

/// Little-endian assembly, independent of host byte order.
fn uint_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
