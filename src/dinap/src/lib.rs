//! # dinap
//!
//! DINAP save file inspection library - profile discovery, format
//! detection, and decoding.
//!
//! This library provides functionality to:
//! - Locate the save profile directory for a user
//! - Detect which DINAP save format version a file uses
//! - Decode known byte ranges into a typed resource table
//! - Render any file as hex dump rows
//!
//! Rendering is data-only: the library produces [`hexdump::HexRow`] and
//! [`decode::DecodedField`] sequences and leaves terminal output to the
//! caller.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = dinap::ByteSource::open(Path::new("slot0.sav"))?;
//!
//! // Decode the resource table when the format is recognized
//! if let Some(schema) = dinap::detect(&source) {
//!     for field in dinap::decode(&source, schema) {
//!         println!("{}: {}", field.label, field.value);
//!     }
//! }
//!
//! // The hex dump works regardless of format detection
//! for row in dinap::hexdump::rows_default(&source) {
//!     println!("{:08x}  {}", row.address, row.printable);
//! }
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod detect;
pub mod hexdump;
pub mod profile;
pub mod schema;
pub mod source;

// Re-export commonly used items
#[doc(inline)]
pub use decode::{decode, DecodedField, FieldValue};
#[doc(inline)]
pub use detect::detect;
#[doc(inline)]
pub use hexdump::{HexRow, DEFAULT_ROW_WIDTH};
#[doc(inline)]
pub use profile::{list_profiles, resolve, ProfileError, SaveProfile};
#[doc(inline)]
pub use schema::{FieldDescriptor, FieldKind, FormatSchema, SchemaError};
#[doc(inline)]
pub use source::{ByteSource, SourceError};
