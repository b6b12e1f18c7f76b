//! Schemas command handler

use dinap::schema;

/// List every registered save format version and its field layout.
pub fn handle() {
    for format in schema::versions() {
        println!(
            "{}  (signature {})",
            format.version,
            hex::encode(format.signature)
        );
        for field in format.fields {
            println!(
                "  {:#06x}  {:>3}  {:<9}  {}",
                field.offset, field.width, field.kind, field.label
            );
        }
        println!();
    }
}
