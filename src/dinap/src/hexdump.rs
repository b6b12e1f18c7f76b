//! Fixed-width hex dump rows over a byte range.

use crate::source::ByteSource;

/// Bytes per row when the caller does not choose a width.
pub const DEFAULT_ROW_WIDTH: usize = 16;

const PLACEHOLDER: char = '.';

/// One rendered row: address, raw bytes, printable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexRow {
    pub address: u64,
    /// Row-width bytes, shorter only on the final row.
    pub raw: Vec<u8>,
    pub printable: String,
}

/// Map bytes to their printable ASCII form, `.` for everything else.
pub fn printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if (0x20..=0x7e).contains(&b) {
                b as char
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// Lazily render `source[start..end)` as fixed-width rows.
///
/// Pure function of its inputs: calling it again with the same range
/// yields an identical sequence. `end` is clamped to the source length
/// and an empty range produces no rows.
pub fn rows(
    source: &ByteSource,
    start: u64,
    end: u64,
    row_width: usize,
) -> impl Iterator<Item = HexRow> + '_ {
    let end = end.min(source.len());
    // A zero width would never advance.
    let width = row_width.max(1);

    let mut address = start;
    std::iter::from_fn(move || {
        if address >= end {
            return None;
        }
        let remaining = (end - address) as usize;
        let raw = source.read(address, remaining.min(width)).to_vec();
        let row = HexRow {
            address,
            printable: printable(&raw),
            raw,
        };
        address = address.saturating_add(width as u64);
        Some(row)
    })
}

/// Render the whole source with the default row width.
pub fn rows_default(source: &ByteSource) -> impl Iterator<Item = HexRow> + '_ {
    rows(source, 0, source.len(), DEFAULT_ROW_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_of_len(len: usize) -> ByteSource {
        ByteSource::from_bytes((0..len).map(|i| i as u8).collect())
    }

    #[test]
    fn test_row_count_and_final_row_length() {
        // 35 bytes at width 16: ceil(35/16) = 3 rows, last row 35 % 16 = 3.
        let source = source_of_len(35);
        let rows: Vec<_> = rows_default(&source).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].raw.len(), 16);
        assert_eq!(rows[1].raw.len(), 16);
        assert_eq!(rows[2].raw.len(), 3);
    }

    #[test]
    fn test_exact_multiple_keeps_full_final_row() {
        let source = source_of_len(32);
        let rows: Vec<_> = rows_default(&source).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].raw.len(), 16);
    }

    #[test]
    fn test_empty_source_has_no_rows() {
        let source = source_of_len(0);
        assert_eq!(rows_default(&source).count(), 0);
    }

    #[test]
    fn test_addresses_ascend_by_row_width() {
        let source = source_of_len(40);
        let addresses: Vec<u64> = rows(&source, 0, 40, 8).map(|r| r.address).collect();
        assert_eq!(addresses, vec![0, 8, 16, 24, 32]);
    }

    #[test]
    fn test_start_offsets_addresses() {
        let source = source_of_len(64);
        let rows: Vec<_> = rows(&source, 16, 40, 16).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].address, 16);
        assert_eq!(rows[0].raw, (16..32).map(|i| i as u8).collect::<Vec<_>>());
        assert_eq!(rows[1].address, 32);
        assert_eq!(rows[1].raw.len(), 8);
    }

    #[test]
    fn test_end_clamped_to_source_length() {
        let source = source_of_len(10);
        let rows: Vec<_> = rows(&source, 0, 1000, 16).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw.len(), 10);
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let source = source_of_len(50);
        let first: Vec<_> = rows_default(&source).collect();
        let second: Vec<_> = rows_default(&source).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_printable_mapping_covers_all_byte_values() {
        for b in 0u8..=255 {
            let rendered = printable(&[b]);
            if (0x20..=0x7e).contains(&b) {
                assert_eq!(rendered, (b as char).to_string());
            } else {
                assert_eq!(rendered, ".");
            }
        }
    }

    #[test]
    fn test_printable_column_matches_raw() {
        let source = ByteSource::from_bytes(b"Hi\x00\x01~\x7f".to_vec());
        let row = rows_default(&source).next().unwrap();
        assert_eq!(row.printable, "Hi..~.");
    }
}
