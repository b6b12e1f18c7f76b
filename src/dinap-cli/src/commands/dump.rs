//! Dump command handler
//!
//! Resolves the save file to dump, then prints the decoded resource
//! table (when the format is recognized) followed by the hex view.

use anyhow::{bail, Context, Result};
use log::info;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use dinap::profile::{self, ProfileError, SaveProfile};
use dinap::{decode, detect, hexdump, ByteSource, DecodedField, FormatSchema};

use crate::config::Config;
use crate::file_utils;

pub fn handle(
    config: &Config,
    save: Option<&Path>,
    profile_token: Option<&str>,
    output: Option<&Path>,
    width: usize,
) -> Result<()> {
    if width == 0 {
        bail!("Row width must be at least 1");
    }

    let save_path = match save {
        Some(path) => path.to_path_buf(),
        None => locate_save(config, profile_token)?,
    };

    let source = ByteSource::open(&save_path)
        .with_context(|| format!("Failed to open {}", save_path.display()))?;

    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_dump(&mut io::BufWriter::new(file), &save_path, &source, width)?;
        }
        None => {
            let stdout = io::stdout();
            write_dump(&mut stdout.lock(), &save_path, &source, width)?;
        }
    }

    Ok(())
}

/// Resolve a save file through the profile root in the config.
fn locate_save(config: &Config, profile_token: Option<&str>) -> Result<PathBuf> {
    let save_root = config.save_dir()?;

    let profile = match profile::resolve(save_root, profile_token) {
        Ok(profile) => profile,
        Err(ProfileError::SelectionRequired { candidates }) => {
            prompt_for_profile(save_root, &candidates)?
        }
        Err(e) => return Err(e.into()),
    };

    let saves = file_utils::collect_save_files(&profile.path)?;
    match file_utils::newest_save(saves) {
        Some(path) => {
            info!("dumping {} from profile '{}'", path.display(), profile.name);
            Ok(path)
        }
        None => bail!("No .sav files found in profile '{}'", profile.name),
    }
}

/// Interactive selection, confined to this boundary: list the candidate
/// profiles on stderr and read one name from stdin.
fn prompt_for_profile(save_root: &Path, candidates: &[SaveProfile]) -> Result<SaveProfile> {
    eprintln!("Multiple save profiles found:");
    for profile in candidates {
        eprintln!("  {}", profile.name);
    }
    eprint!("Which profile do you want to dump a save from? ");

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read profile selection")?;

    profile::resolve(save_root, Some(line.trim())).map_err(Into::into)
}

fn write_dump<W: Write>(
    writer: &mut W,
    save_path: &Path,
    source: &ByteSource,
    width: usize,
) -> Result<()> {
    writeln!(writer, "{}  ({} bytes)", save_path.display(), source.len())?;

    match detect(source) {
        Some(schema) => write_resources(writer, schema, &decode(source, schema))?,
        None => writeln!(writer, "Save format: unknown (hex dump only)")?,
    }

    writeln!(writer)?;
    write_hex_rows(writer, source, width)?;
    Ok(())
}

fn write_resources<W: Write>(
    writer: &mut W,
    schema: &FormatSchema,
    fields: &[DecodedField],
) -> Result<()> {
    writeln!(writer, "Save format: {}", schema.version)?;
    writeln!(writer)?;

    let label_width = fields
        .iter()
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0)
        .max("label".len());

    writeln!(
        writer,
        "{:<label_width$}  {:>6}  {:>5}  value",
        "label", "offset", "width"
    )?;
    for field in fields {
        writeln!(
            writer,
            "{:<label_width$}  {:>6}  {:>5}  {}",
            field.label,
            format!("{:#x}", field.offset),
            field.width,
            field.value
        )?;
    }
    Ok(())
}

fn write_hex_rows<W: Write>(writer: &mut W, source: &ByteSource, width: usize) -> Result<()> {
    let hex_column = width * 3 - 1;
    for row in hexdump::rows(source, 0, source.len(), width) {
        let raw: Vec<String> = row.raw.iter().map(|b| format!("{b:02x}")).collect();
        writeln!(
            writer,
            "{:08x}  {:<hex_column$}  |{}|",
            row.address,
            raw.join(" "),
            row.printable
        )?;
    }
    Ok(())
}
