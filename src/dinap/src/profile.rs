//! Save profile discovery and selection.
//!
//! A profile is an immediate subdirectory of the save root. Listing is
//! read-only and never changes the process working directory; callers
//! get absolute paths to thread through the rest of the pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("no save profiles found under {0}")]
    NoProfilesFound(PathBuf),

    #[error("multiple save profiles found; a selection is required")]
    SelectionRequired { candidates: Vec<SaveProfile> },

    #[error("no save profile matches selection '{0}'")]
    InvalidSelection(String),

    #[error("failed to list save profiles: {0}")]
    Io(#[from] io::Error),
}

/// One user profile directory under the save root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveProfile {
    /// Directory name, used as the selection token.
    pub name: String,
    pub path: PathBuf,
}

/// List the profile directories under `save_root`, sorted by name.
pub fn list_profiles(save_root: &Path) -> Result<Vec<SaveProfile>, ProfileError> {
    let root = save_root.canonicalize()?;

    let mut profiles = Vec::new();
    for entry in fs::read_dir(&root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        profiles.push(SaveProfile { name, path });
    }

    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}

/// Resolve exactly one profile under `save_root`.
///
/// A lone profile is selected automatically. With several profiles a
/// selection token is required: `None` surfaces the candidates via
/// [`ProfileError::SelectionRequired`] so the caller can present them
/// and retry, and a token matching no directory name fails with
/// [`ProfileError::InvalidSelection`]. There is no silent default.
pub fn resolve(save_root: &Path, selection: Option<&str>) -> Result<SaveProfile, ProfileError> {
    let mut profiles = list_profiles(save_root)?;

    match profiles.len() {
        0 => Err(ProfileError::NoProfilesFound(save_root.to_path_buf())),
        1 => Ok(profiles.remove(0)),
        _ => {
            debug!(
                "multiple save profiles found: {:?}",
                profiles.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
            );
            let token = match selection {
                Some(token) => token.trim(),
                None => return Err(ProfileError::SelectionRequired { candidates: profiles }),
            };
            profiles
                .iter()
                .position(|p| p.name == token)
                .map(|i| profiles.swap_remove(i))
                .ok_or_else(|| ProfileError::InvalidSelection(token.to_string()))
        }
    }
}
