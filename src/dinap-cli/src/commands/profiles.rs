//! Profiles command handler

use anyhow::Result;

use dinap::profile;

use crate::config::Config;
use crate::file_utils;

/// List every profile under the save root with its save files.
pub fn handle(config: &Config) -> Result<()> {
    let save_root = config.save_dir()?;
    let profiles = profile::list_profiles(save_root)?;

    if profiles.is_empty() {
        println!("No save profiles found under {}", save_root.display());
        return Ok(());
    }

    for profile in &profiles {
        println!("{}", profile.name);
        let saves = file_utils::collect_save_files(&profile.path)?;
        if saves.is_empty() {
            println!("  (no save files)");
            continue;
        }
        for save in saves {
            let shown = save.strip_prefix(&profile.path).unwrap_or(&save);
            println!("  {}", shown.display());
        }
    }

    Ok(())
}
