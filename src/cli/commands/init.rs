use std::{fs, path::Path};

use anyhow::{Ok, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_options_json};

/// Write a default `.i18njsrc.json` into `dir`, refusing to overwrite one.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::new(CommandSummary::Init(InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        })));
    }

    fs::write(&config_path, default_options_json()? + "\n")?;

    Ok(CommandResult::new(CommandSummary::Init(InitSummary {
        created: true,
        error: None,
    })))
}
