//! Config file handling — the `tokens.toml` a token set is edited in.
//!
//! The file stands in for a saved wizard session: absent means "start
//! from the defaults", present means every named field overrides its
//! default and everything else stays stock. Load and save go through
//! explicit paths so `--config` (and tests) can point anywhere.

use std::fs;
use std::path::Path;

use forge_tokens::TokenSet;

use crate::error::Error;

/// Default config path, relative to the working directory.
pub const DEFAULT_PATH: &str = "tokens.toml";

/// Load a token set from a TOML file.
///
/// A missing file is not an error: the default token set comes back, so
/// a fresh directory exports something sensible immediately.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file exists but cannot be read, or
/// [`Error::Config`] if it is not valid TOML for a token set.
pub fn load(path: &Path) -> Result<TokenSet, Error> {
    if !path.exists() {
        return Ok(TokenSet::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Save a token set as TOML, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the path cannot be written.
pub fn save(tokens: &TokenSet, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = toml::to_string_pretty(tokens)?;
    fs::write(path, content)?;
    Ok(())
}
