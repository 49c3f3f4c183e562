//! Show configuration.
//!
//! Shows are configured statically in a YAML file: one entry per show with
//! its id, display name, and the record base it lives in. The CLI validates
//! the requested show id against this list before touching any table.
//!
//! # Format
//!
//! ```yaml
//! - id: hamlet
//!   name: Hamlet
//!   base-id: appXXXXXXXXXXXXXX
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A configured show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    /// Short identifier used on the command line.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Record base holding this show's tables.
    #[serde(rename = "base-id")]
    pub base_id: String,
}

/// Loads the show list from a YAML file.
pub fn load_shows(path: &Path) -> Result<Vec<Show>> {
    let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Finds a show by id.
pub fn find_show<'a>(shows: &'a [Show], id: &str) -> Result<&'a Show> {
    shows
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| Error::UnknownShow(id.to_string()))
}
