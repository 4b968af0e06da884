/*
settings.rs

Copyright 2025 Hervé Quatremain

This file is part of Pentawalk.

Pentawalk is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pentawalk is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pentawalk. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Load the animation settings.
//!
//! The settings are read from a JSON file, by default `pentawalk/settings.json` in the user
//! configuration directory (`$XDG_CONFIG_HOME`).
//! All the fields are optional:
//!
//! ```json
//! {
//!     "segments": 30,
//!     "interval": 2,
//!     "loop_paths": false
//! }
//! ```
//!
//! Command-line options take precedence over the values from the file.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animator::EndBehaviour;

/// Default number of arcs in a path.
pub const DEFAULT_SEGMENTS: u32 = 30;

/// Default number of display frames between two paths.
pub const DEFAULT_INTERVAL: u32 = 2;

/// Animation settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Number of arcs in each path. Must be a positive multiple of 5.
    pub segments: u32,

    /// Number of display frames between two paths.
    pub interval: u32,

    /// Whether to start over after the last path.
    pub loop_paths: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            interval: DEFAULT_INTERVAL,
            loop_paths: false,
        }
    }
}

impl Settings {
    /// What the animator does after the last path.
    pub fn end_behaviour(&self) -> EndBehaviour {
        if self.loop_paths {
            EndBehaviour::Loop
        } else {
            EndBehaviour::Stop
        }
    }
}

/// Settings file.
pub struct SettingsFile {
    /// Absolute path to the settings file.
    settings_file: PathBuf,
}

impl SettingsFile {
    /// Create a [`SettingsFile`] object for the default file.
    ///
    /// The provided [`PathBuf`] is the path to the user configuration directory.
    pub fn new(mut config_dir: PathBuf) -> Self {
        config_dir.push("pentawalk");
        config_dir.push("settings.json");
        Self::from_path(config_dir)
    }

    /// Create a [`SettingsFile`] object for the given file.
    pub fn from_path(settings_file: PathBuf) -> Self {
        debug!("Settings file: {settings_file:?}");
        SettingsFile { settings_file }
    }

    pub fn path(&self) -> &Path {
        &self.settings_file
    }

    /// Read the settings from the file.
    ///
    /// Return None if the file does not exist.
    pub fn get_settings(&self) -> Result<Option<Settings>, Box<dyn Error>> {
        let file: File = match File::open(&self.settings_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)?;
        debug!("Settings from file: {settings:?}");
        Ok(Some(settings))
    }
}
