/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Pentawalk opens its window and animates the closed paths of 30 arcs.
//! Some options change the animation, and others print information about the paths without
//! opening the window.
//!
//! # Examples
//!
//! Count the closed paths of 30 arcs:
//!
//! ```
//! $ pentawalk --count
//! 1590624
//! ```
//!
//! List the first paths of 10 arcs:
//!
//! ```
//! $ pentawalk -s 10 -l 3
//! RLLLLLRRRR
//! RRLLLLLRRR
//! RRRLLLLLRR
//! ```
//!
//! Same list in JSON format:
//!
//! ```
//! $ pentawalk -s 5 -l 1 --json
//! [
//!   {
//!     "index": 1,
//!     "turns": "RRRRR",
//!     "moves": [
//!       -1,
//!       -1,
//!       -1,
//!       -1,
//!       -1
//!     ]
//!   }
//! ]
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use gtk::glib;

use crate::config::COPYRIGHT_NOTICE;
use crate::generator::enumerator::PathEnumerator;
use crate::generator::path::{self, PathRecord};
use crate::settings::{Settings, SettingsFile};

/// Animate the closed paths made of pentagon arcs.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of arcs in each path (a positive multiple of 5)
    #[arg(short, long, value_name = "N")]
    segments: Option<u32>,

    /// Number of display frames between two paths
    #[arg(short, long, value_name = "N")]
    interval: Option<u32>,

    /// Start over after the last path
    #[arg(long = "loop", default_value_t = false)]
    loop_paths: bool,

    /// Print the number of closed paths and exit
    #[arg(short, long, default_value_t = false)]
    count: bool,

    /// Print the first N closed paths and exit
    #[arg(short, long, value_name = "N")]
    list: Option<usize>,

    /// Print the listed paths in JSON format
    #[arg(long, default_value_t = false, requires = "list")]
    json: bool,

    /// Check whether a path, given as L and R letters, is closed
    #[arg(long, value_name = "PATH")]
    check: Option<String>,

    /// Read the settings from this JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// What to do once the command line is processed.
#[derive(Debug, PartialEq)]
pub enum Launch {
    /// Exit with the given status without opening the window.
    Exit(u8),

    /// Open the window and animate the paths.
    Animate(Settings),
}

/// Parse and process command-line options.
pub fn parse() -> Launch {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    run(&args, glib::user_config_dir(), &mut io::stdout())
}

/// Process the options. `config_dir` is the directory where the default settings file is
/// searched.
fn run(args: &Args, config_dir: PathBuf, out: &mut impl Write) -> Launch {
    let settings: Settings = match load_settings(args, config_dir) {
        Ok(s) => s,
        Err(error) => {
            eprintln!("Error: {error}");
            return Launch::Exit(1);
        }
    };
    debug!("Settings: {settings:?}");

    if let Some(letters) = &args.check {
        return check(letters, out);
    }

    let enumerator: PathEnumerator = match PathEnumerator::new(settings.segments) {
        Ok(e) => e,
        Err(error) => {
            eprintln!("Error: {error}");
            return Launch::Exit(1);
        }
    };

    if !args.count && args.list.is_none() {
        return Launch::Animate(settings);
    }

    match print_paths(args, &enumerator, out) {
        Ok(()) => Launch::Exit(0),
        Err(error) => {
            eprintln!("Error: {error}");
            Launch::Exit(1)
        }
    }
}

/// Read the settings file and apply the command-line options on top of it.
///
/// A missing default settings file is not an error, but a missing file given with `--config`
/// is.
fn load_settings(args: &Args, config_dir: PathBuf) -> Result<Settings, Box<dyn Error>> {
    let file: SettingsFile = match &args.config {
        Some(path) => SettingsFile::from_path(path.clone()),
        None => SettingsFile::new(config_dir),
    };

    let mut settings: Settings = match file.get_settings() {
        Ok(Some(s)) => s,
        Ok(None) if args.config.is_some() => {
            return Err(format!("{}: file not found", file.path().display()).into());
        }
        Ok(None) => Settings::default(),
        Err(error) => return Err(format!("{}: {error}", file.path().display()).into()),
    };

    if let Some(segments) = args.segments {
        settings.segments = segments;
    }
    if let Some(interval) = args.interval {
        settings.interval = interval;
    }
    if args.loop_paths {
        settings.loop_paths = true;
    }
    Ok(settings)
}

/// Print the number of paths, the first paths, or both.
fn print_paths(
    args: &Args,
    enumerator: &PathEnumerator,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    if args.count {
        writeln!(out, "{}", enumerator.count())?;
    }

    if let Some(n) = args.list {
        let records: Vec<PathRecord> = enumerator
            .paths()
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, p)| PathRecord::new(i + 1, &p))
            .collect();
        if args.json {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        } else {
            for record in &records {
                writeln!(out, "{}", record.turns)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Print whether the path is closed. Exit with 0 if it is, 1 otherwise.
fn check(letters: &str, out: &mut impl Write) -> Launch {
    let Some(turns) = path::from_letters(letters) else {
        eprintln!("Error: a path must only contain L and R letters: {letters}");
        return Launch::Exit(2);
    };

    let (counts, heading) = path::chord_counts(&turns);
    let closed: bool = path::is_closed(&turns);
    let status = writeln!(
        out,
        "{} arcs, chords per direction {counts:?}, final heading {}°: {}",
        turns.len(),
        heading * 72,
        if closed { "closed" } else { "open" }
    );
    match status {
        Ok(()) if closed => Launch::Exit(0),
        Ok(()) => Launch::Exit(1),
        Err(error) => {
            eprintln!("Error: {error}");
            Launch::Exit(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(argv: &[&str]) -> Args {
        let mut full: Vec<&str> = vec!["pentawalk"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    /// Configuration directory with no settings file.
    fn no_config() -> PathBuf {
        PathBuf::from("/nonexistent")
    }

    fn run_with_output(argv: &[&str]) -> (Launch, String) {
        let mut out: Vec<u8> = Vec::new();
        let launch: Launch = run(&args(argv), no_config(), &mut out);
        (launch, String::from_utf8(out).unwrap())
    }

    fn write_config(name: &str, content: &str) -> PathBuf {
        let mut file: PathBuf = env::temp_dir();
        file.push(format!("pentawalk-cli-{}-{name}.json", std::process::id()));
        fs::write(&file, content).unwrap();
        file
    }

    #[test]
    fn defaults_animate() {
        let (launch, output) = run_with_output(&[]);
        assert_eq!(launch, Launch::Animate(Settings::default()));
        assert!(output.is_empty());
    }

    #[test]
    fn options_override_defaults() {
        let (launch, _) = run_with_output(&["-s", "15", "--interval", "4", "--loop"]);
        assert_eq!(
            launch,
            Launch::Animate(Settings {
                segments: 15,
                interval: 4,
                loop_paths: true
            })
        );
    }

    #[test]
    fn options_override_the_settings_file() {
        let file = write_config("override", r#"{"segments": 20, "interval": 5}"#);
        let path: &str = file.to_str().unwrap();

        let (launch, _) = run_with_output(&["--config", path]);
        assert_eq!(
            launch,
            Launch::Animate(Settings {
                segments: 20,
                interval: 5,
                loop_paths: false
            })
        );

        let (launch, _) = run_with_output(&["--config", path, "-s", "10"]);
        assert_eq!(
            launch,
            Launch::Animate(Settings {
                segments: 10,
                interval: 5,
                loop_paths: false
            })
        );
    }

    #[test]
    fn default_settings_file() {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("pentawalk-cli-{}-default", std::process::id()));
        fs::create_dir_all(dir.join("pentawalk")).unwrap();
        fs::write(
            dir.join("pentawalk").join("settings.json"),
            r#"{"loop_paths": true}"#,
        )
        .unwrap();

        let launch: Launch = run(&args(&[]), dir, &mut Vec::<u8>::new());
        assert_eq!(
            launch,
            Launch::Animate(Settings {
                loop_paths: true,
                ..Settings::default()
            })
        );
    }

    #[test]
    fn settings_file_errors() {
        let (launch, _) = run_with_output(&["--config", "/nonexistent/settings.json"]);
        assert_eq!(launch, Launch::Exit(1));

        let file = write_config("malformed", "[1, 2");
        let (launch, _) = run_with_output(&["--config", file.to_str().unwrap()]);
        assert_eq!(launch, Launch::Exit(1));
    }

    #[test]
    fn invalid_segments() {
        assert_eq!(run_with_output(&["-s", "12"]).0, Launch::Exit(1));
        assert_eq!(run_with_output(&["-s", "0", "--count"]).0, Launch::Exit(1));
        assert_eq!(run_with_output(&["-s", "80"]).0, Launch::Exit(1));
        assert!(Args::try_parse_from(["pentawalk", "-s", "-5"]).is_err());
    }

    #[test]
    fn count() {
        let (launch, output) = run_with_output(&["--count"]);
        assert_eq!(launch, Launch::Exit(0));
        assert_eq!(output, "1590624\n");

        let (_, output) = run_with_output(&["-c", "-s", "15"]);
        assert_eq!(output, "188\n");
    }

    #[test]
    fn list() {
        let (launch, output) = run_with_output(&["-s", "10", "-l", "3"]);
        assert_eq!(launch, Launch::Exit(0));
        assert_eq!(output, "RLLLLLRRRR\nRRLLLLLRRR\nRRRLLLLLRR\n");

        let (_, output) = run_with_output(&["-s", "5", "--list", "10"]);
        assert_eq!(output, "RRRRR\nLLLLL\n");
    }

    #[test]
    fn list_json() {
        let (launch, output) = run_with_output(&["-s", "5", "-l", "2", "--json"]);
        assert_eq!(launch, Launch::Exit(0));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"index": 1, "turns": "RRRRR", "moves": [-1, -1, -1, -1, -1]},
                {"index": 2, "turns": "LLLLL", "moves": [1, 1, 1, 1, 1]},
            ])
        );
    }

    #[test]
    fn json_requires_list() {
        assert!(Args::try_parse_from(["pentawalk", "--json"]).is_err());
    }

    #[test]
    fn check_paths() {
        let (launch, output) = run_with_output(&["--check", "LLLLL"]);
        assert_eq!(launch, Launch::Exit(0));
        assert!(output.ends_with("closed\n"));

        let (launch, output) = run_with_output(&["--check", "LRLR"]);
        assert_eq!(launch, Launch::Exit(1));
        assert!(output.ends_with("open\n"));

        assert_eq!(run_with_output(&["--check", "LXR"]).0, Launch::Exit(2));
    }
}
