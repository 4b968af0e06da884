/*
config.rs

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

//! Build-time constants.
//!
//! `PENTAWALK_LOCALEDIR` can be set at build time to point gettext to the installed
//! translations.

pub const APPLICATION_ID: &str = "io.github.herve4m.Pentawalk";
pub const APPLICATION_NAME: &str = "Pentawalk";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GETTEXT_PACKAGE: &str = "pentawalk";
pub const LOCALEDIR: &str = match option_env!("PENTAWALK_LOCALEDIR") {
    Some(dir) => dir,
    None => "/usr/share/locale",
};

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (C) 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);
