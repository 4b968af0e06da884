/*
main.rs

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

mod animator;
mod application;
mod cli_options;
mod config;
mod draw;
mod generator;
mod settings;
mod widgets;

use self::application::PentawalkApplication;

use cli_options::Launch;
use config::{GETTEXT_PACKAGE, LOCALEDIR};
use gettextrs::{bind_textdomain_codeset, bindtextdomain, textdomain};
use gtk::glib;
use gtk::prelude::*;

fn main() -> glib::ExitCode {
    // Pentawalk does not use the option parsing feature provided by GApplication. Clap is used
    // instead.
    let settings = match cli_options::parse() {
        Launch::Exit(ret) => return glib::ExitCode::from(ret),
        Launch::Animate(settings) => settings,
    };

    // Set up gettext translations
    bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR).expect("Unable to bind the text domain");
    bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8")
        .expect("Unable to set the text domain encoding");
    textdomain(GETTEXT_PACKAGE).expect("Unable to switch to the text domain");

    // Create a new GtkApplication. The application manages our main loop,
    // application windows, integration with the window manager/compositor, and
    // desktop features such as file opening and single-instance applications.
    let app: PentawalkApplication = PentawalkApplication::new(settings);

    // Because the arguments are processed by Clap, pass an empty argument list to the GApplication
    let args: Vec<String> = Vec::new();
    app.run_with_args(&args)
}
