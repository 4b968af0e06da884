/*
application.rs

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

use gettextrs::gettext;
use log::debug;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::WeakRef;
use gtk::{gio, glib};

use crate::config;
use crate::settings::Settings;
use crate::widgets::window::PentawalkWindow;

mod imp {
    use super::*;
    use std::cell::OnceCell;

    #[derive(Debug, Default)]
    pub struct PentawalkApplication {
        /// The [`PentawalkWindow`] object.
        pub window: OnceCell<WeakRef<PentawalkWindow>>,

        /// Settings from the command line and the settings file.
        pub settings: OnceCell<Settings>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PentawalkApplication {
        const NAME: &'static str = "PentawalkApplication";
        type Type = super::PentawalkApplication;
        type ParentType = adw::Application;
    }

    impl ApplicationImpl for PentawalkApplication {
        // We connect to the activate callback to create a window when the application
        // has been launched. Additionally, this callback notifies us when the user
        // tries to launch a "second instance" of the application. When they try
        // to do that, we'll just present any existing window.
        fn activate(&self) {
            let application = self.obj();
            if let Some(window) = application.get_main_window() {
                // Ask the window manager/compositor to present the window
                window.present();
            }
        }

        // Entry point for GApplication
        fn startup(&self) {
            self.parent_startup();

            let application = self.obj();
            application.setup_gactions();

            let window: PentawalkWindow = PentawalkWindow::new(&*application);
            self.window
                .set(window.downgrade())
                .expect("Failed to initialize the application window");

            let settings: Settings = self.settings.get().cloned().unwrap_or_default();
            debug!("Starting with {settings:?}");
            window.start(&settings);

            application.set_accels_for_action("app.quit", &["<Primary>q"]);
            application.set_accels_for_action("win.toggle", &["space"]);
            application.set_accels_for_action("win.restart", &["<Primary>r"]);
        }
    }

    impl ObjectImpl for PentawalkApplication {}
    impl GtkApplicationImpl for PentawalkApplication {}
    impl AdwApplicationImpl for PentawalkApplication {}
}

glib::wrapper! {
    pub struct PentawalkApplication(ObjectSubclass<imp::PentawalkApplication>)
        @extends gio::Application, gtk::Application, adw::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl PentawalkApplication {
    /// Create an [`PentawalkApplication`] object.
    pub fn new(settings: Settings) -> Self {
        let app: Self = glib::Object::builder()
            .property("application-id", config::APPLICATION_ID)
            .property("flags", gio::ApplicationFlags::NON_UNIQUE)
            .build();
        app.imp()
            .settings
            .set(settings)
            .expect("Cannot store the settings into the object");
        app
    }

    fn setup_gactions(&self) {
        let actions = [
            gio::ActionEntryBuilder::new("about")
                .activate(|app: &Self, _, _| app.show_about())
                .build(),
            gio::ActionEntryBuilder::new("quit")
                .activate(|app: &Self, _, _| app.quit())
                .build(),
        ];

        self.add_action_entries(actions);
    }

    fn get_main_window(&self) -> Option<PentawalkWindow> {
        self.imp().window.get().and_then(|w| w.upgrade())
    }

    fn show_about(&self) {
        let window: Option<gtk::Window> = self.active_window();
        let about: adw::AboutDialog = adw::AboutDialog::builder()
            .application_name(config::APPLICATION_NAME)
            .application_icon(config::APPLICATION_ID)
            .developer_name("Hervé Quatremain")
            .version(config::VERSION)
            .developers(vec!["Hervé Quatremain"])
            .comments(gettext(
                "Animation of the closed paths made of 72° arcs, from Project Euler problem 208",
            ))
            // Translators: Replace "translator-credits" with your name/username, and optionally
            // an email or URL.
            .translator_credits(gettext("translator-credits"))
            .copyright("© 2025 Hervé Quatremain")
            .license_type(gtk::License::Gpl30)
            .build();
        about.add_credit_section(
            Some(&gettext("Inspiration")),
            &["Project Euler problem 208 https://projecteuler.net/problem=208"],
        );
        about.present(window.as_ref());
    }
}
