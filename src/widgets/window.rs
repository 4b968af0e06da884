/*
window.rs

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

//! Pentawalk main window.

use formatx::formatx;
use gettextrs::gettext;
use log::debug;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::clone;
use gtk::{gio, glib};

use super::drawing_area::PentawalkDrawingArea;
use crate::animator::Animator;
use crate::generator::enumerator::PathEnumerator;
use crate::settings::Settings;

mod imp {
    use super::*;
    use std::cell::OnceCell;

    #[derive(Debug, Default)]
    pub struct PentawalkWindow {
        pub window_title: OnceCell<adw::WindowTitle>,
        pub play_pause_button: gtk::Button,
        pub restart_button: gtk::Button,
        pub drawing_area: PentawalkDrawingArea,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PentawalkWindow {
        const NAME: &'static str = "PentawalkWindow";
        type Type = super::PentawalkWindow;
        type ParentType = adw::ApplicationWindow;
    }

    impl ObjectImpl for PentawalkWindow {
        fn constructed(&self) {
            self.parent_constructed();

            debug!("In constructed()");
            let obj = self.obj();

            self.play_pause_button
                .set_icon_name("media-playback-pause-symbolic");
            self.play_pause_button.set_tooltip_text(Some(&gettext("Pause")));
            self.play_pause_button.set_action_name(Some("win.toggle"));

            self.restart_button
                .set_icon_name("media-skip-backward-symbolic");
            self.restart_button
                .set_tooltip_text(Some(&gettext("Restart")));
            self.restart_button.set_action_name(Some("win.restart"));

            let menu: gio::Menu = gio::Menu::new();
            menu.append(Some(&gettext("_About Pentawalk")), Some("app.about"));
            menu.append(Some(&gettext("_Quit")), Some("app.quit"));
            let menu_button: gtk::MenuButton = gtk::MenuButton::builder()
                .icon_name("open-menu-symbolic")
                .menu_model(&menu)
                .primary(true)
                .tooltip_text(gettext("Main Menu"))
                .build();

            let window_title: adw::WindowTitle = adw::WindowTitle::new("Pentawalk", "");
            let header_bar: adw::HeaderBar = adw::HeaderBar::new();
            header_bar.set_title_widget(Some(&window_title));
            self.window_title
                .set(window_title)
                .expect("Cannot store the window title into the object");
            header_bar.pack_start(&self.play_pause_button);
            header_bar.pack_start(&self.restart_button);
            header_bar.pack_end(&menu_button);

            let toolbar_view: adw::ToolbarView = adw::ToolbarView::new();
            toolbar_view.add_top_bar(&header_bar);
            toolbar_view.set_content(Some(&self.drawing_area));
            obj.set_content(Some(&toolbar_view));

            self.drawing_area.connect_index_notify(clone!(
                #[weak(rename_to = mself)]
                self,
                move |_| mself.obj().update_subtitle()
            ));
            self.drawing_area.connect_running_notify(clone!(
                #[weak(rename_to = mself)]
                self,
                move |da| mself.obj().update_play_pause(da.running())
            ));

            obj.setup_gactions();
        }
    }

    impl PentawalkWindow {
        pub fn window_title(&self) -> &adw::WindowTitle {
            self.window_title
                .get()
                .expect("Cannot retrieve the window title from the object")
        }
    }

    impl WidgetImpl for PentawalkWindow {}
    impl WindowImpl for PentawalkWindow {}
    impl ApplicationWindowImpl for PentawalkWindow {}
    impl AdwApplicationWindowImpl for PentawalkWindow {}
}

glib::wrapper! {
    pub struct PentawalkWindow(ObjectSubclass<imp::PentawalkWindow>)
        @extends gtk::Widget, gtk::Window, gtk::ApplicationWindow, adw::ApplicationWindow,
        @implements gio::ActionGroup, gio::ActionMap, gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::ShortcutManager, gtk::Root, gtk::Native;
}

impl PentawalkWindow {
    /// Create the window.
    pub fn new<P: IsA<gtk::Application>>(application: &P) -> Self {
        debug!("In new()");
        glib::Object::builder()
            .property("application", application)
            .property("default-width", 640)
            .property("default-height", 640)
            .build()
    }

    /// Start animating the paths described by the settings.
    pub fn start(&self, settings: &Settings) {
        let imp: &imp::PentawalkWindow = self.imp();

        let enumerator: PathEnumerator = match PathEnumerator::new(settings.segments) {
            Ok(e) => e,
            Err(error) => {
                debug!("Cannot start the animation: {error}");
                return;
            }
        };
        imp.window_title().set_title(
            &formatx!(gettext("{segments} Arcs"), segments = enumerator.segments())
                .unwrap_or_else(|_| String::from("Pentawalk")),
        );
        imp.drawing_area.start(Animator::new(
            enumerator,
            settings.interval,
            settings.end_behaviour(),
        ));
        self.update_subtitle();
        self.update_play_pause(imp.drawing_area.running());
    }

    fn setup_gactions(&self) {
        let toggle_action: gio::ActionEntry<Self> = gio::ActionEntry::builder("toggle")
            .activate(|window: &Self, _, _| {
                window.imp().drawing_area.toggle();
            })
            .build();
        let restart_action: gio::ActionEntry<Self> = gio::ActionEntry::builder("restart")
            .activate(|window: &Self, _, _| window.imp().drawing_area.restart())
            .build();
        self.add_action_entries([toggle_action, restart_action]);
    }

    fn update_subtitle(&self) {
        let drawing_area: &PentawalkDrawingArea = &self.imp().drawing_area;
        let subtitle: String = formatx!(
            gettext("Path {index} of {total}"),
            index = drawing_area.index(),
            total = drawing_area.total()
        )
        .unwrap_or_default();
        self.imp().window_title().set_subtitle(&subtitle);
    }

    fn update_play_pause(&self, running: bool) {
        let button: &gtk::Button = &self.imp().play_pause_button;
        if running {
            button.set_icon_name("media-playback-pause-symbolic");
            button.set_tooltip_text(Some(&gettext("Pause")));
        } else {
            button.set_icon_name("media-playback-start-symbolic");
            button.set_tooltip_text(Some(&gettext("Play")));
        }
    }
}
