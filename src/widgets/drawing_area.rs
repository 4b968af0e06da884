/*
drawing_area.rs

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

//! Animate the paths in the drawing area.
//!
//! The animation is driven by the frame clock of the widget: a tick callback runs once per
//! display refresh and moves the [`Animator`] object forward.
//! Clicking the drawing area pauses or resumes the animation.

use log::debug;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::{Properties, clone};
use gtk::{gdk, glib};

use crate::animator::Animator;
use crate::draw;
use crate::generator::path::Path;

mod imp {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default, Properties)]
    #[properties(wrapper_type = super::PentawalkDrawingArea)]
    pub struct PentawalkDrawingArea {
        pub animator: RefCell<Option<Animator>>,
        pub draw: RefCell<draw::Draw>,

        /// Registered tick callback. None while the animation is paused or finished.
        pub tick_id: RefCell<Option<gtk::TickCallbackId>>,

        // Properties
        #[property(get)]
        pub index: Cell<u64>,
        #[property(get)]
        pub total: Cell<u64>,
        #[property(get)]
        pub segments: Cell<u32>,
        #[property(get)]
        pub running: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for PentawalkDrawingArea {
        const NAME: &'static str = "PentawalkDrawingArea";
        type Type = super::PentawalkDrawingArea;
        type ParentType = gtk::DrawingArea;
    }

    #[glib::derived_properties]
    impl ObjectImpl for PentawalkDrawingArea {
        fn constructed(&self) {
            self.parent_constructed();

            debug!("In constructed()");
            let style_manager: adw::StyleManager = adw::StyleManager::default();

            self.draw.borrow_mut().set_dark(style_manager.is_dark());
            style_manager.connect_dark_notify(clone!(
                #[weak(rename_to = mself)]
                self,
                move |style_manager| mself.obj().dark(style_manager)
            ));

            self.obj().set_draw_func(clone!(
                #[weak(rename_to = mself)]
                self,
                move |da, ctx, w, h| mself.obj().draw(da, ctx, w, h)
            ));

            let gesture: gtk::GestureClick = gtk::GestureClick::new();
            gesture.connect_released(clone!(
                #[weak(rename_to = mself)]
                self,
                move |_, _, _, _| {
                    mself.obj().toggle();
                }
            ));
            self.obj().add_controller(gesture);
        }

        fn dispose(&self) {
            if let Some(id) = self.tick_id.take() {
                id.remove();
            }
            self.animator.take();
        }
    }
    impl WidgetImpl for PentawalkDrawingArea {}
    impl DrawingAreaImpl for PentawalkDrawingArea {}
}

glib::wrapper! {
    pub struct PentawalkDrawingArea(ObjectSubclass<imp::PentawalkDrawingArea>)
        @extends gtk::Widget, gtk::DrawingArea,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Default for PentawalkDrawingArea {
    fn default() -> Self {
        Self::new()
    }
}

impl PentawalkDrawingArea {
    /// Create a [`PentawalkDrawingArea`] object.
    pub fn new() -> Self {
        glib::Object::builder()
            .property("hexpand", true)
            .property("vexpand", true)
            .build()
    }

    /// Start animating the paths.
    pub fn start(&self, animator: Animator) {
        let imp: &imp::PentawalkDrawingArea = self.imp();

        debug!("Starting the animation: {animator:?}");
        imp.animator.replace(Some(animator));
        self.sync_properties();
        self.queue_draw();
        self.start_ticking();
    }

    /// Pause or resume the animation. Return `true` if the animation is now running.
    pub fn toggle(&self) -> bool {
        let imp: &imp::PentawalkDrawingArea = self.imp();
        let running: bool = match imp.animator.borrow_mut().as_mut() {
            Some(animator) => animator.toggle(),
            None => return false,
        };

        if running {
            self.start_ticking();
        } else {
            self.stop_ticking();
        }
        self.sync_properties();
        running
    }

    /// Go back to the first path and run the animation.
    pub fn restart(&self) {
        let imp: &imp::PentawalkDrawingArea = self.imp();
        match imp.animator.borrow_mut().as_mut() {
            Some(animator) => animator.restart(),
            None => return,
        }

        self.sync_properties();
        self.queue_draw();
        self.start_ticking();
    }

    fn start_ticking(&self) {
        let imp: &imp::PentawalkDrawingArea = self.imp();

        if imp.tick_id.borrow().is_some() {
            return;
        }
        debug!("Adding the tick callback");
        let id: gtk::TickCallbackId =
            self.add_tick_callback(|da: &Self, _clock: &gdk::FrameClock| da.tick());
        imp.tick_id.replace(Some(id));
    }

    fn stop_ticking(&self) {
        if let Some(id) = self.imp().tick_id.take() {
            debug!("Removing the tick callback");
            id.remove();
        }
    }

    /// Move the animation forward by one frame.
    fn tick(&self) -> glib::ControlFlow {
        let imp: &imp::PentawalkDrawingArea = self.imp();
        let (advanced, running): (bool, bool) = match imp.animator.borrow_mut().as_mut() {
            Some(animator) => (animator.tick().is_some(), animator.is_running()),
            None => (false, false),
        };
        if advanced {
            self.queue_draw();
        }
        if properties_changed(advanced, imp.running.get(), running) {
            self.sync_properties();
        }

        if running {
            glib::ControlFlow::Continue
        } else {
            debug!("Stopping the tick callback");
            // The callback is removed by returning Break
            imp.tick_id.take();
            glib::ControlFlow::Break
        }
    }

    /// Copy the state of the animator to the object properties.
    fn sync_properties(&self) {
        let imp: &imp::PentawalkDrawingArea = self.imp();
        let (index, total, segments, running) = match imp.animator.borrow().as_ref() {
            Some(a) => (a.index(), a.total(), a.segments(), a.is_running()),
            None => (0, 0, 0, false),
        };

        if imp.total.replace(total) != total {
            self.notify_total();
        }
        if imp.segments.replace(segments) != segments {
            self.notify_segments();
        }
        if imp.index.replace(index) != index {
            self.notify_index();
        }
        if imp.running.replace(running) != running {
            self.notify_running();
        }
    }

    fn dark(&self, style_manager: &adw::StyleManager) {
        self.imp()
            .draw
            .borrow_mut()
            .set_dark(style_manager.is_dark());
        self.queue_draw();
    }

    fn draw(&self, _da: &gtk::DrawingArea, ctx: &gtk::cairo::Context, w: i32, h: i32) {
        let imp: &imp::PentawalkDrawingArea = self.imp();
        let animator = imp.animator.borrow();
        let path: Option<&Path> = animator.as_ref().and_then(|a| a.current());

        if let Err(error) = imp.draw.borrow().frame(ctx, w as f64, h as f64, path) {
            debug!("Cannot draw the path: {error}");
        }
    }
}

/// Whether a tick changed the state exposed by the properties.
fn properties_changed(advanced: bool, was_running: bool, running: bool) -> bool {
    advanced || was_running != running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::EndBehaviour;
    use crate::generator::enumerator::PathEnumerator;

    #[test]
    fn properties_change_on_new_paths_and_stop() {
        let mut animator = Animator::new(PathEnumerator::new(10).unwrap(), 2, EndBehaviour::Stop);
        let mut was_running: bool = animator.is_running();
        let mut index: u64 = animator.index();
        let mut changes: usize = 0;

        for _ in 0..100 {
            let advanced: bool = animator.tick().is_some();
            let running: bool = animator.is_running();
            if properties_changed(advanced, was_running, running) {
                changes += 1;
            } else {
                assert_eq!(animator.index(), index);
            }
            was_running = running;
            index = animator.index();
        }

        // One change per path, plus the stop at the end
        assert_eq!(changes, 13);
        assert!(!properties_changed(false, false, false));
        assert!(!properties_changed(false, true, true));
        assert!(properties_changed(false, true, false));
    }
}
