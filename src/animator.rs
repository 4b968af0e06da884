/*
animator.rs

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

//! Step through the closed paths at the pace of the display.
//!
//! The [`Animator`] object walks the lazy sequence of paths produced by a
//! [`PathEnumerator`] object.
//! The drawing area calls [`Animator::tick`] once per frame. Every `interval` frames, the
//! animator moves to the next path and returns it so that the caller can draw it.

use log::debug;

use crate::generator::enumerator::PathEnumerator;
use crate::generator::lazy::Seq;
use crate::generator::path::Path;

/// What to do once all the paths have been shown.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum EndBehaviour {
    /// Stop the animation on the last path.
    #[default]
    Stop,

    /// Start over from the first path.
    Loop,
}

/// State of the animation.
#[derive(Debug)]
pub struct Animator {
    /// The enumerator owns the cache the path sequence is built from.
    enumerator: PathEnumerator,

    /// All the paths.
    paths: Seq<Path>,

    /// Paths not shown yet.
    cursor: Seq<Path>,

    /// Last path returned.
    current: Option<Path>,

    running: bool,

    /// Number of ticks between two paths.
    interval: u32,

    /// Ticks left before the next path.
    countdown: u32,

    /// Position of the current path, starting from 1. Zero before the first path.
    index: u64,

    /// Number of paths in the sequence.
    total: u64,

    end: EndBehaviour,
}

impl Animator {
    /// Create an [`Animator`] object. The animation starts in the running state.
    ///
    /// An `interval` of 0 is handled as 1: a new path on every tick.
    pub fn new(enumerator: PathEnumerator, interval: u32, end: EndBehaviour) -> Self {
        let paths: Seq<Path> = enumerator.paths();
        let total: u64 = enumerator.count();
        let interval: u32 = interval.max(1);
        debug!(
            "Animating {total} paths of {} segments, every {interval} ticks",
            enumerator.segments()
        );

        Self {
            enumerator,
            cursor: paths.clone(),
            paths,
            current: None,
            running: true,
            interval,
            countdown: interval,
            index: 0,
            total,
            end,
        }
    }

    /// Return the next path and advance the cursor.
    ///
    /// At the end of the sequence, the animator starts over if its end behaviour is
    /// [`EndBehaviour::Loop`]. Otherwise it stops running and returns `None`.
    pub fn next_path(&mut self) -> Option<Path> {
        if self.cursor.is_empty() {
            if self.end == EndBehaviour::Loop && !self.paths.is_empty() {
                debug!("Last path reached, starting over");
                self.cursor = self.paths.clone();
                self.index = 0;
            } else {
                if self.running {
                    debug!("Last path reached, stopping");
                }
                self.running = false;
                return None;
            }
        }

        let path: Path = self.cursor.first()?.clone();
        self.cursor = self.cursor.rest();
        self.index += 1;
        debug!("Path {} of {}", self.index, self.total);
        self.current = Some(path.clone());
        Some(path)
    }

    /// Count one display frame. Return the next path every `interval` frames while the
    /// animation runs.
    pub fn tick(&mut self) -> Option<Path> {
        if !self.running {
            return None;
        }

        self.countdown -= 1;
        if self.countdown > 0 {
            return None;
        }
        self.countdown = self.interval;
        self.next_path()
    }

    /// Pause or resume the animation. Return `true` if the animation is now running.
    ///
    /// A finished animation cannot be resumed. Use [`Animator::restart`] instead.
    pub fn toggle(&mut self) -> bool {
        if self.is_finished() {
            debug!("No more paths, use restart to start over");
            self.running = false;
            return false;
        }
        self.running = !self.running;
        if self.running {
            debug!("Resuming the animation at path {}", self.index);
        } else {
            debug!("Pausing the animation at path {}", self.index);
        }
        self.running
    }

    /// Go back to the first path and run the animation.
    pub fn restart(&mut self) {
        debug!("Restarting the animation");
        self.cursor = self.paths.clone();
        self.current = None;
        self.index = 0;
        self.countdown = self.interval;
        self.running = true;
    }

    /// Last path returned by [`Animator::next_path`], if any.
    pub fn current(&self) -> Option<&Path> {
        self.current.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Position of the current path, starting from 1.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn segments(&self) -> u32 {
        self.enumerator.segments()
    }

    /// Whether all the paths have been shown and the animation does not loop.
    pub fn is_finished(&self) -> bool {
        self.end == EndBehaviour::Stop && self.cursor.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::path::to_letters;

    fn animator(segments: u32, interval: u32, end: EndBehaviour) -> Animator {
        Animator::new(PathEnumerator::new(segments).unwrap(), interval, end)
    }

    fn letters(path: Option<Path>) -> Option<String> {
        path.map(|p| to_letters(&p))
    }

    #[test]
    fn new_animator() {
        let a = animator(10, 2, EndBehaviour::Stop);
        assert!(a.is_running());
        assert!(!a.is_finished());
        assert_eq!(a.index(), 0);
        assert_eq!(a.total(), 12);
        assert_eq!(a.segments(), 10);
        assert!(a.current().is_none());
    }

    #[test]
    fn next_path_walks_the_sequence() {
        let mut a = animator(5, 1, EndBehaviour::Stop);
        assert_eq!(letters(a.next_path()), Some("RRRRR".to_string()));
        assert_eq!(a.index(), 1);
        assert_eq!(letters(a.next_path()), Some("LLLLL".to_string()));
        assert_eq!(a.index(), 2);
        assert!(a.is_finished());
        assert!(a.is_running());

        assert!(a.next_path().is_none());
        assert!(!a.is_running());
        assert!(a.next_path().is_none());
        assert_eq!(a.index(), 2);
        assert_eq!(a.current().map(to_letters), Some("LLLLL".to_string()));
    }

    #[test]
    fn tick_acts_every_interval() {
        let mut a = animator(10, 3, EndBehaviour::Stop);
        let mut shown: Vec<usize> = Vec::new();
        for frame in 1..=9 {
            if a.tick().is_some() {
                shown.push(frame);
            }
        }
        assert_eq!(shown, vec![3, 6, 9]);
        assert_eq!(a.index(), 3);
    }

    #[test]
    fn zero_interval_acts_on_every_tick() {
        let mut a = animator(5, 0, EndBehaviour::Stop);
        assert!(a.tick().is_some());
        assert!(a.tick().is_some());
        assert!(a.tick().is_none());
        assert!(!a.is_running());
    }

    #[test]
    fn paused_animator_ignores_ticks() {
        let mut a = animator(10, 1, EndBehaviour::Stop);
        assert!(a.tick().is_some());
        assert!(!a.toggle());
        assert!(!a.is_running());
        for _ in 0..10 {
            assert!(a.tick().is_none());
        }
        assert_eq!(a.index(), 1);

        assert!(a.toggle());
        assert!(a.tick().is_some());
        assert_eq!(a.index(), 2);
    }

    #[test]
    fn stops_at_the_end() {
        let mut a = animator(10, 2, EndBehaviour::Stop);
        let shown: usize = (0..100).filter_map(|_| a.tick()).count();
        assert_eq!(shown, 12);
        assert!(a.is_finished());
        assert!(!a.is_running());
        assert!(!a.toggle());
        assert_eq!(a.index(), 12);
    }

    #[test]
    fn loops_at_the_end() {
        let mut a = animator(5, 1, EndBehaviour::Loop);
        let shown: Vec<String> = (0..5).filter_map(|_| letters(a.tick())).collect();
        assert_eq!(shown, vec!["RRRRR", "LLLLL", "RRRRR", "LLLLL", "RRRRR"]);
        assert_eq!(a.index(), 1);
        assert!(a.is_running());
        assert!(!a.is_finished());
    }

    #[test]
    fn restart_rewinds() {
        let mut a = animator(10, 1, EndBehaviour::Stop);
        let first: Option<String> = letters(a.tick());
        while a.tick().is_some() {}
        assert!(a.is_finished());

        a.restart();
        assert!(a.is_running());
        assert!(!a.is_finished());
        assert_eq!(a.index(), 0);
        assert!(a.current().is_none());
        assert_eq!(letters(a.tick()), first);
        assert_eq!(a.index(), 1);
    }

    #[test]
    fn shows_every_thirty_segment_path() {
        let mut a = animator(30, 1, EndBehaviour::Stop);
        assert_eq!(a.total(), 1_590_624);
        let mut shown: u64 = 0;
        while let Some(path) = a.tick() {
            shown += 1;
            if shown.is_multiple_of(100_000) {
                assert_eq!(path.iter().count(), 30);
            }
        }
        assert_eq!(shown, a.total());
        assert_eq!(a.index(), a.total());
        assert!(a.is_finished());
        assert!(!a.is_running());
    }
}
