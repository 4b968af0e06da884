/*
enumerator.rs

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

//! Enumerate the closed paths.
//!
//! The state of the enumeration is a [`State`] tuple giving the number of arcs still to draw
//! along each of the five chord directions, relative to the current heading.
//!
//! From a state `(n1, n2, n3, n4, n5)`:
//!
//! * A left arc consumes `n1`. The rest of the path is the mirror image of a path solving
//!   `(n1 - 1, n5, n4, n3, n2)`.
//! * A right arc consumes `n2`. The rest of the path solves the rotated state
//!   `(n2 - 1, n3, n4, n5, n1)`.
//!
//! When all the counters reach zero, the empty path closes the shape.
//! The left paths come first, and the right branch is only explored when a consumer reaches
//! the end of the left paths.

use log::debug;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use super::combinators::{compose, curry};
use super::lazy::{Seq, Thunk, chain, defer, empty, map, prepend, single};
use super::memo::{Memo, memoize};
use super::path::{Path, Turn};

/// Remaining number of arcs for each chord direction.
pub type State = [u32; 5];

/// Largest number of segments. Beyond that, the number of paths does not fit in a `u64`.
pub const MAX_SEGMENTS: u32 = 75;

/// Type of errors for the segment count.
#[derive(Debug, PartialEq)]
pub enum SegmentsError {
    /// A path needs at least one arc per direction.
    Zero,

    /// The segments must be evenly distributed over the five directions.
    NotMultipleOfFive(u32),

    /// Too many segments.
    TooLarge(u32),
}

impl fmt::Display for SegmentsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SegmentsError::Zero => write!(f, "the number of segments must be positive"),
            SegmentsError::NotMultipleOfFive(n) => {
                write!(f, "the number of segments ({n}) must be a multiple of 5")
            }
            SegmentsError::TooLarge(n) => write!(
                f,
                "the number of segments ({n}) must not be greater than {MAX_SEGMENTS}"
            ),
        }
    }
}

impl Error for SegmentsError {}

/// Memoized solver. Sequences stored in the cache refer back to the solver for their
/// unexplored branches.
struct Solver {
    memo: Memo<State, Seq<Path>>,
}

impl Solver {
    /// Return the lazy sequence of the paths for the given state.
    fn solve(self: &Rc<Self>, state: State) -> Seq<Path> {
        self.memo
            .get_or_insert_with(state, |state| self.branch(state))
    }

    fn branch(self: &Rc<Self>, [n1, n2, n3, n4, n5]: State) -> Seq<Path> {
        if n1 + n2 + n3 + n4 + n5 == 0 {
            return single(empty());
        }

        let left: Seq<Path> = if n1 > 0 {
            let mirror: fn(Turn) -> Turn = Turn::mirror;
            let mirror_path = curry(map::<Turn, Turn, fn(Turn) -> Turn>, mirror);
            let append_left = curry(prepend::<Turn>, Turn::Left);
            map(
                compose(mirror_path, append_left),
                self.solve([n1 - 1, n5, n4, n3, n2]),
            )
        } else {
            empty()
        };

        let right: Option<Thunk<Path>> = if n2 > 0 {
            let solver: Rc<Solver> = Rc::clone(self);
            Some(defer(move || {
                map(
                    curry(prepend::<Turn>, Turn::Left),
                    solver.solve([n2 - 1, n3, n4, n5, n1]),
                )
            }))
        } else {
            None
        };

        chain(left, right)
    }
}

/// Count the paths for the given state without building them.
pub fn count(state: State) -> u64 {
    let count_paths = memoize(|recurse: &dyn Fn(State) -> u64, [n1, n2, n3, n4, n5]: State| {
        if n1 + n2 + n3 + n4 + n5 == 0 {
            return 1;
        }
        let mut total: u64 = 0;
        if n1 > 0 {
            total += recurse([n1 - 1, n5, n4, n3, n2]);
        }
        if n2 > 0 {
            total += recurse([n2 - 1, n3, n4, n5, n1]);
        }
        total
    });
    count_paths(state)
}

/// Enumerator of the closed paths of a given length.
pub struct PathEnumerator {
    solver: Rc<Solver>,
    segments: u32,
}

impl fmt::Debug for PathEnumerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PathEnumerator")
            .field("segments", &self.segments)
            .field("cached_states", &self.cached_states())
            .finish()
    }
}

impl Drop for PathEnumerator {
    // The cached sequences keep a reference to the solver. Emptying the cache breaks these
    // reference cycles.
    fn drop(&mut self) {
        let memo: &Memo<State, Seq<Path>> = &self.solver.memo;
        if memo.is_empty() {
            return;
        }
        debug!(
            "Dropping the enumerator: {} cached states, {} cache hits, {} cache misses",
            memo.len(),
            memo.hits(),
            memo.misses()
        );
        memo.clear();
    }
}

impl PathEnumerator {
    /// Create a [`PathEnumerator`] object for paths of `segments` arcs.
    ///
    /// # Errors
    ///
    /// The number of segments must be a positive multiple of 5, not greater than
    /// [`MAX_SEGMENTS`].
    pub fn new(segments: u32) -> Result<Self, SegmentsError> {
        if segments == 0 {
            return Err(SegmentsError::Zero);
        }
        if !segments.is_multiple_of(5) {
            return Err(SegmentsError::NotMultipleOfFive(segments));
        }
        if segments > MAX_SEGMENTS {
            return Err(SegmentsError::TooLarge(segments));
        }
        Ok(Self {
            solver: Rc::new(Solver { memo: Memo::new() }),
            segments,
        })
    }

    /// Number of arcs in each path.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Starting state: the segments evenly split over the five directions.
    pub fn initial_state(&self) -> State {
        [self.segments / 5; 5]
    }

    /// Lazy sequence of the paths for the given state.
    pub fn solve(&self, state: State) -> Seq<Path> {
        self.solver.solve(state)
    }

    /// Lazy sequence of all the closed paths.
    pub fn paths(&self) -> Seq<Path> {
        self.solve(self.initial_state())
    }

    /// Number of closed paths.
    pub fn count(&self) -> u64 {
        count(self.initial_state())
    }

    /// Number of states computed so far.
    pub fn cached_states(&self) -> usize {
        self.solver.memo.len()
    }
}
