/*
path.rs

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

//! Path of pentagon arcs.
//!
//! A path is a lazy sequence of [`Turn`] values. Each turn is one 72° arc bending to the left
//! or to the right.
//!
//! The direction of the chord of an arc only depends on the current heading and on the turn.
//! Measured in steps of 36°, the chord of a left arc points at `heading + 1` and the heading
//! moves by two steps. There are five possible chord directions, and a path is closed when
//! it uses each of them the same number of times and ends facing its starting heading.

use serde::Serialize;
use std::fmt;
use std::ops::Neg;

use super::lazy::Seq;

/// One arc of a path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Turn {
    Left = 1,
    Right = -1,
}

impl Neg for Turn {
    type Output = Turn;

    fn neg(self) -> Turn {
        match self {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
        }
    }
}

impl Turn {
    /// Return the turn in the other direction.
    pub fn mirror(self) -> Self {
        -self
    }

    /// Signed value of the turn: +1 for left, -1 for right.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Build a turn from its `L` or `R` letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'L' | 'l' => Some(Turn::Left),
            'R' | 'r' => Some(Turn::Right),
            _ => None,
        }
    }

    /// Letter representing the turn.
    pub fn letter(self) -> char {
        match self {
            Turn::Left => 'L',
            Turn::Right => 'R',
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Lazy sequence of turns.
pub type Path = Seq<Turn>;

/// Return the path as a string of `L` and `R` letters.
pub fn to_letters(path: &Path) -> String {
    path.iter().map(Turn::letter).collect()
}

/// Parse a string of `L` and `R` letters. Return `None` if another character is found.
pub fn from_letters(letters: &str) -> Option<Vec<Turn>> {
    letters.chars().map(Turn::from_letter).collect()
}

/// Number of arcs drawn along each of the five chord directions, and the final heading in
/// steps of 72°.
pub fn chord_counts(turns: &[Turn]) -> ([usize; 5], usize) {
    let mut counts: [usize; 5] = [0; 5];
    let mut heading: i32 = 0;

    for turn in turns {
        let step: i32 = i32::from(turn.value());
        let chord: i32 = (2 * heading + step).rem_euclid(10);
        counts[(chord / 2) as usize] += 1;
        heading = (heading + step).rem_euclid(5);
    }
    (counts, heading as usize)
}

/// Whether the turns bring the pen back to its starting point and heading.
pub fn is_closed(turns: &[Turn]) -> bool {
    let (counts, heading) = chord_counts(turns);
    heading == 0 && counts.iter().all(|c| *c == counts[0])
}

/// Serializable description of a path, for the command-line output.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PathRecord {
    /// Position of the path in the enumeration, starting from 1.
    pub index: usize,

    /// Turns as `L` and `R` letters.
    pub turns: String,

    /// Turns as +1 and -1 values.
    pub moves: Vec<i8>,
}

impl PathRecord {
    /// Create a [`PathRecord`] object.
    pub fn new(index: usize, path: &Path) -> Self {
        Self {
            index,
            turns: to_letters(path),
            moves: path.iter().map(Turn::value).collect(),
        }
    }
}
