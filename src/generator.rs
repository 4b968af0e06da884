/*
generator.rs

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

//! Generate the closed paths.
//!
//! A path is a lazy sequence of left and right arcs, represented by a [`path::Path`] object.
//! All the paths of a given length are produced by a [`enumerator::PathEnumerator`] object,
//! also as a lazy sequence: a path is only built when a consumer asks for it.
//!
//! The enumerator relies on small functional building blocks:
//!
//! * [`lazy::Seq`] is a memoized lazy cons-list.
//! * [`memo::Memo`] caches the sequence of each enumeration state.
//! * [`combinators::curry`] and [`combinators::compose`] assemble the path transformations.

pub mod combinators;
pub mod enumerator;
pub mod lazy;
pub mod memo;
pub mod path;
