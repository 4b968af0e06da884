/*
lazy.rs

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

//! Lazy cons-list.
//!
//! A [`Seq`] is either empty or a cell holding a head value and a deferred tail.
//! The tail is a closure that runs every time the tail is requested. Nothing is kept in the
//! cell, so a consumer walking a long sequence only holds the cells it has not dropped yet.
//!
//! Cells are reference counted: cloning a [`Seq`] only clones a pointer, and several consumers
//! can share the same sequence.

use std::fmt;
use std::rc::Rc;

/// Deferred computation of a sequence.
pub type Thunk<T> = Rc<dyn Fn() -> Seq<T>>;

/// Lazy sequence.
pub enum Seq<T> {
    /// No further elements.
    Empty,

    /// Head value and deferred tail.
    Cons(Rc<Node<T>>),
}

/// Cons cell.
pub struct Node<T> {
    head: T,
    tail: Box<dyn Fn() -> Seq<T>>,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        match self {
            Seq::Empty => Seq::Empty,
            Seq::Cons(node) => Seq::Cons(Rc::clone(node)),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq::Empty
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    // Only the head is printed: printing more would force the tail.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Seq::Empty => write!(f, "Seq::Empty"),
            Seq::Cons(node) => write!(f, "Seq({:?}, ..)", node.head),
        }
    }
}

impl<T> Seq<T> {
    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        matches!(self, Seq::Empty)
    }

    /// Return a reference to the first element, if any.
    pub fn first(&self) -> Option<&T> {
        match self {
            Seq::Empty => None,
            Seq::Cons(node) => Some(&node.head),
        }
    }

    /// Compute and return the rest of the sequence. The tail of the empty sequence is empty.
    pub fn rest(&self) -> Seq<T> {
        match self {
            Seq::Empty => Seq::Empty,
            Seq::Cons(node) => (node.tail)(),
        }
    }

    /// Iterate over the elements. Each step computes one more tail.
    pub fn iter(&self) -> Iter<T> {
        Iter { seq: self.clone() }
    }
}

#[cfg(test)]
impl<T: Clone> Seq<T> {
    /// Walk the whole sequence and collect its elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

/// Iterator over the elements of a [`Seq`].
pub struct Iter<T> {
    seq: Seq<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let head: T = self.seq.first()?.clone();
        self.seq = self.seq.rest();
        Some(head)
    }
}

/// Return the empty sequence.
pub fn empty<T>() -> Seq<T> {
    Seq::Empty
}

/// Build a sequence from a head and a closure computing the tail.
///
/// The closure runs each time the tail is requested, never before.
pub fn cons<T>(head: T, tail: impl Fn() -> Seq<T> + 'static) -> Seq<T> {
    Seq::Cons(Rc::new(Node {
        head,
        tail: Box::new(tail),
    }))
}

/// Return a closure that always returns a clone of `value`.
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Wrap a closure into a [`Thunk`].
pub fn defer<T>(f: impl Fn() -> Seq<T> + 'static) -> Thunk<T> {
    Rc::new(f)
}

/// Add `head` in front of an already built sequence.
pub fn prepend<T: 'static>(head: T, seq: Seq<T>) -> Seq<T> {
    cons(head, move || seq.clone())
}

/// One-element sequence.
pub fn single<T: 'static>(value: T) -> Seq<T> {
    prepend(value, Seq::Empty)
}

/// Return the first element of the sequence.
///
/// # Panics
///
/// The sequence must not be empty.
pub fn head<T: Clone>(seq: &Seq<T>) -> T {
    seq.first()
        .expect("Cannot take the head of an empty sequence")
        .clone()
}

/// Compute and return the rest of the sequence.
pub fn tail<T>(seq: &Seq<T>) -> Seq<T> {
    seq.rest()
}

/// Apply `f` to each element, lazily.
///
/// Nothing is evaluated beyond the elements the consumer requests, so `map` works on infinite
/// sequences.
pub fn map<T, U, F>(f: F, seq: Seq<T>) -> Seq<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    map_shared(Rc::new(f), seq)
}

fn map_shared<T, U>(f: Rc<dyn Fn(T) -> U>, seq: Seq<T>) -> Seq<U>
where
    T: Clone + 'static,
    U: 'static,
{
    match seq.first() {
        None => Seq::Empty,
        Some(first) => cons(f(first.clone()), move || map_shared(Rc::clone(&f), seq.rest())),
    }
}

/// Walk the whole sequence, calling `f` on each element in order.
///
/// The sequence must be finite.
pub fn consume<T: Clone>(mut f: impl FnMut(T), seq: Seq<T>) {
    for value in seq.iter() {
        f(value);
    }
}

/// Produce the elements of `seq`, then the elements of the sequence computed by `fallback`.
///
/// The fallback is only evaluated when the consumer reaches the end of `seq`.
/// Without fallback, the result ends with `seq`.
pub fn chain<T>(seq: Seq<T>, fallback: Option<Thunk<T>>) -> Seq<T>
where
    T: Clone + 'static,
{
    match seq.first() {
        None => fallback.map_or(Seq::Empty, |thunk| thunk()),
        Some(first) => cons(first.clone(), move || chain(seq.rest(), fallback.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Weak;

    fn naturals(from: u64) -> Seq<u64> {
        cons(from, move || naturals(from + 1))
    }

    fn counted(value: u32, counter: &Rc<Cell<u32>>) -> Seq<u32> {
        let counter = Rc::clone(counter);
        cons(value, move || {
            counter.set(counter.get() + 1);
            single(value + 1)
        })
    }

    #[test]
    fn tail_is_deferred_and_computed_on_demand() {
        let forced = Rc::new(Cell::new(0));
        let seq = counted(1, &forced);
        assert_eq!(forced.get(), 0);

        assert_eq!(head(&tail(&seq)), 2);
        assert_eq!(head(&tail(&seq)), 2);
        assert_eq!(forced.get(), 2);
        assert_eq!(seq.to_vec(), vec![1, 2]);
        assert_eq!(forced.get(), 3);
    }

    #[test]
    fn empty_sequence() {
        let seq: Seq<u8> = empty();
        assert!(seq.is_empty());
        assert!(seq.first().is_none());
        assert!(tail(&seq).is_empty());
        assert_eq!(seq.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "empty sequence")]
    fn head_of_empty_panics() {
        head::<u8>(&empty());
    }

    #[test]
    fn map_on_infinite_sequence() {
        let squares = map(|n: u64| n * n, naturals(1));
        let first: Vec<u64> = squares.iter().take(5).collect();
        assert_eq!(first, vec![1, 4, 9, 16, 25]);
    }

    #[test]
    fn map_does_not_force_unrequested_tails() {
        let forced = Rc::new(Cell::new(0));
        let doubled = map(|n: u32| n * 2, counted(5, &forced));
        assert_eq!(head(&doubled), 10);
        assert_eq!(forced.get(), 0);
        assert_eq!(doubled.to_vec(), vec![10, 12]);
        assert_eq!(forced.get(), 1);
    }

    #[test]
    fn consume_visits_in_order() {
        let mut seen: Vec<char> = Vec::new();
        let seq = prepend('a', prepend('b', single('c')));
        consume(|c| seen.push(c), seq);
        assert_eq!(seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn chain_appends_fallback_after_exhaustion() {
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let seq = chain(
            prepend(1, single(2)),
            Some(defer(move || {
                flag.set(true);
                single(3)
            })),
        );

        assert_eq!(head(&seq), 1);
        assert_eq!(head(&tail(&seq)), 2);
        assert!(!called.get());
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert!(called.get());
    }

    #[test]
    fn chain_of_empty_sequences() {
        let none: Seq<u8> = chain(empty(), None);
        assert!(none.is_empty());

        let only_fallback = chain(empty(), Some(defer(constant(single(7u8)))));
        assert_eq!(only_fallback.to_vec(), vec![7]);

        let without_fallback = chain(single(4u8), None);
        assert_eq!(without_fallback.to_vec(), vec![4]);
    }

    #[test]
    fn walked_cells_are_released() {
        let seq = map(Rc::new, naturals(0));
        let mut cursor = seq.clone();
        let mut seen: Option<Weak<u64>> = None;
        for step in 0..100_000 {
            if step == 500 {
                seen = Some(Rc::downgrade(cursor.first().unwrap()));
            }
            cursor = tail(&cursor);
        }

        // The root is still alive, but it does not keep the walked cells.
        assert_eq!(**seq.first().unwrap(), 0);
        assert_eq!(**cursor.first().unwrap(), 100_000);
        assert!(seen.unwrap().upgrade().is_none());
    }
}
