/*
memo.rs

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

//! Memoization cache.
//!
//! Results are stored in a single [`HashMap`] keyed by the complete argument tuple.
//! Entries are never evicted.

use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Cache of computed values.
#[derive(Debug)]
pub struct Memo<K, V> {
    cache: RefCell<HashMap<K, V>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + Copy + Debug,
    V: Clone,
{
    /// Create an empty [`Memo`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or compute it with `compute` and store it.
    ///
    /// The cache is not borrowed while `compute` runs, so `compute` can query the cache for
    /// other keys.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce(K) -> V) -> V {
        if let Some(value) = self.cache.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return value.clone();
        }

        self.misses.set(self.misses.get() + 1);
        debug!("Cache miss for {key:?}");
        let value: V = compute(key);
        self.cache
            .borrow_mut()
            .entry(key)
            .or_insert(value)
            .clone()
    }

    /// Evaluate `f` for `key` through the cache. `f` receives a function to use for its
    /// recursive calls.
    fn call<F>(&self, f: &F, key: K) -> V
    where
        F: Fn(&dyn Fn(K) -> V, K) -> V,
    {
        self.get_or_insert_with(key, |key| f(&|k| self.call(f, k), key))
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Number of computed values.
    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    /// Remove all the stored values.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

/// Wrap `f` so that each distinct argument is computed once.
///
/// `f` receives the memoized function as its first parameter and must use it for recursive
/// calls, so that sub-results also go through the cache.
pub fn memoize<K, V, F>(f: F) -> impl Fn(K) -> V
where
    K: Eq + Hash + Copy + Debug,
    V: Clone,
    F: Fn(&dyn Fn(K) -> V, K) -> V,
{
    let memo: Memo<K, V> = Memo::new();
    move |key| memo.call(&f, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn computes_each_key_once() {
        let memo: Memo<(u8, u8), u32> = Memo::new();
        let calls = Cell::new(0);
        let compute = |(a, b): (u8, u8)| {
            calls.set(calls.get() + 1);
            u32::from(a) * 100 + u32::from(b)
        };

        assert_eq!(memo.get_or_insert_with((1, 2), compute), 102);
        assert_eq!(memo.get_or_insert_with((1, 2), compute), 102);
        assert_eq!(memo.get_or_insert_with((2, 1), compute), 201);
        assert_eq!(calls.get(), 2);
        assert_eq!(memo.len(), 2);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 2);

        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    fn recursive_function() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let fibonacci = memoize(move |fib: &dyn Fn(u64) -> u64, n: u64| {
            counter.set(counter.get() + 1);
            if n < 2 { n } else { fib(n - 1) + fib(n - 2) }
        });

        assert_eq!(fibonacci(90), 2_880_067_194_370_816_120);
        assert_eq!(calls.get(), 91);
        assert_eq!(fibonacci(50), 12_586_269_025);
        assert_eq!(calls.get(), 91);
    }

    #[test]
    fn keys_are_compared_by_value() {
        let memo: Memo<[u32; 5], usize> = Memo::new();
        let key = [1, 0, 2, 0, 3];
        memo.get_or_insert_with(key, |k| k.iter().sum::<u32>() as usize);
        assert_eq!(memo.get_or_insert_with([1, 0, 2, 0, 3], |_| 0), 6);
        assert_eq!(memo.get_or_insert_with([3, 0, 2, 0, 1], |_| 0), 0);
    }
}
