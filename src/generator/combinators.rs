/*
combinators.rs

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

//! Partial application and composition.
//!
//! The path enumerator builds its per-branch path transformations from these two helpers.
//! Functions taking several arguments receive them as a tuple.

/// Fix the first argument of `f`.
///
/// The returned function calls `f(partial, rest)`.
pub fn curry<A, B, R>(f: impl Fn(A, B) -> R, partial: A) -> impl Fn(B) -> R
where
    A: Clone,
{
    move |rest| f(partial.clone(), rest)
}

/// Compose two functions.
///
/// The returned function calls `f(g(args))`: `g` receives the arguments and `f` only receives
/// the result of `g`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |args| f(g(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curry_puts_partial_arguments_first() {
        let sub = |a: i32, b: i32| a - b;
        let ten_minus = curry(sub, 10);
        assert_eq!(ten_minus(3), 7);
        assert_eq!(ten_minus(12), -2);
    }

    #[test]
    fn curry_with_tupled_rest() {
        let join = |sep: &str, (a, b): (&str, &str)| format!("{a}{sep}{b}");
        let dashed = curry(join, "-");
        assert_eq!(dashed(("left", "right")), "left-right");
    }

    #[test]
    fn compose_applies_inner_function_first() {
        let double = |x: i32| x * 2;
        let increment = |x: i32| x + 1;
        assert_eq!(compose(double, increment)(5), 12);
        assert_eq!(compose(increment, double)(5), 11);
    }

    #[test]
    fn compose_passes_all_arguments_to_inner_function() {
        let sum = |(a, b, c): (i32, i32, i32)| a + b + c;
        let negate = |x: i32| -x;
        assert_eq!(compose(negate, sum)((1, 2, 3)), -6);
    }
}
