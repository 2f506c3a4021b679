// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::num::ops::basic_arithmetic::{MulVal, mult};
use crate::seq::{map::map_fn, range::range_inclusive};
use num_traits::PrimInt;

/// Two values of the same type, printed as `[a, b]`.
pub type Pair<T> = [T; 2];

/// First value of the range `ideal` is computed over.
pub const IDEAL_START: i64 = -10;

/// Last value of the range `ideal` is computed over.
pub const IDEAL_END: i64 = 10;

/// Returns `[x, 2x]`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::seq::pair::doubled;
/// assert_eq!(doubled(-3i32), [-3, -6]);
/// assert_eq!(doubled(0u8), [0, 0]);
/// ```
#[inline]
pub fn doubled<T>(x: T) -> Pair<T>
where
    T: PrimInt + MulVal,
{
    [x, mult(x, T::one() + T::one())]
}

/// Returns `[x, 2x]` for every `x` in `[IDEAL_START, IDEAL_END]`, in
/// ascending order of `x`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::seq::pair::ideal;
/// let pairs = ideal();
/// assert_eq!(pairs.len(), 21);
/// assert_eq!(pairs[0], [-10, -20]);
/// assert_eq!(pairs[20], [10, 20]);
/// ```
pub fn ideal() -> Vec<Pair<i64>> {
    map_fn(doubled, range_inclusive(IDEAL_START, IDEAL_END))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled() {
        assert_eq!(doubled(7i64), [7, 14]);
        assert_eq!(doubled(-7i64), [-7, -14]);
        assert_eq!(doubled(100u8), [100, 200]);
    }

    #[test]
    fn test_ideal_element_i() {
        let pairs = ideal();
        assert_eq!(pairs.len(), 21);
        for (i, pair) in pairs.iter().enumerate() {
            let x = -10 + i as i64;
            assert_eq!(*pair, [x, 2 * x]);
        }
    }

    #[test]
    fn test_ideal_ascending_by_first_element() {
        let pairs = ideal();
        assert!(pairs.windows(2).all(|w| w[0][0] < w[1][0]));
        assert_eq!(pairs.first(), Some(&[IDEAL_START, 2 * IDEAL_START]));
        assert_eq!(pairs.last(), Some(&[IDEAL_END, 2 * IDEAL_END]));
    }
}
