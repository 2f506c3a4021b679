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

use num_traits::PrimInt;
use std::{iter::FusedIterator, ops::RangeInclusive};

/// A closed interval `[start, end]` of integers.
///
/// Unlike `std::ops::RangeInclusive`, this is a plain `Copy` value: it does
/// not carry iteration state, so it can be iterated any number of times.
/// A range whose end lies before its start is empty.
///
/// # Examples
///
/// ```rust
/// # use tally_core::seq::range::InclusiveRange;
/// let r = InclusiveRange::new(-2, 2);
/// assert_eq!(r.len(), Some(5));
/// assert_eq!(r.to_vec(), vec![-2, -1, 0, 1, 2]);
/// assert!(InclusiveRange::new(3, 2).is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InclusiveRange<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

/// An iterator over the integers of an `InclusiveRange`.
///
/// Iteration never steps past `end`, so ranges ending at `T::max_value()`
/// terminate without overflow.
#[derive(Clone)]
pub struct InclusiveRangeIter<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for InclusiveRangeIter<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match inclusive_len(self.front, self.back) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for InclusiveRangeIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(value)
    }
}

impl<T> FusedIterator for InclusiveRangeIter<T> where T: PrimInt {}

impl<T> std::fmt::Debug for InclusiveRangeIter<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InclusiveRangeIter")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Number of integers in `[start, end]`, or `None` if it exceeds `usize::MAX`.
fn inclusive_len<T>(start: T, end: T) -> Option<usize>
where
    T: PrimInt,
{
    if end < start {
        return Some(0);
    }
    let distance = match (start.to_i128(), end.to_i128()) {
        (Some(s), Some(e)) => usize::try_from(e.checked_sub(s)?).ok()?,
        // Only `u128` values above `i128::MAX` land here.
        _ => usize::try_from(end.to_u128()? - start.to_u128()?).ok()?,
    };
    distance.checked_add(1)
}

impl<T> InclusiveRange<T>
where
    T: PrimInt,
{
    /// Creates the range `[start, end]`. If `end < start` the range is empty.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns the first value of the range.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the last value of the range.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the range contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Returns the number of values in the range, that is `end - start + 1`
    /// for non-empty ranges and `0` otherwise.
    ///
    /// Returns `None` if the count does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::seq::range::InclusiveRange;
    /// assert_eq!(InclusiveRange::new(-10, 10).len(), Some(21));
    /// assert_eq!(InclusiveRange::new(i8::MIN, i8::MAX).len(), Some(256));
    /// assert_eq!(InclusiveRange::new(i128::MIN, i128::MAX).len(), None);
    /// ```
    #[inline]
    pub fn len(&self) -> Option<usize> {
        inclusive_len(self.start, self.end)
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns an iterator over the values in ascending order.
    #[inline]
    pub fn iter(&self) -> InclusiveRangeIter<T> {
        InclusiveRangeIter {
            front: self.start,
            back: self.end,
            exhausted: self.is_empty(),
        }
    }

    /// Collects the values into a vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> std::fmt::Debug for InclusiveRange<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InclusiveRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for InclusiveRange<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> IntoIterator for InclusiveRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = InclusiveRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &InclusiveRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = InclusiveRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<RangeInclusive<T>> for InclusiveRange<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<InclusiveRange<T>> for RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: InclusiveRange<T>) -> Self {
        range.start..=range.end
    }
}

/// Returns the ordered sequence `[start, start + 1, ..., end]`.
///
/// The sequence is empty when `end < start`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::seq::range::range_inclusive;
/// let values: Vec<i32> = range_inclusive(-3, 3).into_iter().collect();
/// assert_eq!(values, vec![-3, -2, -1, 0, 1, 2, 3]);
/// assert_eq!(range_inclusive(1, 0).len(), Some(0));
/// ```
#[inline]
pub fn range_inclusive<T>(start: T, end: T) -> InclusiveRange<T>
where
    T: PrimInt,
{
    InclusiveRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_minus_ten_to_ten() {
        let r = range_inclusive(-10i64, 10i64);
        assert_eq!(r.len(), Some(21));
        let expected: Vec<i64> = (-10..=10).collect();
        assert_eq!(r.to_vec(), expected);
    }

    #[test]
    fn test_range_single_value() {
        let r = range_inclusive(7u8, 7u8);
        assert!(!r.is_empty());
        assert_eq!(r.len(), Some(1));
        assert_eq!(r.to_vec(), vec![7u8]);
    }

    #[test]
    fn test_range_reversed_bounds_is_empty() {
        let r = range_inclusive(5i32, 4i32);
        assert!(r.is_empty());
        assert_eq!(r.len(), Some(0));
        assert_eq!(r.iter().next(), None);
        assert_eq!(r.iter().size_hint(), (0, Some(0)));
        assert!(range_inclusive(10i32, -10i32).to_vec().is_empty());
    }

    #[test]
    fn test_len_matches_end_minus_start_plus_one() {
        for a in -8i32..=8 {
            for b in a..=8 {
                let r = range_inclusive(a, b);
                let expected = usize::try_from(b - a + 1).unwrap();
                assert_eq!(r.len(), Some(expected));
                assert_eq!(r.iter().count(), expected);
            }
        }
    }

    #[test]
    fn test_len_across_full_domain() {
        assert_eq!(range_inclusive(i8::MIN, i8::MAX).len(), Some(256));
        assert_eq!(range_inclusive(u16::MIN, u16::MAX).len(), Some(65_536));
        assert_eq!(range_inclusive(0u128, u128::MAX).len(), None);
        assert_eq!(range_inclusive(i128::MIN, i128::MAX).len(), None);
        assert_eq!(
            range_inclusive(u128::MAX - 2, u128::MAX).len(),
            Some(3)
        );
    }

    #[test]
    fn test_iteration_ending_at_max_terminates() {
        let values: Vec<u8> = range_inclusive(250u8, u8::MAX).into_iter().collect();
        assert_eq!(values, vec![250, 251, 252, 253, 254, 255]);

        let values: Vec<i8> = range_inclusive(i8::MIN, i8::MIN + 2).iter().rev().collect();
        assert_eq!(values, vec![-126, -127, -128]);

        assert_eq!(range_inclusive(i8::MIN, i8::MAX).iter().count(), 256);
    }

    #[test]
    fn test_double_ended_iterator() {
        let mut it = range_inclusive(1i32, 4i32).iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_fused_iterator() {
        let mut it = range_inclusive(0u32, 1u32).iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_size_hint_overflowing_span() {
        let it = range_inclusive(i128::MIN, i128::MAX).iter();
        assert_eq!(it.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_range_is_reiterable() {
        let r = range_inclusive(-1i16, 1i16);
        let first: Vec<i16> = (&r).into_iter().collect();
        let second: Vec<i16> = r.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_contains() {
        let r = range_inclusive(-2i32, 2i32);
        assert!(r.contains(-2));
        assert!(r.contains(0));
        assert!(r.contains(2));
        assert!(!r.contains(3));
        assert!(!range_inclusive(1i32, 0i32).contains(0));
    }

    #[test]
    fn test_conversions_with_std_range() {
        let r: InclusiveRange<i64> = (-3..=3).into();
        assert_eq!(r.start(), -3);
        assert_eq!(r.end(), 3);
        let back: RangeInclusive<i64> = r.into();
        assert_eq!(back, -3..=3);
    }

    #[test]
    fn test_traits_display_debug() {
        let r = range_inclusive(-10i32, 10i32);
        assert_eq!(format!("{}", r), "[-10, 10]");
        assert_eq!(format!("{:?}", r), "InclusiveRange { start: -10, end: 10 }");
    }
}
