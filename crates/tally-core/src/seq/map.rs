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

/// Applies `f` to every element of `sequence`, preserving order.
///
/// The result always has as many elements as the input; nothing is filtered.
///
/// # Examples
///
/// ```rust
/// # use tally_core::seq::map::map_fn;
/// # use tally_core::seq::range::range_inclusive;
/// assert_eq!(map_fn(|x| x * 3, [1, 2, 3]), vec![3, 6, 9]);
/// assert_eq!(map_fn(|x: i32| -x, range_inclusive(1, 3)), vec![-1, -2, -3]);
/// ```
#[inline]
pub fn map_fn<I, U, F>(f: F, sequence: I) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    sequence.into_iter().map(f).collect()
}
