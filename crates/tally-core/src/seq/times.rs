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

//! # Repeated Generation
//!
//! `times(n, f)` lazily produces `f(0), f(1), ..., f(n - 1)`. Nothing is
//! computed until the iterator is advanced, and each index is passed to `f`
//! exactly once.
//!
//! ```rust
//! use tally_core::seq::times::times;
//!
//! let squares: Vec<usize> = times(5, |i| i * i).collect();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16]);
//! ```

use std::iter::FusedIterator;

/// A lazy iterator yielding `f(i)` for every `i` in `[0, n)`.
///
/// Created by [`times`].
#[derive(Clone)]
pub struct Times<F> {
    next: usize,
    end: usize,
    f: F,
}

impl<F> Times<F> {
    /// Number of indices not yet passed to the generator.
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.next
    }
}

impl<U, F> Iterator for Times<F>
where
    F: FnMut(usize) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some((self.f)(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<U, F> DoubleEndedIterator for Times<F>
where
    F: FnMut(usize) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some((self.f)(self.end))
    }
}

impl<U, F> ExactSizeIterator for Times<F>
where
    F: FnMut(usize) -> U,
{
    #[inline]
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<U, F> FusedIterator for Times<F> where F: FnMut(usize) -> U {}

impl<F> std::fmt::Debug for Times<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Times")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

/// Returns the lazy sequence `[f(0), f(1), ..., f(n - 1)]`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::seq::times::times;
/// let labels: Vec<String> = times(3, |i| format!("#{i}")).collect();
/// assert_eq!(labels, vec!["#0", "#1", "#2"]);
/// assert_eq!(times(0, |i| i).count(), 0);
/// ```
#[inline]
pub fn times<U, F>(n: usize, f: F) -> Times<F>
where
    F: FnMut(usize) -> U,
{
    Times { next: 0, end: n, f }
}
