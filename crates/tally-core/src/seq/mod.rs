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

//! # Ordered Sequences
//!
//! Generators and transformers for ordered sequences of values.
//!
//! ## Submodules
//!
//! - `range`: `InclusiveRange<T>`, a reusable closed integer interval with an
//!   overflow-free, double-ended iterator, and `range_inclusive`.
//! - `times`: the lazy `times(n, f)` generator over `[0, n)`.
//! - `map`: `map_fn`, order- and length-preserving elementwise mapping.
//! - `pair`: `[x, 2x]` pairs (`doubled`) and the pair sequence over
//!   `[-10, 10]` (`ideal`).

pub mod map;
pub mod pair;
pub mod range;
pub mod times;

pub use map::map_fn;
pub use pair::{Pair, doubled, ideal};
pub use range::{InclusiveRange, InclusiveRangeIter, range_inclusive};
pub use times::{Times, times};
