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

//! # Tally Core
//!
//! Small, generic building blocks for integer arithmetic and ordered
//! sequence generation.
//!
//! ## Modules
//!
//! - `num`: By-value arithmetic traits (`AddVal`, `SubVal`, `MulVal`,
//!   `RemVal`, `GuardedDivVal`) implemented for every primitive number type,
//!   together with the free functions `add`, `sub`, `mult`, `modulo`,
//!   `checked_modulo` and the zero-guarded `div`.
//! - `seq`: Inclusive integer ranges (`InclusiveRange<T>`), the lazy
//!   `times(n, f)` generator, order-preserving `map_fn`, and the doubled
//!   pair sequence (`doubled`, `ideal`).
//!
//! All operations are pure and allocation only happens when a sequence is
//! explicitly materialised.

pub mod num;
pub mod seq;
