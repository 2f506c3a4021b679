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

//! # Numeric Operations
//!
//! By-value operator traits for primitive numbers, plus free functions that
//! read like the operators they wrap.
//!
//! ## Submodules
//!
//! - `basic_arithmetic`: `AddVal`, `SubVal`, `MulVal`, `RemVal` and the free
//!   functions `add`, `sub`, `mult`, `modulo`, `checked_modulo`.
//! - `guarded_arithmetic`: `GuardedDivVal` and the free function `div`, which
//!   yields `0.0` instead of faulting when the divisor is zero.
//!
//! ```rust
//! use tally_core::num::ops::{add, div, modulo, mult, sub};
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(sub(2, 3), -1);
//! assert_eq!(mult(4, -3), -12);
//! assert_eq!(modulo(-7, 3), -1);
//! assert_eq!(div(7, 2), 3.5);
//! assert_eq!(div(7, 0), 0.0);
//! ```

pub mod basic_arithmetic;
pub mod guarded_arithmetic;

pub use basic_arithmetic::{add, checked_modulo, modulo, mult, sub};
pub use guarded_arithmetic::div;
