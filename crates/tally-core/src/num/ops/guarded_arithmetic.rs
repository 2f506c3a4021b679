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

/// A trait for types that support division guarded against a zero divisor.
///
/// Both operands are converted to `f64` and divided. When the divisor equals
/// zero (including `-0.0` for floats) the result is `0.0` instead of a panic,
/// an infinity or `NaN`. Conversions of very large 64- and 128-bit integers
/// round to the nearest representable `f64`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::guarded_arithmetic::GuardedDivVal;
/// assert_eq!(7i32.guarded_div_val(2), 3.5);
/// assert_eq!(7u8.guarded_div_val(0), 0.0);
/// assert_eq!(1.0f32.guarded_div_val(-0.0), 0.0);
/// ```
pub trait GuardedDivVal: Sized {
    /// Divides `self` by `v` as `f64`, returning `0.0` if `v` is zero.
    fn guarded_div_val(self, v: Self) -> f64;
}

macro_rules! guarded_div_impl_val {
    (int; $($t:ty),+ $(,)?) => {
        $(
            impl GuardedDivVal for $t {
                #[inline(always)]
                fn guarded_div_val(self, v: $t) -> f64 {
                    if v == 0 {
                        0.0
                    } else {
                        self as f64 / v as f64
                    }
                }
            }
        )+
    };
    (float; $($t:ty),+ $(,)?) => {
        $(
            impl GuardedDivVal for $t {
                #[inline(always)]
                fn guarded_div_val(self, v: $t) -> f64 {
                    if v == 0.0 {
                        0.0
                    } else {
                        f64::from(self) / f64::from(v)
                    }
                }
            }
        )+
    };
}

guarded_div_impl_val!(int; u8, u16, u32, u64, usize, u128);
guarded_div_impl_val!(int; i8, i16, i32, i64, isize, i128);
guarded_div_impl_val!(float; f32, f64);

/// Returns `a / b` as floating-point division, or `0.0` when `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::div;
/// assert_eq!(div(1, 4), 0.25);
/// assert_eq!(div(-9, 3), -3.0);
/// assert_eq!(div(42, 0), 0.0);
/// ```
#[inline]
pub fn div<T: GuardedDivVal>(a: T, b: T) -> f64 {
    a.guarded_div_val(b)
}
