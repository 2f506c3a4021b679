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

use core::ops::{Add, Mul, Rem, Sub};
use num_traits::CheckedRem;

/// A trait for types that support addition by value.
///
/// Overflow follows the primitive semantics: it panics in debug builds and
/// wraps in release builds.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::basic_arithmetic::AddVal;
/// assert_eq!(2u8.add_val(3), 5);
/// assert_eq!((-2i32).add_val(3), 1);
/// assert_eq!(0.5f64.add_val(0.25), 0.75);
/// ```
pub trait AddVal: Sized + Add<Self, Output = Self> {
    /// Adds `v` to `self`.
    fn add_val(self, v: Self) -> Self;
}

/// A trait for types that support subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::basic_arithmetic::SubVal;
/// assert_eq!(5u8.sub_val(3), 2);
/// assert_eq!(2i64.sub_val(3), -1);
/// ```
pub trait SubVal: Sized + Sub<Self, Output = Self> {
    /// Subtracts `v` from `self`.
    fn sub_val(self, v: Self) -> Self;
}

/// A trait for types that support multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::basic_arithmetic::MulVal;
/// assert_eq!(6u16.mul_val(7), 42);
/// assert_eq!((-3i8).mul_val(4), -12);
/// ```
pub trait MulVal: Sized + Mul<Self, Output = Self> {
    /// Multiplies `self` by `v`.
    fn mul_val(self, v: Self) -> Self;
}

/// A trait for types that support the truncating remainder by value.
///
/// The sign of a non-zero result follows the dividend, exactly like `%`.
/// A zero divisor panics for integers and yields `NaN` for floats.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::basic_arithmetic::RemVal;
/// assert_eq!(7i32.rem_val(3), 1);
/// assert_eq!((-7i32).rem_val(3), -1);
/// assert_eq!(7i32.rem_val(-3), 1);
/// assert_eq!(5.5f64.rem_val(2.0), 1.5);
/// ```
pub trait RemVal: Sized + Rem<Self, Output = Self> {
    /// Returns the remainder of `self / v`.
    fn rem_val(self, v: Self) -> Self;
}

macro_rules! binary_impl_val {
    ($trait_name:ident, $method:ident, $op:tt; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> $t {
                    self $op v
                }
            }
        )+
    };
}

binary_impl_val!(AddVal, add_val, +; u8, u16, u32, u64, usize, u128);
binary_impl_val!(AddVal, add_val, +; i8, i16, i32, i64, isize, i128);
binary_impl_val!(AddVal, add_val, +; f32, f64);

binary_impl_val!(SubVal, sub_val, -; u8, u16, u32, u64, usize, u128);
binary_impl_val!(SubVal, sub_val, -; i8, i16, i32, i64, isize, i128);
binary_impl_val!(SubVal, sub_val, -; f32, f64);

binary_impl_val!(MulVal, mul_val, *; u8, u16, u32, u64, usize, u128);
binary_impl_val!(MulVal, mul_val, *; i8, i16, i32, i64, isize, i128);
binary_impl_val!(MulVal, mul_val, *; f32, f64);

binary_impl_val!(RemVal, rem_val, %; u8, u16, u32, u64, usize, u128);
binary_impl_val!(RemVal, rem_val, %; i8, i16, i32, i64, isize, i128);
binary_impl_val!(RemVal, rem_val, %; f32, f64);

/// Returns `a + b`.
#[inline]
pub fn add<T: AddVal>(a: T, b: T) -> T {
    a.add_val(b)
}

/// Returns `a - b`.
#[inline]
pub fn sub<T: SubVal>(a: T, b: T) -> T {
    a.sub_val(b)
}

/// Returns `a * b`.
#[inline]
pub fn mult<T: MulVal>(a: T, b: T) -> T {
    a.mul_val(b)
}

/// Returns the truncating remainder `a % b`.
///
/// # Panics
///
/// Panics on an integer zero divisor, like `%`. Use [`checked_modulo`] when
/// the divisor is not known to be non-zero.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::modulo;
/// assert_eq!(modulo(10, 4), 2);
/// assert_eq!(modulo(-10, 4), -2);
/// ```
#[inline]
pub fn modulo<T: RemVal>(a: T, b: T) -> T {
    a.rem_val(b)
}

/// Returns the truncating remainder `a % b`, or `None` if `b` is zero or the
/// operation overflows (`MIN % -1`).
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::checked_modulo;
/// assert_eq!(checked_modulo(10i32, 4), Some(2));
/// assert_eq!(checked_modulo(10i32, 0), None);
/// assert_eq!(checked_modulo(i8::MIN, -1), None);
/// ```
#[inline]
pub fn checked_modulo<T: CheckedRem>(a: T, b: T) -> Option<T> {
    a.checked_rem(&b)
}
