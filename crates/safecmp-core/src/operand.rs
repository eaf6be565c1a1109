// Copyright (c) 2025 the safecmp developers.
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

//! # Comparable Integer Operands
//!
//! The `IntOperand` trait attaches an integer's signedness and width to its
//! type, so the comparison engine can case-split on signedness at compile
//! time without storing any runtime tag. It is implemented by macro for
//! exactly the twelve primitive integer types and for nothing else, which is
//! the library's misuse guard: `bool`, `char` and the floating point types
//! do not implement it, so attempting to compare or wrap them fails to
//! type-check.
//!
//! The by-value conversion hooks give the comparators a common width to
//! work in. `to_unsigned_val` reinterprets a proven non-negative payload as
//! unsigned, `to_signed_val` is a lossless sign extension, and
//! `to_bits_val` is the two's-complement wrap used only to reproduce the
//! legacy promotion semantics in the naive comparator.

use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// A primitive integer that can participate in safe comparisons.
///
/// The associated constants expose the type-level facts the comparison
/// engine dispatches on; the methods are by-value conversions into the
/// widest representation of the respective signedness class.
///
/// # Examples
///
/// ```rust
/// # use safecmp_core::operand::IntOperand;
///
/// assert!(i32::SIGNED);
/// assert!(!u8::SIGNED);
/// assert_eq!(u16::BITS, 16);
/// assert!((-5i64).is_negative_val());
/// assert!(!5u64.is_negative_val());
/// ```
pub trait IntOperand: PrimInt + Debug + Display {
    /// Whether the type is a signed integer type.
    const SIGNED: bool;

    /// The width of the type in bits.
    const BITS: u32;

    /// Returns `true` if the value is negative. Always `false` for
    /// unsigned types.
    fn is_negative_val(self) -> bool;

    /// Reinterprets the value as an unsigned integer.
    ///
    /// For signed types this must only be called on non-negative values;
    /// that invariant is the caller's responsibility and is checked with a
    /// `debug_assert!`.
    fn to_unsigned_val(self) -> u128;

    /// Widens the value to `i128` without changing its numeric value.
    ///
    /// Lossless for every signed type and for unsigned types up to 64 bits.
    /// For `u128` it must only be called on values that fit in `i128`.
    fn to_signed_val(self) -> i128;

    /// Returns the two's-complement bit pattern of the value, sign-extended
    /// to 128 bits. Used to reproduce C-style conversion semantics in the
    /// naive comparator; never used on the correct path.
    fn to_bits_val(self) -> u128;
}

macro_rules! int_operand_signed_impl {
    ($t:ty) => {
        impl IntOperand for $t {
            const SIGNED: bool = true;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn is_negative_val(self) -> bool {
                self < 0
            }

            #[inline(always)]
            fn to_unsigned_val(self) -> u128 {
                debug_assert!(
                    self >= 0,
                    "to_unsigned_val called on a negative value"
                );
                self as u128
            }

            #[inline(always)]
            fn to_signed_val(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn to_bits_val(self) -> u128 {
                self as u128
            }
        }
    };
}

macro_rules! int_operand_unsigned_impl {
    ($t:ty) => {
        impl IntOperand for $t {
            const SIGNED: bool = false;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn is_negative_val(self) -> bool {
                false
            }

            #[inline(always)]
            fn to_unsigned_val(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn to_signed_val(self) -> i128 {
                debug_assert!(
                    self as u128 <= i128::MAX as u128,
                    "to_signed_val called on a value that does not fit in i128"
                );
                self as i128
            }

            #[inline(always)]
            fn to_bits_val(self) -> u128 {
                self as u128
            }
        }
    };
}

int_operand_signed_impl!(i8);
int_operand_signed_impl!(i16);
int_operand_signed_impl!(i32);
int_operand_signed_impl!(i64);
int_operand_signed_impl!(i128);
int_operand_signed_impl!(isize);

int_operand_unsigned_impl!(u8);
int_operand_unsigned_impl!(u16);
int_operand_unsigned_impl!(u32);
int_operand_unsigned_impl!(u64);
int_operand_unsigned_impl!(u128);
int_operand_unsigned_impl!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signedness_constants() {
        assert!(i8::SIGNED);
        assert!(i128::SIGNED);
        assert!(isize::SIGNED);
        assert!(!u8::SIGNED);
        assert!(!u128::SIGNED);
        assert!(!usize::SIGNED);
    }

    #[test]
    fn test_bit_widths() {
        assert_eq!(i8::BITS, 8);
        assert_eq!(u16::BITS, 16);
        assert_eq!(i32::BITS, 32);
        assert_eq!(u64::BITS, 64);
        assert_eq!(i128::BITS, 128);
        assert_eq!(usize::BITS, std::mem::size_of::<usize>() as u32 * 8);
    }

    #[test]
    fn test_is_negative_val() {
        assert!((-1i32).is_negative_val());
        assert!(i64::MIN.is_negative_val());
        assert!(!0i32.is_negative_val());
        assert!(!u32::MAX.is_negative_val());
        assert!(!0u8.is_negative_val());
    }

    #[test]
    fn test_to_unsigned_val_reinterprets_non_negative() {
        assert_eq!(0i8.to_unsigned_val(), 0);
        assert_eq!(i64::MAX.to_unsigned_val(), i64::MAX as u128);
        assert_eq!(u128::MAX.to_unsigned_val(), u128::MAX);
    }

    #[test]
    fn test_to_signed_val_is_lossless() {
        assert_eq!(i8::MIN.to_signed_val(), -128);
        assert_eq!(i128::MIN.to_signed_val(), i128::MIN);
        assert_eq!(u64::MAX.to_signed_val(), u64::MAX as i128);
    }

    #[test]
    fn test_to_bits_val_sign_extends() {
        assert_eq!((-1i8).to_bits_val(), u128::MAX);
        assert_eq!((-1i64).to_bits_val(), u128::MAX);
        assert_eq!(i8::MIN.to_bits_val() & 0xFF, 0x80);
        assert_eq!(255u8.to_bits_val(), 255);
    }
}
