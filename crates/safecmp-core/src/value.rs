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

//! # Wrapped Integer Values (Zero-Cost)
//!
//! `Value<T>` is a transparent carrier for a single primitive integer whose
//! signedness is known at the type level through [`IntOperand`]. Comparing
//! two wrapped values with the ordinary relational operators routes through
//! the correct comparator, so mixed signed/unsigned comparisons give the
//! mathematically exact result instead of the surprising legacy one.
//!
//! The wrapper never converts, narrows or sign-changes its payload; it
//! compiles down to the bare integer (`#[repr(transparent)]`).
//!
//! ## Usage
//!
//! ```rust
//! use safecmp_core::value::wrap;
//!
//! let a: i32 = -1;
//! let b: u32 = 1;
//! // The legacy C-style comparison would claim `a < b` is false.
//! assert!(wrap(a) < wrap(b));
//! ```

use crate::operand::IntOperand;
use std::fmt;

/// A primitive integer tagged with its statically known signedness.
///
/// Constructed at the call boundary and consumed by a single comparison
/// expression; it has no lifecycle of its own.
///
/// # Examples
///
/// ```rust
/// # use safecmp_core::value::Value;
///
/// let v = Value::new(-3i16);
/// assert_eq!(v.get(), -3);
/// assert!(Value::<i16>::is_signed());
/// assert!(!Value::<u64>::is_signed());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct Value<T: IntOperand> {
    payload: T,
}

impl<T: IntOperand> Value<T> {
    /// Wraps a primitive integer.
    #[inline(always)]
    pub const fn new(payload: T) -> Self {
        Self { payload }
    }

    /// Returns the wrapped integer unchanged.
    #[inline(always)]
    pub const fn get(self) -> T {
        self.payload
    }

    /// Whether the underlying type is signed. A type-level fact, not a
    /// property of the stored value.
    #[inline(always)]
    pub const fn is_signed() -> bool {
        T::SIGNED
    }
}

impl<T: IntOperand> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.payload)
    }
}

/// Converts an integer into a wrapped integer, returning an object that,
/// when compared to another wrapped integer, does the mathematically
/// correct thing. There is no reporting or failure involved, just the
/// correct comparison.
///
/// # Examples
///
/// ```rust
/// use safecmp_core::value::wrap;
///
/// assert!(wrap(-1i64) < wrap(1u8));
/// assert!(wrap(5u8) == wrap(5i64));
/// ```
///
/// Booleans and floating point values are not integers and do not implement
/// [`IntOperand`], so wrapping them is rejected at compile time:
///
/// ```compile_fail
/// safecmp_core::value::wrap(true);
/// ```
///
/// ```compile_fail
/// safecmp_core::value::wrap(1.0f32);
/// ```
///
/// ```compile_fail
/// safecmp_core::value::wrap(1.0f64);
/// ```
#[inline(always)]
pub fn wrap<T: IntOperand>(x: T) -> Value<T> {
    Value::new(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_transparent() {
        assert_eq!(wrap(42u8).get(), 42);
        assert_eq!(wrap(i64::MIN).get(), i64::MIN);
        assert_eq!(
            std::mem::size_of::<Value<i32>>(),
            std::mem::size_of::<i32>()
        );
    }

    #[test]
    fn test_signedness_introspection() {
        assert!(Value::<i8>::is_signed());
        assert!(!Value::<u128>::is_signed());
    }

    #[test]
    fn test_display_delegates_to_payload() {
        assert_eq!(format!("{}", wrap(-7i32)), "-7");
        assert_eq!(format!("{}", wrap(200u8)), "200");
    }
}
