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

//! The correct comparator: exact relational results for any pairing of
//! wrapped integers, including mixed signedness and width.
//!
//! Every relation gets its own signedness case split instead of being
//! derived by negating another relation. The pattern is the same
//! throughout: if both operands share signedness, widen losslessly inside
//! that signedness class and compare; otherwise guard on the sign of the
//! signed operand, then reinterpret the proven non-negative payload as
//! unsigned and compare unsigned-to-unsigned. No branch can overflow or
//! truncate, so the result equals comparing the operands as
//! infinite-precision integers.

use crate::operand::IntOperand;
use crate::relation::Relation;
use crate::value::Value;
use std::cmp::Ordering;

pub(crate) fn eq<A: IntOperand, B: IntOperand>(lhs: Value<A>, rhs: Value<B>) -> bool {
    if A::SIGNED == B::SIGNED {
        if A::SIGNED {
            lhs.get().to_signed_val() == rhs.get().to_signed_val()
        } else {
            lhs.get().to_unsigned_val() == rhs.get().to_unsigned_val()
        }
    } else if A::SIGNED {
        // A negative left value cannot equal any unsigned right value.
        !lhs.get().is_negative_val()
            && lhs.get().to_unsigned_val() == rhs.get().to_unsigned_val()
    } else {
        !rhs.get().is_negative_val()
            && lhs.get().to_unsigned_val() == rhs.get().to_unsigned_val()
    }
}

pub(crate) fn ne<A: IntOperand, B: IntOperand>(lhs: Value<A>, rhs: Value<B>) -> bool {
    if A::SIGNED == B::SIGNED {
        if A::SIGNED {
            lhs.get().to_signed_val() != rhs.get().to_signed_val()
        } else {
            lhs.get().to_unsigned_val() != rhs.get().to_unsigned_val()
        }
    } else if A::SIGNED {
        lhs.get().is_negative_val()
            || lhs.get().to_unsigned_val() != rhs.get().to_unsigned_val()
    } else {
        rhs.get().is_negative_val()
            || lhs.get().to_unsigned_val() != rhs.get().to_unsigned_val()
    }
}

pub(crate) fn lt<A: IntOperand, B: IntOperand>(lhs: Value<A>, rhs: Value<B>) -> bool {
    if A::SIGNED == B::SIGNED {
        if A::SIGNED {
            lhs.get().to_signed_val() < rhs.get().to_signed_val()
        } else {
            lhs.get().to_unsigned_val() < rhs.get().to_unsigned_val()
        }
    } else if A::SIGNED {
        // A negative left value is unconditionally less than any unsigned
        // right value.
        lhs.get().is_negative_val()
            || lhs.get().to_unsigned_val() < rhs.get().to_unsigned_val()
    } else {
        !rhs.get().is_negative_val()
            && lhs.get().to_unsigned_val() < rhs.get().to_unsigned_val()
    }
}

pub(crate) fn le<A: IntOperand, B: IntOperand>(lhs: Value<A>, rhs: Value<B>) -> bool {
    if A::SIGNED == B::SIGNED {
        if A::SIGNED {
            lhs.get().to_signed_val() <= rhs.get().to_signed_val()
        } else {
            lhs.get().to_unsigned_val() <= rhs.get().to_unsigned_val()
        }
    } else if A::SIGNED {
        lhs.get().is_negative_val()
            || lhs.get().to_unsigned_val() <= rhs.get().to_unsigned_val()
    } else {
        !rhs.get().is_negative_val()
            && lhs.get().to_unsigned_val() <= rhs.get().to_unsigned_val()
    }
}

pub(crate) fn gt<A: IntOperand, B: IntOperand>(lhs: Value<A>, rhs: Value<B>) -> bool {
    if A::SIGNED == B::SIGNED {
        if A::SIGNED {
            lhs.get().to_signed_val() > rhs.get().to_signed_val()
        } else {
            lhs.get().to_unsigned_val() > rhs.get().to_unsigned_val()
        }
    } else if A::SIGNED {
        !lhs.get().is_negative_val()
            && lhs.get().to_unsigned_val() > rhs.get().to_unsigned_val()
    } else {
        rhs.get().is_negative_val()
            || lhs.get().to_unsigned_val() > rhs.get().to_unsigned_val()
    }
}

pub(crate) fn ge<A: IntOperand, B: IntOperand>(lhs: Value<A>, rhs: Value<B>) -> bool {
    if A::SIGNED == B::SIGNED {
        if A::SIGNED {
            lhs.get().to_signed_val() >= rhs.get().to_signed_val()
        } else {
            lhs.get().to_unsigned_val() >= rhs.get().to_unsigned_val()
        }
    } else if A::SIGNED {
        !lhs.get().is_negative_val()
            && lhs.get().to_unsigned_val() >= rhs.get().to_unsigned_val()
    } else {
        rhs.get().is_negative_val()
            || lhs.get().to_unsigned_val() >= rhs.get().to_unsigned_val()
    }
}

/// Evaluates one relation with exact-arithmetic semantics.
#[inline]
pub(crate) fn cmp<A: IntOperand, B: IntOperand>(
    relation: Relation,
    lhs: Value<A>,
    rhs: Value<B>,
) -> bool {
    match relation {
        Relation::Equal => eq(lhs, rhs),
        Relation::NotEqual => ne(lhs, rhs),
        Relation::Greater => gt(lhs, rhs),
        Relation::GreaterOrEqual => ge(lhs, rhs),
        Relation::Less => lt(lhs, rhs),
        Relation::LessOrEqual => le(lhs, rhs),
    }
}

impl<A: IntOperand, B: IntOperand> PartialEq<Value<B>> for Value<A> {
    #[inline]
    fn eq(&self, other: &Value<B>) -> bool {
        eq(*self, *other)
    }

    #[inline]
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Value<B>) -> bool {
        ne(*self, *other)
    }
}

impl<A: IntOperand, B: IntOperand> PartialOrd<Value<B>> for Value<A> {
    fn partial_cmp(&self, other: &Value<B>) -> Option<Ordering> {
        if lt(*self, *other) {
            Some(Ordering::Less)
        } else if gt(*self, *other) {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }

    #[inline]
    fn lt(&self, other: &Value<B>) -> bool {
        lt(*self, *other)
    }

    #[inline]
    fn le(&self, other: &Value<B>) -> bool {
        le(*self, *other)
    }

    #[inline]
    fn gt(&self, other: &Value<B>) -> bool {
        gt(*self, *other)
    }

    #[inline]
    fn ge(&self, other: &Value<B>) -> bool {
        ge(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::wrap;

    #[test]
    fn test_negative_signed_vs_unsigned() {
        assert!(wrap(-1i32) < wrap(1u32));
        assert!(wrap(-1i32) <= wrap(0u32));
        assert!(wrap(-1i32) != wrap(u32::MAX));
        assert!(wrap(1u32) > wrap(-1i32));
        assert!(wrap(0u32) >= wrap(-1i32));
        assert!(!(wrap(-1i8) == wrap(255u8)));
    }

    #[test]
    fn test_non_negative_mixed_signedness() {
        assert!(wrap(5u8) == wrap(5i64));
        assert!(wrap(5i64) == wrap(5u8));
        assert!(wrap(3i16) < wrap(4u64));
        assert!(wrap(4u64) > wrap(3i16));
        assert!(wrap(0i32) == wrap(0u8));
    }

    #[test]
    fn test_signed_minimum_against_unsigned_zero() {
        assert!(wrap(i8::MIN) <= wrap(0u8));
        assert!(wrap(i32::MIN) <= wrap(0u64));
        assert!(wrap(i64::MIN) < wrap(0u8));
        assert!(wrap(i128::MIN) <= wrap(0u128));
    }

    #[test]
    fn test_128_bit_extremes() {
        assert!(wrap(u128::MAX) > wrap(i128::MAX));
        assert!(wrap(i128::MAX) < wrap(u128::MAX));
        assert!(wrap(i128::MIN) < wrap(0u128));
        assert!(wrap(u128::MAX) != wrap(-1i128));
        assert!(wrap(i128::MAX) == wrap(i128::MAX as u128));
    }

    #[test]
    fn test_same_signedness_different_widths() {
        assert!(wrap(-1i8) == wrap(-1i64));
        assert!(wrap(i8::MIN) > wrap(i64::MIN));
        assert!(wrap(255u8) == wrap(255u64));
        assert!(wrap(u8::MAX) < wrap(u16::MAX));
    }

    #[test]
    fn test_each_relation_has_independent_analysis() {
        // Boundary pairs where deriving one relation from another would be
        // easy to get wrong by one.
        let a = wrap(0i32);
        let b = wrap(0u64);
        assert!(a == b);
        assert!(a <= b);
        assert!(a >= b);
        assert!(!(a < b));
        assert!(!(a > b));
        assert!(!(a != b));
    }

    #[test]
    fn test_cmp_matches_relation_functions() {
        let lhs = wrap(-7i16);
        let rhs = wrap(7u16);
        assert!(!cmp(Relation::Equal, lhs, rhs));
        assert!(cmp(Relation::NotEqual, lhs, rhs));
        assert!(!cmp(Relation::Greater, lhs, rhs));
        assert!(!cmp(Relation::GreaterOrEqual, lhs, rhs));
        assert!(cmp(Relation::Less, lhs, rhs));
        assert!(cmp(Relation::LessOrEqual, lhs, rhs));
    }
}
