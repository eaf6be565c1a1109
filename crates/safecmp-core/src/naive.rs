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

//! The naive comparator: the legacy mixed-type comparison semantics this
//! library guards against.
//!
//! Rust's relational operators refuse mixed-signedness operands outright,
//! so the baseline reproduced here is the C family's usual arithmetic
//! conversions, which is what careless `as`-casting reproduces and what the
//! original unsafe code paths this library replaces actually did:
//!
//! - operand types narrower than 32 bits first promote to a signed 32-bit
//!   rank;
//! - if both promoted ranks share signedness, the wider rank wins;
//! - otherwise the unsigned rank wins when it is at least as wide as the
//!   signed rank, else the signed rank wins;
//! - both operands are converted to the common rank (two's-complement wrap
//!   for unsigned ranks) and compared there.
//!
//! When the common rank is signed, every operand value is representable and
//! the naive result coincides with the correct one. The surprises live
//! entirely in the unsigned-rank case, where a negative operand wraps to a
//! huge unsigned value.

use crate::operand::IntOperand;
use crate::relation::Relation;

/// Signedness and width of a conversion rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rank {
    signed: bool,
    bits: u32,
}

/// Integer promotion: anything narrower than 32 bits becomes a signed
/// 32-bit rank.
const fn promote(signed: bool, bits: u32) -> Rank {
    if bits < 32 {
        Rank {
            signed: true,
            bits: 32,
        }
    } else {
        Rank { signed, bits }
    }
}

/// The common rank both operands convert to before a naive comparison.
fn common_rank<A: IntOperand, B: IntOperand>() -> Rank {
    let a = promote(A::SIGNED, A::BITS);
    let b = promote(B::SIGNED, B::BITS);
    if a.signed == b.signed {
        Rank {
            signed: a.signed,
            bits: a.bits.max(b.bits),
        }
    } else {
        let (signed_rank, unsigned_rank) = if a.signed { (a, b) } else { (b, a) };
        if unsigned_rank.bits >= signed_rank.bits {
            unsigned_rank
        } else {
            signed_rank
        }
    }
}

/// All-ones mask for the low `bits` bits.
const fn mask(bits: u32) -> u128 {
    if bits == 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

/// Evaluates one relation with the legacy promotion semantics.
///
/// Unsound for cross-signedness operands by design; this is the behavior
/// being measured against, not the one to rely on.
#[inline]
pub(crate) fn cmp<A: IntOperand, B: IntOperand>(relation: Relation, lhs: A, rhs: B) -> bool {
    let rank = common_rank::<A, B>();
    let ordering = if rank.signed {
        // Every operand value fits in the signed common rank, so the
        // conversion is lossless and the comparison exact.
        lhs.to_signed_val().cmp(&rhs.to_signed_val())
    } else {
        let m = mask(rank.bits);
        (lhs.to_bits_val() & m).cmp(&(rhs.to_bits_val() & m))
    };
    relation.holds(ordering)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_rank_promotion() {
        // Sub-32-bit operands promote to a signed 32-bit rank.
        assert_eq!(
            common_rank::<u8, i16>(),
            Rank {
                signed: true,
                bits: 32
            }
        );
        // Equal-width mixed signedness: unsigned wins.
        assert_eq!(
            common_rank::<i32, u32>(),
            Rank {
                signed: false,
                bits: 32
            }
        );
        // Wider signed type absorbs the narrower unsigned one.
        assert_eq!(
            common_rank::<u32, i64>(),
            Rank {
                signed: true,
                bits: 64
            }
        );
        // Wider unsigned type wins over a narrower signed one.
        assert_eq!(
            common_rank::<i32, u64>(),
            Rank {
                signed: false,
                bits: 64
            }
        );
        assert_eq!(
            common_rank::<i128, u128>(),
            Rank {
                signed: false,
                bits: 128
            }
        );
    }

    #[test]
    fn test_negative_wraps_in_unsigned_rank() {
        // The classic surprise: -1 promotes to a huge unsigned value.
        assert!(!cmp(Relation::Less, -1i32, 1u32));
        assert!(cmp(Relation::Greater, -1i32, 1u32));
        assert!(cmp(Relation::Equal, -1i32, u32::MAX));
        assert!(!cmp(Relation::Less, -1i64, 1u64));
        assert!(cmp(Relation::Equal, -1i128, u128::MAX));
    }

    #[test]
    fn test_promotion_rescues_narrow_operands() {
        // u8 vs i32 promotes to signed 32 bits, so the naive result is
        // actually correct here.
        assert!(cmp(Relation::Less, -1i32, 1u8));
        assert!(cmp(Relation::Equal, 5u8, 5i32));
        assert!(cmp(Relation::Greater, 200u8, -1i16));
    }

    #[test]
    fn test_signed_rank_is_exact() {
        // u32 fits in i64, so the common rank is signed and lossless.
        assert!(cmp(Relation::Less, -1i64, 1u32));
        assert!(cmp(Relation::Equal, u32::MAX, u32::MAX as i64));
    }

    #[test]
    fn test_same_type_matches_native_operators() {
        assert_eq!(cmp(Relation::Less, 1u32, 2u32), 1u32 < 2u32);
        assert_eq!(cmp(Relation::Less, -2i8, -1i8), -2i8 < -1i8);
        assert!(cmp(Relation::GreaterOrEqual, 7usize, 7usize));
        assert!(!cmp(Relation::NotEqual, i64::MIN, i64::MIN));
    }
}
