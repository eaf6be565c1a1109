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

//! # Comparison Dispatchers
//!
//! The public entry points of the library: six named relational operations
//! over any pair of (possibly heterogeneous) primitive integers, in three
//! dispatch modes.
//!
//! - [`ExactCompare`] always returns the mathematically correct result and
//!   never evaluates the naive comparison.
//! - [`UncheckedCompare`] always returns the naive (legacy) result.
//!   Explicitly unsound for cross-signedness operands; offered for audited
//!   call sites where correctness was verified externally.
//! - [`GuardedCompare`] returns the correct result but also evaluates
//!   the naive one and routes any disagreement through the policy `P`. See
//!   the [`SilentCompare`], [`AbortingCompare`] and [`RaisingCompare`]
//!   aliases.
//!
//! All three share the same-layout fast path: when both operand types have
//! identical signedness and width, no divergence is possible and the naive
//! result is returned untouched. The layout test is a comparison of
//! associated constants, so the branch folds away at monomorphization and
//! the fast path costs exactly as much as the native operator.

use crate::operand::IntOperand;
use crate::policy::{AbortPolicy, DivergencePolicy, NullPolicy, RaisePolicy};
use crate::relation::Relation;
use crate::value::Value;
use crate::{correct, naive};
use std::marker::PhantomData;

/// `true` exactly when `A` and `B` are layout-identical primitive integer
/// types, i.e. no signedness mismatch between them is representable.
#[inline(always)]
fn same_layout<A: IntOperand, B: IntOperand>() -> bool {
    A::SIGNED == B::SIGNED && A::BITS == B::BITS
}

macro_rules! relation_entry_points {
    ($verdict:ty) => {
        /// Evaluates `lhs == rhs`.
        #[inline]
        pub fn equal<A: IntOperand, B: IntOperand>(lhs: A, rhs: B) -> $verdict {
            Self::compare(Relation::Equal, lhs, rhs)
        }

        /// Evaluates `lhs != rhs`.
        #[inline]
        pub fn not_equal<A: IntOperand, B: IntOperand>(lhs: A, rhs: B) -> $verdict {
            Self::compare(Relation::NotEqual, lhs, rhs)
        }

        /// Evaluates `lhs > rhs`.
        #[inline]
        pub fn greater<A: IntOperand, B: IntOperand>(lhs: A, rhs: B) -> $verdict {
            Self::compare(Relation::Greater, lhs, rhs)
        }

        /// Evaluates `lhs >= rhs`.
        #[inline]
        pub fn greater_or_equal<A: IntOperand, B: IntOperand>(lhs: A, rhs: B) -> $verdict {
            Self::compare(Relation::GreaterOrEqual, lhs, rhs)
        }

        /// Evaluates `lhs < rhs`.
        #[inline]
        pub fn less<A: IntOperand, B: IntOperand>(lhs: A, rhs: B) -> $verdict {
            Self::compare(Relation::Less, lhs, rhs)
        }

        /// Evaluates `lhs <= rhs`.
        #[inline]
        pub fn less_or_equal<A: IntOperand, B: IntOperand>(lhs: A, rhs: B) -> $verdict {
            Self::compare(Relation::LessOrEqual, lhs, rhs)
        }
    };
}

/// Dispatcher whose operations give the correct answer, without any
/// reporting at all.
///
/// # Examples
///
/// ```rust
/// use safecmp_core::dispatch::ExactCompare;
///
/// assert!(ExactCompare::less(-1i32, 1u32));
/// assert!(ExactCompare::equal(5u8, 5i64));
/// assert!(ExactCompare::less_or_equal(i32::MIN, 0u32));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ExactCompare;

impl ExactCompare {
    relation_entry_points!(bool);

    #[inline]
    fn compare<A: IntOperand, B: IntOperand>(relation: Relation, lhs: A, rhs: B) -> bool {
        if same_layout::<A, B>() {
            // Identical types cannot diverge; the naive comparison is the
            // native one.
            naive::cmp(relation, lhs, rhs)
        } else {
            correct::cmp(relation, Value::new(lhs), Value::new(rhs))
        }
    }
}

/// Dispatcher whose operations do exactly what the legacy promotion rules
/// do - unsafe, and performant.
///
/// Only use this when the input data is known to be safe to compare
/// naively, for instance because every operand is guaranteed non-negative.
/// There is no error checking, raising or aborting, and for
/// cross-signedness operands the result can be mathematically wrong.
///
/// # Examples
///
/// ```rust
/// use safecmp_core::dispatch::UncheckedCompare;
///
/// // The legacy result: -1 wraps to a huge unsigned value.
/// assert!(!UncheckedCompare::less(-1i32, 1u32));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UncheckedCompare;

impl UncheckedCompare {
    relation_entry_points!(bool);

    #[inline]
    fn compare<A: IntOperand, B: IntOperand>(relation: Relation, lhs: A, rhs: B) -> bool {
        naive::cmp(relation, lhs, rhs)
    }
}

/// Dispatcher that returns the correct result and reports through the
/// policy `P` whenever the naive comparison would have differed.
///
/// The policy is a type parameter, so the divergence behavior is fixed per
/// call site with no runtime branching; see
/// [`DivergencePolicy`].
#[derive(Clone, Copy, Debug)]
pub struct GuardedCompare<P: DivergencePolicy> {
    _policy: PhantomData<P>,
}

impl<P: DivergencePolicy> GuardedCompare<P> {
    relation_entry_points!(P::Verdict);

    #[inline]
    fn compare<A: IntOperand, B: IntOperand>(relation: Relation, lhs: A, rhs: B) -> P::Verdict {
        if same_layout::<A, B>() {
            return P::pass(naive::cmp(relation, lhs, rhs));
        }
        let correct = correct::cmp(relation, Value::new(lhs), Value::new(rhs));
        let naive = naive::cmp(relation, lhs, rhs);
        if naive != correct {
            P::report(relation, lhs, rhs, naive, correct)
        } else {
            P::pass(correct)
        }
    }
}

/// Guarded dispatch that stays silent on divergence. Behaves like
/// [`ExactCompare`] observably, but exercises both comparators.
pub type SilentCompare = GuardedCompare<NullPolicy>;

/// Guarded dispatch that aborts the process on divergence, after writing a
/// diagnostic to stderr. Useful for audit builds.
pub type AbortingCompare = GuardedCompare<AbortPolicy>;

/// Guarded dispatch that surfaces divergence as a recoverable
/// [`DivergenceError`](crate::policy::DivergenceError).
///
/// # Examples
///
/// ```rust
/// use safecmp_core::dispatch::RaisingCompare;
///
/// match RaisingCompare::less(-1i32, 1u32) {
///     Ok(result) => println!("no divergence, result is {result}"),
///     Err(e) => eprintln!("caught: {e}"),
/// }
/// ```
pub type RaisingCompare = GuardedCompare<RaisePolicy>;
