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

//! # Divergence Policies
//!
//! A policy decides what happens when the naive and the correct comparison
//! disagree for a given operand pair. Policies are selected at the type
//! level (the guarded dispatcher is generic over them), so the chosen
//! behavior costs no runtime branching and is fixed per call site.
//!
//! The associated `Verdict` type lets a policy change the shape of the
//! dispatcher's return value: the silent and aborting policies yield a
//! plain `bool`, while the raising policy yields
//! `Result<bool, DivergenceError>` so callers can recover.

use crate::operand::IntOperand;
use crate::relation::Relation;
use std::fmt;

/// Strategy invoked when a naive and a correct comparison disagree.
///
/// `report` is called at most once per comparison and only when
/// `naive != correct`; `pass` wraps the result on the agreeing path.
/// Implementations must have no observable effect in `pass`.
pub trait DivergencePolicy {
    /// The dispatcher's return type under this policy.
    type Verdict;

    /// Wraps an undisputed (correct) result.
    fn pass(correct: bool) -> Self::Verdict;

    /// Handles a detected divergence. `correct` is the exact result,
    /// `naive` the legacy one.
    fn report<A: IntOperand, B: IntOperand>(
        relation: Relation,
        lhs: A,
        rhs: B,
        naive: bool,
        correct: bool,
    ) -> Self::Verdict;
}

/// Policy that does nothing on divergence; the correct result is returned
/// as if nothing happened.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPolicy;

impl DivergencePolicy for NullPolicy {
    type Verdict = bool;

    #[inline(always)]
    fn pass(correct: bool) -> bool {
        correct
    }

    #[inline(always)]
    fn report<A: IntOperand, B: IntOperand>(
        _relation: Relation,
        _lhs: A,
        _rhs: B,
        _naive: bool,
        correct: bool,
    ) -> bool {
        correct
    }
}

/// Policy that writes a diagnostic to stderr and terminates the process on
/// divergence.
///
/// Useful for smoking out incorrect naive comparisons during testing and
/// audits; never meant for production paths that must stay available.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbortPolicy;

impl DivergencePolicy for AbortPolicy {
    type Verdict = bool;

    #[inline(always)]
    fn pass(correct: bool) -> bool {
        correct
    }

    fn report<A: IntOperand, B: IntOperand>(
        relation: Relation,
        lhs: A,
        rhs: B,
        naive: bool,
        correct: bool,
    ) -> bool {
        eprintln!(
            "safecmp: naive comparison {relation} gives the wrong result {naive}, \
             which differs from the correct result {correct} for values {lhs} and {rhs}"
        );
        std::process::abort()
    }
}

/// Policy that surfaces the divergence as a recoverable
/// [`DivergenceError`] instead of returning a boolean.
///
/// # Examples
///
/// ```rust
/// use safecmp_core::dispatch::RaisingCompare;
///
/// // -1 < 1 diverges under legacy promotion, so the raising mode errors.
/// assert!(RaisingCompare::less(-1i32, 1u32).is_err());
/// // Agreeing comparisons pass through.
/// assert_eq!(RaisingCompare::less(1i32, 2u32), Ok(true));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RaisePolicy;

impl DivergencePolicy for RaisePolicy {
    type Verdict = Result<bool, DivergenceError>;

    #[inline(always)]
    fn pass(correct: bool) -> Result<bool, DivergenceError> {
        Ok(correct)
    }

    fn report<A: IntOperand, B: IntOperand>(
        relation: Relation,
        lhs: A,
        rhs: B,
        naive: bool,
        correct: bool,
    ) -> Result<bool, DivergenceError> {
        Err(DivergenceError::new(relation, &lhs, &rhs, naive, correct))
    }
}

/// Details about a comparison where the naive and the correct result
/// disagreed.
///
/// Operands are stored pre-rendered, since the error must not be generic
/// over the two (possibly different) operand types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceError {
    /// The relation that was evaluated.
    pub relation: Relation,
    /// The left operand, rendered.
    pub lhs: String,
    /// The right operand, rendered.
    pub rhs: String,
    /// The result of the legacy comparison.
    pub naive: bool,
    /// The mathematically exact result.
    pub correct: bool,
}

impl DivergenceError {
    pub(crate) fn new<A: fmt::Display, B: fmt::Display>(
        relation: Relation,
        lhs: &A,
        rhs: &B,
        naive: bool,
        correct: bool,
    ) -> Self {
        Self {
            relation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            naive,
            correct,
        }
    }
}

impl fmt::Display for DivergenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "naive comparison {} gives the wrong result {}, which differs from \
             the correct result {} for values {} and {}",
            self.relation, self.naive, self.correct, self.lhs, self.rhs
        )
    }
}

impl std::error::Error for DivergenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_policy_returns_correct_result() {
        assert!(NullPolicy::pass(true));
        assert!(!NullPolicy::pass(false));
        assert!(NullPolicy::report(Relation::Less, -1i32, 1u32, false, true));
    }

    #[test]
    fn test_raise_policy_error_carries_full_diagnostics() {
        let verdict = RaisePolicy::report(Relation::Less, -1i32, 1u32, false, true);
        let err = verdict.unwrap_err();
        assert_eq!(err.relation, Relation::Less);
        assert_eq!(err.lhs, "-1");
        assert_eq!(err.rhs, "1");
        assert!(!err.naive);
        assert!(err.correct);
        let message = err.to_string();
        assert!(message.contains('<'));
        assert!(message.contains("-1"));
        assert!(message.contains("wrong result false"));
        assert!(message.contains("correct result true"));
    }

    #[test]
    fn test_raise_policy_pass_is_ok() {
        assert_eq!(RaisePolicy::pass(true), Ok(true));
        assert_eq!(RaisePolicy::pass(false), Ok(false));
    }
}
