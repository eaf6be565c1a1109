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

//! The six relational comparison tags, with display symbols for
//! diagnostics.

use std::cmp::Ordering;
use std::fmt;

/// One of the six relational comparisons.
///
/// Carries a human-readable symbol used in divergence diagnostics and
/// implements [`Display`](fmt::Display) with that symbol.
///
/// # Examples
///
/// ```rust
/// # use safecmp_core::relation::Relation;
///
/// assert_eq!(Relation::LessOrEqual.symbol(), "<=");
/// assert_eq!(format!("{}", Relation::NotEqual), "!=");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
}

impl Relation {
    /// All six relations, in a fixed order. Convenient for test grids.
    pub const ALL: [Relation; 6] = [
        Relation::Equal,
        Relation::NotEqual,
        Relation::Greater,
        Relation::GreaterOrEqual,
        Relation::Less,
        Relation::LessOrEqual,
    ];

    /// The operator symbol of the relation.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::Greater => ">",
            Relation::GreaterOrEqual => ">=",
            Relation::Less => "<",
            Relation::LessOrEqual => "<=",
        }
    }

    /// Whether the relation holds for a given [`Ordering`] of two operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safecmp_core::relation::Relation;
    /// use std::cmp::Ordering;
    ///
    /// assert!(Relation::Less.holds(Ordering::Less));
    /// assert!(Relation::GreaterOrEqual.holds(Ordering::Equal));
    /// assert!(!Relation::NotEqual.holds(Ordering::Equal));
    /// ```
    #[inline]
    pub const fn holds(self, ordering: Ordering) -> bool {
        match self {
            Relation::Equal => matches!(ordering, Ordering::Equal),
            Relation::NotEqual => !matches!(ordering, Ordering::Equal),
            Relation::Greater => matches!(ordering, Ordering::Greater),
            Relation::GreaterOrEqual => !matches!(ordering, Ordering::Less),
            Relation::Less => matches!(ordering, Ordering::Less),
            Relation::LessOrEqual => !matches!(ordering, Ordering::Greater),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
