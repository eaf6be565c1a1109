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

//! # Safecmp Core
//!
//! Mathematically correct comparisons between integers of mismatched
//! signedness and width. Comparing a signed and an unsigned integer with
//! the legacy C-style promotion rules silently gives the wrong answer for
//! negative operands; this crate provides exact results for every pairing
//! of the primitive integer types, plus a policy axis for call sites that
//! want to detect where the legacy comparison would have differed.
//!
//! ## Modules
//!
//! - `operand`: The `IntOperand` trait tagging each primitive integer type
//!   with its signedness and width at the type level. Booleans and floats
//!   do not implement it, so misuse fails to compile.
//! - `value`: The transparent `Value<T>` wrapper and the `wrap` entry
//!   point; wrapped values compare correctly through the ordinary
//!   relational operators.
//! - `relation`: The six comparison tags with display symbols.
//! - `policy`: Divergence policies (silent, abort, raise) and the
//!   recoverable `DivergenceError`.
//! - `dispatch`: The public dispatchers: `ExactCompare`,
//!   `UncheckedCompare` and the policy-guarded `GuardedCompare<P>` with
//!   its `SilentCompare`/`AbortingCompare`/`RaisingCompare` aliases.
//!
//! ## Usage
//!
//! ```rust
//! use safecmp_core::dispatch::{ExactCompare, RaisingCompare, UncheckedCompare};
//! use safecmp_core::value::wrap;
//!
//! let index: i32 = -1;
//! let len: u32 = 1;
//!
//! // Legacy promotion claims the index is not below the length.
//! assert!(!UncheckedCompare::less(index, len));
//!
//! // The exact comparison disagrees, whichever syntax you prefer.
//! assert!(ExactCompare::less(index, len));
//! assert!(wrap(index) < wrap(len));
//!
//! // The raising mode reports the divergence instead of picking silently.
//! assert!(RaisingCompare::less(index, len).is_err());
//! ```

pub mod dispatch;
pub mod operand;
pub mod policy;
pub mod relation;
pub mod value;

mod correct;
mod naive;
