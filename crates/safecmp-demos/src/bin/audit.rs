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

//! Audit workflow demonstration.
//!
//! A project that believes its input data is sanitized can run with the
//! raising (or aborting) dispatcher on test data to verify that belief,
//! then switch the central alias to the unchecked dispatcher for
//! performance once convinced. The switch is one type alias away, since
//! every dispatcher exposes the same six entry points.

use safecmp_core::dispatch::{AbortingCompare, RaisingCompare, UncheckedCompare};

fn main() {
    let a: i32 = -1;
    let b: u32 = 1;

    // Step 1: the recoverable audit. The divergence is reported as an
    // error value we can log and continue from.
    match RaisingCompare::less(a, b) {
        Ok(result) => println!("no divergence, {a} < {b} is {result}"),
        Err(e) => println!("divergence caught: {e}"),
    }

    // Step 2: the performant mode a project would switch to after the
    // audit came back clean (here it did not, so this prints the wrong
    // answer on purpose).
    println!(
        "unchecked mode says {a} < {b} is {}",
        UncheckedCompare::less(a, b)
    );

    // Step 3: the hard audit. This writes a diagnostic to stderr and
    // aborts the process, so nothing past this line is reached unless the
    // inputs above are changed to benign values.
    println!(
        "aborting mode says {a} < {b} is {}",
        AbortingCompare::less(a, b)
    );
    println!("inputs were benign, the audit passed");
}
