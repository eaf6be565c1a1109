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

//! The smallest possible demonstration: a negative index against an
//! unsigned length, compared the legacy way and the correct way.

use safecmp_core::dispatch::{ExactCompare, UncheckedCompare};
use safecmp_core::value::wrap;

fn main() {
    let a: i32 = -1;
    let b: u32 = 1;

    println!(
        "legacy C-style comparison: {a} < {b} is {}",
        UncheckedCompare::less(a, b)
    );
    println!(
        "safecmp comparison:        {a} < {b} is {}",
        ExactCompare::less(a, b)
    );
    println!(
        "same, with wrapped values: {a} < {b} is {}",
        wrap(a) < wrap(b)
    );
}
