// Copyright (c) 2025 Felix Kahle.
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

//! Writing computed pair sequences as a single line of text.

use std::{
    fmt::Display,
    io::{self, Write},
};
use tally_core::seq::Pair;

/// The error type for writing a report.
#[derive(Debug)]
pub enum ReportError {
    /// The output stream rejected the write or flush.
    Io(io::Error),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to write result: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Renders `pairs` as `[[a, b], [c, d], ...]`.
pub fn render_pairs<T>(pairs: &[Pair<T>]) -> String
where
    T: Display,
{
    let body = pairs
        .iter()
        .map(|[a, b]| format!("[{a}, {b}]"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

/// Writes the rendered `pairs` followed by a newline, then flushes `out`.
pub fn write_pairs<W, T>(out: &mut W, pairs: &[Pair<T>]) -> Result<(), ReportError>
where
    W: Write,
    T: Display,
{
    writeln!(out, "{}", render_pairs(pairs))?;
    out.flush()?;
    Ok(())
}
