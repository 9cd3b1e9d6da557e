// Copyright (c) 2025 Orthodrome Developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the error conditions of the distance calculations.

/// Error conditions which may occur while calculating a distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// An input coordinate or the calculated distance is NaN or infinite.
    #[error("coordinates must be finite numbers")]
    NonFinite,

    /// The inverse Vincenty iteration did not settle within its iteration
    /// limit, typically because the positions are nearly antipodal.
    #[error("Vincenty solution did not converge after {0} iterations")]
    NoConvergence(u32),
}

impl DistanceError {
    /// The value returned by the [`legacy`](crate::legacy) functions in place
    /// of a distance when any error occurs.
    pub const SENTINEL: f64 = -1.0;
}

/// The result of a distance calculation.
pub type Result<T> = core::result::Result<T, DistanceError>;

/// Collapse a distance result into a plain number, replacing any error with
/// [`DistanceError::SENTINEL`].
#[must_use]
pub fn or_sentinel(result: Result<f64>) -> f64 {
    result.unwrap_or(DistanceError::SENTINEL)
}
