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

//! The legacy module contains distance functions which take the latitudes
//! and longitudes as plain numbers in decimal degrees and return a plain
//! number.
//!
//! Any error is reported as `-1`, see
//! [`DistanceError::SENTINEL`](crate::DistanceError::SENTINEL).
//! Note: for [`vincenty`] a failure to converge and invalid input are
//! indistinguishable; use [`crate::vincenty::calculate_inverse`] to tell them
//! apart.

use crate::error::or_sentinel;
use crate::{sphere, vincenty as ellipsoidal, Degrees, LatLong, UnitSystem};

/// Construct the pair of positions from plain coordinates.
fn positions(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (LatLong, LatLong) {
    (
        LatLong::new(Degrees(lat1), Degrees(lon1)),
        LatLong::new(Degrees(lat2), Degrees(lon2)),
    )
}

/// The haversine distance, or `-1` on failure.
/// * `lat1`, `lon1` - the start position in decimal degrees.
/// * `lat2`, `lon2` - the finish position in decimal degrees.
/// * `unit` - the units of the result.
///
/// # Examples
/// ```
/// use orthodrome::{legacy, UnitSystem};
///
/// let km = legacy::haversine(40.641766, -73.780968, 51.470020, -0.454295, UnitSystem::Si);
/// assert!((km - 5540.175419).abs() < 1e-3);
///
/// assert_eq!(-1.0, legacy::haversine(f64::NAN, 0.0, 0.0, 0.0, UnitSystem::Si));
/// ```
#[must_use]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: UnitSystem) -> f64 {
    let (a, b) = positions(lat1, lon1, lat2, lon2);
    or_sentinel(sphere::haversine_distance(&a, &b, unit))
}

/// The spherical law of cosines distance, or `-1` on failure.
/// * `lat1`, `lon1` - the start position in decimal degrees.
/// * `lat2`, `lon2` - the finish position in decimal degrees.
/// * `unit` - the units of the result.
#[must_use]
pub fn spherical_law_of_cosines(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: UnitSystem,
) -> f64 {
    let (a, b) = positions(lat1, lon1, lat2, lon2);
    or_sentinel(sphere::slc_distance(&a, &b, unit))
}

/// The WGS-84 Vincenty distance, or `-1` on failure, including failure to
/// converge.
/// * `lat1`, `lon1` - the start position in decimal degrees.
/// * `lat2`, `lon2` - the finish position in decimal degrees.
/// * `unit` - the units of the result.
#[must_use]
pub fn vincenty(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: UnitSystem) -> f64 {
    let (a, b) = positions(lat1, lon1, lat2, lon2);
    or_sentinel(ellipsoidal::vincenty_distance(&a, &b, unit))
}

/// The spherical Earth projection distance, or `-1` on failure.
/// * `lat1`, `lon1` - the start position in decimal degrees.
/// * `lat2`, `lon2` - the finish position in decimal degrees.
/// * `unit` - the units of the result.
#[must_use]
pub fn spherical_earth_projection(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: UnitSystem,
) -> f64 {
    let (a, b) = positions(lat1, lon1, lat2, lon2);
    or_sentinel(sphere::sep_distance(&a, &b, unit))
}
