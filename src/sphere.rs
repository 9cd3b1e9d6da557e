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

//! The sphere module contains the distance calculations which model the Earth
//! as a sphere of radius [`MEAN_EARTH_RADIUS_KM`]:
//!
//! - the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula);
//! - the [spherical law of cosines](https://en.wikipedia.org/wiki/Spherical_law_of_cosines);
//! - the spherical Earth projected to a plane, an
//!   [equirectangular projection](https://en.wikipedia.org/wiki/Equirectangular_projection).
//!
//! Each method calculates the central angle between the two positions on a
//! unit sphere and scales it by the radius of the Earth.

#![allow(clippy::suboptimal_flops)]

use crate::error::{DistanceError, Result};
use crate::{LatLong, UnitSystem};
use angle_sc::{Angle, Degrees, Radians};

/// The mean radius of the Earth in kilometres.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6_371.009;

/// Clamp a value to the range [-1, 1], leaving NaN alone.
#[must_use]
fn clamp_unit(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value < -1.0 {
        -1.0
    } else {
        value
    }
}

/// Check that both positions contain finite latitudes and longitudes.
/// * `a`, `b` - the positions.
///
/// # Errors
///
/// `DistanceError::NonFinite` if any coordinate is NaN or infinite.
pub fn check_finite(a: &LatLong, b: &LatLong) -> Result<()> {
    let coordinates = [a.lat().0, a.lon().0, b.lat().0, b.lon().0];
    if coordinates.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        log::trace!("rejected non-finite coordinates: {coordinates:?}");
        Err(DistanceError::NonFinite)
    }
}

/// Calculate the longitude difference from `a` to `b`, in the range [-π, π].
/// * `a`, `b` - the start and finish positions.
#[must_use]
pub fn delta_longitude(a: &LatLong, b: &LatLong) -> Radians {
    Radians::from(Angle::from(b.lon() - a.lon()))
}

/// Scale a central angle by the mean Earth radius into the given units.
fn to_distance(central_angle: Radians, unit: UnitSystem) -> Result<f64> {
    let km = central_angle.0 * MEAN_EARTH_RADIUS_KM;
    if km.is_finite() {
        Ok(unit.convert_kilometres(km))
    } else {
        Err(DistanceError::NonFinite)
    }
}

/// Calculate the central angle between a pair of positions using the
/// haversine formula.
///
/// It is well conditioned for both small and large angles.
/// * `a`, `b` - the positions.
///
/// returns the central angle in radians.
#[must_use]
pub fn calculate_haversine_angle(a: &LatLong, b: &LatLong) -> Radians {
    let lat_a = Angle::from(a.lat());
    let lat_b = Angle::from(b.lat());

    let sin_half_delta_lat = libm::sin(0.5 * (b.lat().0 - a.lat().0).to_radians());
    let sin_half_delta_long = libm::sin(0.5 * delta_longitude(a, b).0);

    let h = sin_half_delta_lat * sin_half_delta_lat
        + lat_a.cos().0 * lat_b.cos().0 * sin_half_delta_long * sin_half_delta_long;
    Radians(2.0 * libm::asin(libm::sqrt(clamp_unit(h))))
}

/// Calculate the central angle between a pair of positions using the
/// spherical law of cosines.
///
/// Note: for positions only a few metres apart the argument of `acos` is
/// within rounding error of one, so the result loses precision. Coincident
/// positions may give an angle of a few times 1e-8 radians instead of zero.
/// Use [`calculate_haversine_angle`] for short distances.
/// * `a`, `b` - the positions.
///
/// returns the central angle in radians.
#[must_use]
pub fn calculate_slc_angle(a: &LatLong, b: &LatLong) -> Radians {
    let lat_a = Angle::from(a.lat());
    let lat_b = Angle::from(b.lat());
    let cos_delta_long = libm::cos(delta_longitude(a, b).0);

    let cos_angle =
        lat_a.sin().0 * lat_b.sin().0 + lat_a.cos().0 * lat_b.cos().0 * cos_delta_long;
    Radians(libm::acos(clamp_unit(cos_angle)))
}

/// Calculate the central angle between a pair of positions projected onto
/// an equirectangular plane centred on their mean latitude.
///
/// It is only accurate for positions a few hundred kilometres apart, away
/// from the poles.
///
/// Note: the longitude difference is taken as given, not wrapped, so
/// positions either side of the antimeridian are measured the long way
/// round, e.g. 179.5°W to 179.5°E is 359° of longitude, not 1°.
/// * `a`, `b` - the positions.
///
/// returns the approximate central angle in radians.
#[must_use]
pub fn calculate_sep_angle(a: &LatLong, b: &LatLong) -> Radians {
    let mean_lat = Angle::from(Degrees(0.5 * (a.lat().0 + b.lat().0)));

    let x = (b.lon().0 - a.lon().0).to_radians() * mean_lat.cos().0;
    let y = (b.lat().0 - a.lat().0).to_radians();
    Radians(libm::sqrt(x * x + y * y))
}

/// Calculate the great circle distance between a pair of positions using
/// the haversine formula.
/// * `a`, `b` - the positions.
/// * `unit` - the units of the result.
///
/// # Errors
///
/// `DistanceError::NonFinite` if a coordinate or the result is not finite.
///
/// # Examples
/// ```
/// use orthodrome::{sphere, Degrees, LatLong, UnitSystem};
///
/// let jfk = LatLong::new(Degrees(40.641766), Degrees(-73.780968));
/// let lhr = LatLong::new(Degrees(51.470020), Degrees(-0.454295));
/// let km = sphere::haversine_distance(&jfk, &lhr, UnitSystem::Si).unwrap();
/// assert!((km - 5540.175419).abs() < 1e-3);
/// ```
pub fn haversine_distance(a: &LatLong, b: &LatLong, unit: UnitSystem) -> Result<f64> {
    check_finite(a, b)?;
    to_distance(calculate_haversine_angle(a, b), unit)
}

/// Calculate the great circle distance between a pair of positions using
/// the spherical law of cosines.
/// * `a`, `b` - the positions.
/// * `unit` - the units of the result.
///
/// # Errors
///
/// `DistanceError::NonFinite` if a coordinate or the result is not finite.
pub fn slc_distance(a: &LatLong, b: &LatLong, unit: UnitSystem) -> Result<f64> {
    check_finite(a, b)?;
    to_distance(calculate_slc_angle(a, b), unit)
}

/// Calculate the approximate distance between a pair of positions using the
/// spherical Earth projected to a plane.
/// * `a`, `b` - the positions.
/// * `unit` - the units of the result.
///
/// # Errors
///
/// `DistanceError::NonFinite` if a coordinate or the result is not finite.
pub fn sep_distance(a: &LatLong, b: &LatLong, unit: UnitSystem) -> Result<f64> {
    check_finite(a, b)?;
    to_distance(calculate_sep_angle(a, b), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use unit_sphere::great_circle;

    fn jfk() -> LatLong {
        LatLong::new(Degrees(40.641766), Degrees(-73.780968))
    }

    fn lax() -> LatLong {
        LatLong::new(Degrees(33.942791), Degrees(-118.410042))
    }

    fn lhr() -> LatLong {
        LatLong::new(Degrees(51.470020), Degrees(-0.454295))
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(Ok(()), check_finite(&jfk(), &lhr()));

        let nan = LatLong::new(Degrees(f64::NAN), Degrees(0.0));
        assert_eq!(Err(DistanceError::NonFinite), check_finite(&jfk(), &nan));
        let inf = LatLong::new(Degrees(0.0), Degrees(f64::INFINITY));
        assert_eq!(Err(DistanceError::NonFinite), check_finite(&inf, &jfk()));
    }

    #[test]
    fn test_delta_longitude_crosses_antimeridian() {
        let a = LatLong::new(Degrees(0.0), Degrees(179.5));
        let b = LatLong::new(Degrees(0.0), Degrees(-179.5));
        assert!(is_within_tolerance(
            1.0_f64.to_radians(),
            delta_longitude(&a, &b).0,
            f64::EPSILON
        ));
        assert!(is_within_tolerance(
            -(1.0_f64.to_radians()),
            delta_longitude(&b, &a).0,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_haversine_distance() {
        let result = haversine_distance(&jfk(), &lax(), UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(3974.172567, result, 1e-6));

        // Often quoted as JFK to LAX, these are the JFK to LHR distances.
        let result = haversine_distance(&jfk(), &lhr(), UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(5540.175419, result, 1e-6));

        let result = haversine_distance(&jfk(), &lhr(), UnitSystem::Us).unwrap();
        assert!(is_within_tolerance(3442.505405, result, 1e-6));

        // Pole to pole is half the circumference
        let north = LatLong::new(Degrees(90.0), Degrees(0.0));
        let south = LatLong::new(Degrees(-90.0), Degrees(0.0));
        let result = haversine_distance(&north, &south, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(
            core::f64::consts::PI * MEAN_EARTH_RADIUS_KM,
            result,
            1e-9
        ));
    }

    #[test]
    fn test_haversine_angle_matches_unit_sphere() {
        let pairs = [(jfk(), lax()), (jfk(), lhr()), (lax(), lhr())];
        for (a, b) in &pairs {
            let expected = great_circle::calculate_gc_distance(
                Angle::from(a.lat()),
                Angle::from(b.lat()),
                Angle::from(b.lon() - a.lon()),
            );
            assert!(is_within_tolerance(
                expected.0,
                calculate_haversine_angle(a, b).0,
                1e-11
            ));
        }
    }

    #[test]
    fn test_coincident_positions() {
        for p in [jfk(), lax(), lhr()] {
            assert_eq!(0.0, haversine_distance(&p, &p, UnitSystem::Si).unwrap());
            assert_eq!(0.0, sep_distance(&p, &p, UnitSystem::Us).unwrap());

            // The law of cosines is ill conditioned at zero.
            let result = slc_distance(&p, &p, UnitSystem::Si).unwrap();
            assert!((0.0..=2e-4).contains(&result));
        }
    }

    #[test]
    fn test_slc_distance() {
        let result = slc_distance(&jfk(), &lax(), UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(3974.172567, result, 1e-6));

        let result = slc_distance(&jfk(), &lhr(), UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(5540.175419, result, 1e-6));

        // Equator to North pole
        let equator = LatLong::new(Degrees(0.0), Degrees(0.0));
        let north = LatLong::new(Degrees(90.0), Degrees(0.0));
        let result = slc_distance(&equator, &north, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2 * MEAN_EARTH_RADIUS_KM,
            result,
            1e-9
        ));
    }

    #[test]
    fn test_slc_short_distance_precision_loss() {
        let a = LatLong::new(Degrees(40.0), Degrees(-73.0));
        let b = LatLong::new(Degrees(40.00001), Degrees(-73.00001));

        let haversine = haversine_distance(&a, &b, UnitSystem::Si).unwrap();
        let slc = slc_distance(&a, &b, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(0.001400716, haversine, 1e-9));

        // Agrees to the nearest few metres, not to the nearest millimetre.
        assert!(libm::fabs(haversine - slc) < 5e-5);
    }

    #[test]
    fn test_sep_distance() {
        let result = sep_distance(&jfk(), &lax(), UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(4017.626906, result, 1e-6));

        // Often quoted as JFK to LAX, these are the JFK to LHR distances.
        let result = sep_distance(&jfk(), &lhr(), UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(5784.908563, result, 1e-6));

        // Short distances agree with the haversine formula.
        let ams = LatLong::new(Degrees(52.308056), Degrees(4.764167));
        let sep = sep_distance(&ams, &lhr(), UnitSystem::Si).unwrap();
        let haversine = haversine_distance(&ams, &lhr(), UnitSystem::Si).unwrap();
        assert!(libm::fabs(sep - haversine) < 0.1);
    }

    #[test]
    fn test_sep_distance_across_antimeridian() {
        let a = LatLong::new(Degrees(0.0), Degrees(-179.5));
        let b = LatLong::new(Degrees(0.0), Degrees(179.5));

        // 359 degrees of longitude, the long way round.
        let result = sep_distance(&a, &b, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(39919.035057, result, 1e-6));
        let result = sep_distance(&b, &a, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(39919.035057, result, 1e-6));

        // The other methods take the short way.
        let result = haversine_distance(&a, &b, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(111.195084, result, 1e-6));

        let nrt = LatLong::new(Degrees(35.764722), Degrees(140.386389));
        let sfo = LatLong::new(Degrees(37.618889), Degrees(-122.375));
        let result = sep_distance(&nrt, &sfo, UnitSystem::Si).unwrap();
        assert!(is_within_tolerance(23429.504343, result, 1e-6));
        assert_eq!(
            result,
            crate::legacy::spherical_earth_projection(
                35.764722,
                140.386389,
                37.618889,
                -122.375,
                UnitSystem::Si
            )
        );
    }

    #[test]
    fn test_non_finite_positions() {
        let nan = LatLong::new(Degrees(f64::NAN), Degrees(-73.780968));
        let inf = LatLong::new(Degrees(40.641766), Degrees(f64::NEG_INFINITY));

        for bad in [nan, inf] {
            assert_eq!(
                Err(DistanceError::NonFinite),
                haversine_distance(&bad, &lhr(), UnitSystem::Si)
            );
            assert_eq!(
                Err(DistanceError::NonFinite),
                slc_distance(&lhr(), &bad, UnitSystem::Us)
            );
            assert_eq!(
                Err(DistanceError::NonFinite),
                sep_distance(&bad, &bad, UnitSystem::Si)
            );
        }
    }
}
