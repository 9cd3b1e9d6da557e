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

//! The vincenty module contains the inverse solution of T Vincenty's
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application
//! of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).
//!
//! It iterates on the longitude difference on the auxiliary sphere, `λ`, until
//! it changes by less than [`CONVERGENCE_TOLERANCE`]. Nearly antipodal
//! positions may not converge within [`MAX_ITERATIONS`], in which case
//! [`DistanceError::NoConvergence`] is returned, unless a [`Fallback`] is
//! configured in [`VincentyOptions`].

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::coefficients::{
    calculate_u_sq, evaluate_a, evaluate_b, evaluate_c, evaluate_delta_sigma,
};
use crate::error::{DistanceError, Result};
use crate::sphere::{calculate_haversine_angle, check_finite, delta_longitude};
use crate::{Ellipsoid, LatLong, Metres, UnitSystem, WGS84_ELLIPSOID};
use angle_sc::{Angle, Radians};

/// The maximum number of iterations to attempt.
pub const MAX_ITERATIONS: u32 = 100;

/// The change in `λ` below which the iteration has converged.
pub const CONVERGENCE_TOLERANCE: Radians = Radians(1e-12);

/// What to do when the iteration does not converge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fallback {
    /// Return [`DistanceError::NoConvergence`].
    #[default]
    None,
    /// Return the great circle distance on a sphere of the ellipsoid's mean
    /// radius.
    Spherical,
}

/// The parameters of the inverse Vincenty iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VincentyOptions {
    /// The maximum number of iterations to attempt.
    pub max_iterations: u32,
    /// The change in `λ` below which the iteration has converged.
    pub tolerance: Radians,
    /// What to do when the iteration does not converge.
    pub fallback: Fallback,
}

impl Default for VincentyOptions {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            tolerance: CONVERGENCE_TOLERANCE,
            fallback: Fallback::None,
        }
    }
}

/// The solution of the inverse problem between a pair of positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The geodesic length on the ellipsoid.
    pub length: Metres,
    /// The great circle arc length on the auxiliary sphere.
    pub arc_length: Radians,
    /// The number of iterations performed.
    pub iterations: u32,
}

/// The great circle arc on the auxiliary sphere found by the iteration.
#[derive(Clone, Copy, Debug)]
struct AuxiliaryArc {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

impl AuxiliaryArc {
    /// The arc between antipodal positions on a meridian, i.e. pole to pole.
    /// * `sin_u1_u2` - the product of the sines of the parametric latitudes.
    fn antipodal_meridian(sin_u1_u2: f64) -> Self {
        Self {
            sin_sigma: 0.0,
            cos_sigma: -1.0,
            sigma: core::f64::consts::PI,
            cos_sq_alpha: 1.0,
            cos_2sigma_m: -1.0 - 2.0 * sin_u1_u2,
        }
    }

    /// Convert the arc to a geodesic length on the ellipsoid.
    /// Vincenty, Eqs. 3, 4, 6 and 19.
    fn length(&self, ellipsoid: &Ellipsoid) -> Metres {
        let u_sq = calculate_u_sq(self.cos_sq_alpha, ellipsoid.ep_2());
        let a = evaluate_a(u_sq);
        let b = evaluate_b(u_sq);
        let delta_sigma =
            evaluate_delta_sigma(b, self.sin_sigma, self.cos_sigma, self.cos_2sigma_m);
        Metres(ellipsoid.b().0 * a * (self.sigma - delta_sigma))
    }
}

/// Calculate the next estimate of `λ`, the longitude difference on the
/// auxiliary sphere.
/// Vincenty, Eq. 11.
#[allow(clippy::too_many_arguments)]
#[must_use]
fn next_lambda(
    delta_long: f64,
    f: f64,
    c: f64,
    sin_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    delta_long
        + (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
}

/// Calculate the geodesic length between a pair of positions on the
/// ellipsoid using Vincenty's inverse method.
/// @pre |lat| <= 90.0 degrees.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `options` - the iteration parameters.
///
/// returns the geodesic length, the arc length on the auxiliary sphere and
/// the number of iterations.
///
/// # Errors
///
/// `DistanceError::NonFinite` if a coordinate or the result is not finite.  
/// `DistanceError::NoConvergence` if `λ` did not converge within
/// `options.max_iterations` and `options.fallback` is `Fallback::None`.
///
/// # Examples
/// ```
/// use orthodrome::vincenty::{calculate_inverse, VincentyOptions};
/// use orthodrome::{Degrees, LatLong, WGS84_ELLIPSOID};
///
/// let jfk = LatLong::new(Degrees(40.641766), Degrees(-73.780968));
/// let lhr = LatLong::new(Degrees(51.470020), Degrees(-0.454295));
/// let solution =
///     calculate_inverse(&jfk, &lhr, &WGS84_ELLIPSOID, &VincentyOptions::default()).unwrap();
/// assert!((solution.length.0 - 5_555_065.686).abs() < 1.0);
/// ```
pub fn calculate_inverse(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
    options: &VincentyOptions,
) -> Result<InverseSolution> {
    check_finite(a, b)?;

    // project latitudes onto the auxiliary sphere
    let beta1 = ellipsoid.calculate_parametric_latitude(Angle::from(a.lat()));
    let beta2 = ellipsoid.calculate_parametric_latitude(Angle::from(b.lat()));
    let (sin_u1, cos_u1) = (beta1.sin().0, beta1.cos().0);
    let (sin_u2, cos_u2) = (beta2.sin().0, beta2.cos().0);

    let delta_long = delta_longitude(a, b).0;
    let f = ellipsoid.f();

    let mut lambda = delta_long;
    let mut arc = None;
    let mut iterations = 0;
    while iterations < options.max_iterations {
        iterations += 1;

        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        let x = cos_u2 * sin_lambda;
        let y = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = libm::sqrt(x * x + y * y);
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;

        if sin_sigma == 0.0 {
            if cos_sigma < 0.0 {
                arc = Some(AuxiliaryArc::antipodal_meridian(sin_u1 * sin_u2));
                break;
            }

            // coincident positions
            return Ok(InverseSolution {
                length: Metres(0.0),
                arc_length: Radians(0.0),
                iterations,
            });
        }

        let sigma = libm::atan2(sin_sigma, cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // cos_sq_alpha is zero on an equatorial line
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };

        let c = evaluate_c(f, cos_sq_alpha);
        let previous = lambda;
        lambda = next_lambda(
            delta_long,
            f,
            c,
            sin_alpha,
            sigma,
            sin_sigma,
            cos_sigma,
            cos_2sigma_m,
        );
        if !lambda.is_finite() {
            return Err(DistanceError::NonFinite);
        }

        if libm::fabs(lambda - previous) < options.tolerance.0 {
            arc = Some(AuxiliaryArc {
                sin_sigma,
                cos_sigma,
                sigma,
                cos_sq_alpha,
                cos_2sigma_m,
            });
            break;
        }
    }

    let Some(arc) = arc else {
        return solve_without_convergence(a, b, ellipsoid, options, iterations);
    };

    let length = arc.length(ellipsoid);
    if !length.0.is_finite() {
        return Err(DistanceError::NonFinite);
    }

    log::debug!("Vincenty converged after {iterations} iterations");
    Ok(InverseSolution {
        length,
        arc_length: Radians(arc.sigma),
        iterations,
    })
}

/// Handle an iteration which did not converge, according to `options.fallback`.
fn solve_without_convergence(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
    options: &VincentyOptions,
    iterations: u32,
) -> Result<InverseSolution> {
    match options.fallback {
        Fallback::None => {
            log::warn!("Vincenty did not converge after {iterations} iterations");
            Err(DistanceError::NoConvergence(iterations))
        }
        Fallback::Spherical => {
            log::warn!(
                "Vincenty did not converge after {iterations} iterations, using the spherical distance"
            );
            let arc_length = calculate_haversine_angle(a, b);
            Ok(InverseSolution {
                length: Metres(ellipsoid.mean_radius().0 * arc_length.0),
                arc_length,
                iterations,
            })
        }
    }
}

/// Calculate the geodesic distance between a pair of positions on the
/// WGS 84 ellipsoid using Vincenty's inverse method and the default
/// [`VincentyOptions`].
/// * `a`, `b` - the positions.
/// * `unit` - the units of the result.
///
/// # Errors
///
/// `DistanceError::NonFinite` if a coordinate or the result is not finite.  
/// `DistanceError::NoConvergence` if the positions are too close to antipodal
/// for the iteration to converge.
pub fn vincenty_distance(a: &LatLong, b: &LatLong, unit: UnitSystem) -> Result<f64> {
    calculate_inverse(a, b, &WGS84_ELLIPSOID, &VincentyOptions::default())
        .map(|solution| unit.convert_metres(solution.length))
}
