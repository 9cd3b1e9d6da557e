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

//! This module contains the series coefficients used by the inverse Vincenty
//! solver on an ellipsoid of revolution.
//!
//! It uses the equations given by T Vincenty in
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application
//! of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, No. 176, April 1975.

#![allow(clippy::suboptimal_flops)]

/// The polynomial coefficients of `A` in `u²`, scaled by 16384.
const A_COEFFS: [f64; 4] = [4096.0, -768.0, 320.0, -175.0];

/// The polynomial coefficients of `B` in `u²`, scaled by 1024.
const B_COEFFS: [f64; 4] = [256.0, -128.0, 74.0, -47.0];

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, lowest order first.
/// * `x` - the variable.
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    let mut result: f64 = 0.;

    if let Some((last, elements)) = coeffs.split_last() {
        result = *last;
        for element in elements.iter().rev() {
            result = result * x + *element;
        }
    }

    result
}

/// Calculate `u²`, the square of the ellipsoid's second eccentricity
/// projected onto the geodesic.
/// Vincenty, Eq. 3 term.
/// * `cos_sq_alpha` - the square of the cosine of the azimuth at the equator.
/// * `ep_2` - the square of the second Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_u_sq(cos_sq_alpha: f64, ep_2: f64) -> f64 {
    cos_sq_alpha * ep_2
}

/// The scale factor `A`.
/// Vincenty, Eq. 3.
/// * `u_sq` - `u²`, see [`calculate_u_sq`].
/// # Examples
/// ```
/// use orthodrome::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
/// use orthodrome::ellipsoid::coefficients::evaluate_a;
///
/// // A meridian geodesic on WGS 84
/// let a = evaluate_a(calculate_sq_2nd_eccentricity(wgs84::F));
/// assert!((a - 1.001_682_751_041_545_6).abs() < 1e-15);
/// ```
#[must_use]
pub fn evaluate_a(u_sq: f64) -> f64 {
    1.0 + u_sq * evaluate_polynomial(&A_COEFFS, u_sq) / 16384.0
}

/// The coefficient `B`.
/// Vincenty, Eq. 4.
/// * `u_sq` - `u²`, see [`calculate_u_sq`].
#[must_use]
pub fn evaluate_b(u_sq: f64) -> f64 {
    u_sq * evaluate_polynomial(&B_COEFFS, u_sq) / 1024.0
}

/// The longitude correction coefficient `C`.
/// Vincenty, Eq. 10.
/// * `f` - the flattening of the ellipsoid.
/// * `cos_sq_alpha` - the square of the cosine of the azimuth at the equator.
#[must_use]
pub fn evaluate_c(f: f64, cos_sq_alpha: f64) -> f64 {
    f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha))
}

/// The difference between the arc length on the auxiliary sphere and the
/// scaled geodesic length, `Δσ`.
/// Vincenty, Eq. 6.
/// * `b` - the coefficient `B`, see [`evaluate_b`].
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length.
/// * `cos_2sigma_m` - the cosine of twice the arc midpoint distance from the
///   equator.
#[must_use]
pub fn evaluate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let cos_sq_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_sq_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_sq_2sigma_m)))
}
