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

//! orthodrome
//!
//! A library for calculating the
//! [great-circle distance](https://en.wikipedia.org/wiki/Great-circle_distance)
//! between two positions on the surface of the Earth, given their latitudes
//! and longitudes in decimal degrees.
//!
//! ## Methods
//!
//! The library provides four methods which trade accuracy for computational
//! cost, see [`Method`]:
//!
//! - [Haversine](sphere::haversine_distance): the great circle distance on a
//!   sphere of the Earth's mean radius, well conditioned at all distances;
//! - [Spherical Law of Cosines](sphere::slc_distance): the same great circle
//!   distance, but it loses precision for positions a few metres apart;
//! - [Vincenty](vincenty::vincenty_distance): the geodesic distance on the
//!   [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//!   ellipsoid, solved by iteration. Nearly antipodal positions may not
//!   converge, see [`DistanceError::NoConvergence`];
//! - [Spherical Earth Projection](sphere::sep_distance): a flat
//!   equirectangular approximation, only suitable for short distances.
//!
//! Distances are returned in kilometres or statute miles, see [`UnitSystem`].
//!
//! ## Errors
//!
//! All calculations return a [`Result`](error::Result). Non-finite coordinates
//! are rejected with [`DistanceError::NonFinite`]; nothing panics.
//! The [`legacy`] functions take plain numbers and return `-1` in place of an
//! error, for callers that expect a sentinel value.
//!
//! ## Design
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//!
//! # Examples
//! ```
//! use orthodrome::{Degrees, LatLong, Method, UnitSystem};
//!
//! let jfk = LatLong::new(Degrees(40.641766), Degrees(-73.780968));
//! let lax = LatLong::new(Degrees(33.942791), Degrees(-118.410042));
//!
//! for method in Method::ALL {
//!     let km = method.distance(&jfk, &lax, UnitSystem::Si).unwrap();
//!     println!("{method}: {km:.3} km");
//! }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod error;
pub mod legacy;
pub mod sphere;
pub mod units;
pub mod vincenty;

pub use angle_sc::{Angle, Degrees, Radians};
pub use error::DistanceError;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
pub use units::UnitSystem;

use lazy_static::lazy_static;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The arithmetic mean radius of the ellipsoid.
    mean_radius: Metres,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        let b = ellipsoid::calculate_minor_axis(a, f);
        Self {
            a,
            f,
            b,
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
            mean_radius: ellipsoid::calculate_mean_radius(a, b),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The arithmetic mean radius of the ellipsoid.
    #[must_use]
    pub const fn mean_radius(&self) -> Metres {
        self.mean_radius
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }
}

lazy_static! {
    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();
}

/// A method of calculating the distance between a pair of positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// The haversine formula on a sphere.
    Haversine,
    /// The spherical law of cosines.
    SphericalLawOfCosines,
    /// Vincenty's inverse method on the WGS-84 ellipsoid.
    Vincenty,
    /// The spherical Earth projected to a plane.
    SphericalEarthProjection,
}

impl Method {
    /// All the methods, most accurate spherical method first.
    pub const ALL: [Self; 4] = [
        Self::Haversine,
        Self::SphericalLawOfCosines,
        Self::Vincenty,
        Self::SphericalEarthProjection,
    ];

    /// The name of the method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Haversine => "Haversine",
            Self::SphericalLawOfCosines => "Spherical Law of Cosines",
            Self::Vincenty => "Vincenty",
            Self::SphericalEarthProjection => "Spherical Earth Projection",
        }
    }

    /// Calculate the distance between a pair of positions.
    /// * `a`, `b` - the positions.
    /// * `unit` - the units of the result.
    ///
    /// # Errors
    ///
    /// `DistanceError::NonFinite` if a coordinate or the result is not finite.  
    /// `DistanceError::NoConvergence` if the method is `Vincenty` and the
    /// positions are too close to antipodal.
    pub fn distance(self, a: &LatLong, b: &LatLong, unit: UnitSystem) -> error::Result<f64> {
        match self {
            Self::Haversine => sphere::haversine_distance(a, b, unit),
            Self::SphericalLawOfCosines => sphere::slc_distance(a, b, unit),
            Self::Vincenty => vincenty::vincenty_distance(a, b, unit),
            Self::SphericalEarthProjection => sphere::sep_distance(a, b, unit),
        }
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
