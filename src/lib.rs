// Copyright (c) 2025 Ken Barker

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

//! spherical-earth
//!
//! A library for performing great circle calculations on a spherical model
//! of the Earth.
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle).
//! This library calculates:
//!
//! - the length of the great circle arc between two positions, using the
//!   [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula);
//! - evenly spaced positions along the great circle arc between two
//!   positions, using spherical linear interpolation.
//!
//! The Earth is modelled as a perfect sphere: there is no ellipsoidal
//! correction. For geodesic calculations on the WGS-84 ellipsoid see
//! [icao-wgs84](https://crates.io/crates/icao-wgs84).
//!
//! ## Design
//!
//! Positions are represented by `Coordinate`: a latitude and longitude
//! tagged with the `Unit` (`Degrees` or `Radians`) that they are measured in.
//! Calculations accept positions in either unit and convert them to radians
//! as required. Interpolated positions are always returned in degrees.
//!
//! Distances are calculated on a unit sphere and scaled by a radius chosen by
//! the caller, so the distance has the same unit as the radius.
//! The `Sphere` class holds a radius in `Metres` and the static
//! `EARTH_SPHERE` represents the Earth with the IUGG mean radius.
//!
//! All functions are total: invalid positions are not rejected and NaN or
//! infinite values propagate through the calculations.
//! The `Validate` trait can be used to test positions before calling them.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians` and the `Validate` trait;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod coordinate;
pub mod distance;
pub mod interpolation;
pub mod sphere;

pub use angle_sc::{Degrees, Radians, Validate};
pub use coordinate::{to_degrees, to_radians, Coordinate, Unit};
pub use distance::great_circle_distance;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use interpolation::{
    checked_great_circle_intermediate, great_circle_intermediate, great_circle_midpoint,
    IntermediatePoints,
};
pub use unit_sphere::LatLong;

/// The parameters of a `Sphere`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// The radius of the sphere.
    radius: Metres,
}

impl Sphere {
    /// Constructor.
    /// * `radius` - the radius of the `Sphere`.
    #[must_use]
    pub const fn new(radius: Metres) -> Self {
        Self { radius }
    }

    /// Construct a `Sphere` with the mean radius of the Earth.
    #[must_use]
    pub const fn earth() -> Self {
        Self::new(sphere::earth::MEAN_RADIUS)
    }

    /// The radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> Metres {
        self.radius
    }

    /// Convert a great circle arc length on the unit sphere to a distance on
    /// this sphere.
    /// * `arc_length` - the arc length in radians.
    #[must_use]
    pub fn arc_length_to_metres(&self, arc_length: Radians) -> Metres {
        sphere::convert_radians_to_metres(arc_length, self.radius)
    }

    /// Convert a distance on this sphere to a great circle arc length on the
    /// unit sphere.
    /// * `distance` - the distance in metres.
    #[must_use]
    pub fn metres_to_arc_length(&self, distance: Metres) -> Radians {
        sphere::convert_metres_to_radians(distance, self.radius)
    }

    /// Calculate the great circle distance between a pair of positions on
    /// this sphere.
    /// * `p`, `q` - the positions, in either `Unit`.
    ///
    /// returns the distance in metres.
    /// # Examples
    /// ```
    /// use spherical_earth::*;
    ///
    /// let london = Coordinate::degrees(51.4775, -0.461389);
    /// let sydney = Coordinate::degrees(-33.946111, 151.177222);
    ///
    /// let distance = EARTH_SPHERE.distance(&london, &sydney);
    /// let distance_nm = NauticalMiles::from(distance);
    /// println!("London-Sydney distance: {:?}", distance_nm);
    /// ```
    #[must_use]
    pub fn distance(&self, p: &Coordinate, q: &Coordinate) -> Metres {
        self.arc_length_to_metres(distance::calculate_central_angle(p, q))
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::earth()
    }
}

/// A static instance of the Earth `Sphere`.
pub static EARTH_SPHERE: Sphere = Sphere::earth();
