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

//! The distance module contains functions for calculating the great circle
//! distance between two positions on the surface of a sphere using the
//! [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
//!
//! The central angle between the positions is calculated on a unit sphere
//! and then scaled by the radius of the sphere, so the distance is returned
//! in whatever linear unit the radius is given in.

#![allow(clippy::suboptimal_flops)]

use crate::coordinate::{to_radians, Coordinate};
use angle_sc::Radians;

/// Calculate the haversine of the central angle between two positions.
/// * `lat1`, `lat2` - the latitudes of the positions in radians.
/// * `delta_lat` - the latitude difference in radians.
/// * `delta_lon` - the longitude difference in radians.
///
/// returns the haversine, in the range [0.0, 1.0] for valid positions.
#[must_use]
pub fn calculate_haversine(lat1: f64, lat2: f64, delta_lat: f64, delta_lon: f64) -> f64 {
    let sin_half_lat = libm::sin(delta_lat / 2.0);
    let sin_half_lon = libm::sin(delta_lon / 2.0);
    sin_half_lat * sin_half_lat
        + libm::cos(lat1) * libm::cos(lat2) * (sin_half_lon * sin_half_lon)
}

/// Calculate the central angle between a pair of positions.
/// * `p`, `q` - the positions, in either `Unit`.
///
/// returns the great circle distance on a unit sphere in `Radians`.
#[must_use]
pub fn calculate_central_angle(p: &Coordinate, q: &Coordinate) -> Radians {
    let a = to_radians(p);
    let b = to_radians(q);

    let delta_lat = b.latitude() - a.latitude();
    let delta_lon = b.longitude() - a.longitude();
    let h = calculate_haversine(a.latitude(), b.latitude(), delta_lat, delta_lon);

    // atan2(0, 1) is zero, so coincident positions do not produce a NaN
    Radians(2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h)))
}

/// Calculate the great circle distance between a pair of positions on a
/// sphere.
/// * `p`, `q` - the positions, in either `Unit`.
/// * `radius` - the radius of the sphere.
///
/// returns the distance in the same units as `radius`, or the central angle
/// in radians if `radius` is 1.
/// # Examples
/// ```
/// use spherical_earth::{great_circle_distance, sphere, Coordinate};
///
/// let a = Coordinate::degrees(52.5185931, 13.3761064);
/// let b = Coordinate::degrees(52.5204445, 13.4069693);
/// let distance_km = great_circle_distance(&a, &b, sphere::earth::RADIUS_KM);
/// assert!((2.0983416370739216 - distance_km).abs() < 1e-12);
/// ```
#[must_use]
pub fn great_circle_distance(p: &Coordinate, q: &Coordinate, radius: f64) -> f64 {
    calculate_central_angle(p, q).0 * radius
}
