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

//! The coordinate module contains the `Coordinate` type: a latitude and
//! longitude pair tagged with the `Unit` that its values are measured in,
//! together with functions to convert between the two units.
//!
//! The numeric fields of a `Coordinate` are only meaningful together with
//! its `Unit`: a latitude of 52.5 is a position in Germany when the unit is
//! `Degrees` but an invalid latitude when it is `Radians`.

#![allow(clippy::float_cmp)]

use angle_sc::{Degrees, Radians, Validate};
use core::f64::consts::{FRAC_PI_2, PI};
use unit_sphere::LatLong;

/// The unit of the latitude and longitude values of a `Coordinate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Values are measured in degrees.
    Degrees,
    /// Values are measured in radians.
    Radians,
}

/// A latitude and longitude pair, tagged with its `Unit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    unit: Unit,
}

impl Coordinate {
    /// Constructor.
    /// * `latitude` - the latitude, in `unit`.
    /// * `longitude` - the longitude, in `unit`.
    /// * `unit` - the unit of `latitude` and `longitude`.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, unit: Unit) -> Self {
        Self {
            latitude,
            longitude,
            unit,
        }
    }

    /// Construct a `Coordinate` from a latitude and longitude in degrees.
    #[must_use]
    pub const fn degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, Unit::Degrees)
    }

    /// Construct a `Coordinate` from a latitude and longitude in radians.
    #[must_use]
    pub const fn radians(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, Unit::Radians)
    }

    /// The latitude, measured in `unit`.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude, measured in `unit`.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The unit of the latitude and longitude.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// This `Coordinate` with its values in radians.
    #[must_use]
    pub fn to_radians(&self) -> Self {
        to_radians(self)
    }

    /// This `Coordinate` with its values in degrees.
    #[must_use]
    pub fn to_degrees(&self) -> Self {
        to_degrees(self)
    }
}

impl Validate for Coordinate {
    /// Test whether a `Coordinate` is valid.
    /// Whether both values are finite and |latitude| <= 90°.
    fn is_valid(&self) -> bool {
        let max_latitude = match self.unit {
            Unit::Degrees => 90.0,
            Unit::Radians => FRAC_PI_2,
        };
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && libm::fabs(self.latitude) <= max_latitude
    }
}

impl From<(Degrees, Degrees)> for Coordinate {
    /// Construct a `Coordinate` from a latitude and longitude in `Degrees`.
    fn from(params: (Degrees, Degrees)) -> Self {
        Self::degrees(params.0 .0, params.1 .0)
    }
}

impl From<(Radians, Radians)> for Coordinate {
    /// Construct a `Coordinate` from a latitude and longitude in `Radians`.
    fn from(params: (Radians, Radians)) -> Self {
        Self::radians(params.0 .0, params.1 .0)
    }
}

impl From<&LatLong> for Coordinate {
    fn from(a: &LatLong) -> Self {
        Self::degrees(a.lat().0, a.lon().0)
    }
}

impl From<&Coordinate> for LatLong {
    fn from(a: &Coordinate) -> Self {
        let a = to_degrees(a);
        Self::new(Degrees(a.latitude), Degrees(a.longitude))
    }
}

/// Convert a value in degrees to radians.
#[must_use]
pub fn degrees_to_radians(value: f64) -> f64 {
    value * (PI / 180.0)
}

/// Convert a value in radians to degrees.
#[must_use]
pub fn radians_to_degrees(value: f64) -> f64 {
    value * (180.0 / PI)
}

/// Convert a `Coordinate` to radians.
/// * `c` - the coordinate.
///
/// returns a copy of `c` if it is already in radians.
/// # Examples
/// ```
/// use spherical_earth::{to_radians, Coordinate, Unit};
///
/// let berlin = Coordinate::degrees(52.5185931, 13.3761064);
/// let result = to_radians(&berlin);
/// assert_eq!(Unit::Radians, result.unit());
/// assert!((0.9166223681101755 - result.latitude()).abs() <= f64::EPSILON);
/// ```
#[must_use]
pub fn to_radians(c: &Coordinate) -> Coordinate {
    match c.unit {
        Unit::Degrees => Coordinate::radians(
            degrees_to_radians(c.latitude),
            degrees_to_radians(c.longitude),
        ),
        Unit::Radians => *c,
    }
}

/// Convert a `Coordinate` to degrees.
/// * `c` - the coordinate.
///
/// returns a copy of `c` if it is already in degrees.
#[must_use]
pub fn to_degrees(c: &Coordinate) -> Coordinate {
    match c.unit {
        Unit::Radians => Coordinate::degrees(
            radians_to_degrees(c.latitude),
            radians_to_degrees(c.longitude),
        ),
        Unit::Degrees => *c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    const BERLIN_LAT_DEGREES: f64 = 52.5185931;
    const BERLIN_LON_DEGREES: f64 = 13.3761064;
    const BERLIN_LAT_RADIANS: f64 = 0.9166223681101755;
    const BERLIN_LON_RADIANS: f64 = 0.23345709777708562;

    #[test]
    fn test_coordinate_accessors() {
        let a = Coordinate::new(1.0, 2.0, Unit::Radians);
        assert_eq!(1.0, a.latitude());
        assert_eq!(2.0, a.longitude());
        assert_eq!(Unit::Radians, a.unit());
        assert_eq!(a, Coordinate::radians(1.0, 2.0));
        assert_eq!(Unit::Degrees, Coordinate::degrees(1.0, 2.0).unit());

        let a_clone = a;
        assert_eq!(a_clone, a);
        println!("Coordinate: {:?}", a);
    }

    #[test]
    fn test_to_radians() {
        let a = Coordinate::degrees(BERLIN_LAT_DEGREES, BERLIN_LON_DEGREES);
        let result = to_radians(&a);
        assert_eq!(Unit::Radians, result.unit());
        assert_eq!(BERLIN_LAT_RADIANS, result.latitude());
        assert_eq!(BERLIN_LON_RADIANS, result.longitude());
        assert_eq!(result, a.to_radians());

        // the input is unchanged
        assert_eq!(BERLIN_LAT_DEGREES, a.latitude());
        assert_eq!(Unit::Degrees, a.unit());
    }

    #[test]
    fn test_to_degrees() {
        let a = Coordinate::radians(BERLIN_LAT_RADIANS, BERLIN_LON_RADIANS);
        let result = to_degrees(&a);
        assert_eq!(Unit::Degrees, result.unit());
        assert_eq!(BERLIN_LAT_DEGREES, result.latitude());
        assert_eq!(BERLIN_LON_DEGREES, result.longitude());
        assert_eq!(result, a.to_degrees());
    }

    #[test]
    fn test_conversion_pass_through() {
        let a = Coordinate::radians(BERLIN_LAT_RADIANS, BERLIN_LON_RADIANS);
        assert_eq!(a, to_radians(&a));

        let b = Coordinate::degrees(BERLIN_LAT_DEGREES, BERLIN_LON_DEGREES);
        assert_eq!(b, to_degrees(&b));
    }

    #[test]
    fn test_conversion_round_trip() {
        for lat in -90..=90 {
            for lon in (-180..=180).step_by(15) {
                let a = Coordinate::degrees(f64::from(lat), f64::from(lon));
                let result = to_degrees(&to_radians(&a));
                assert_eq!(Unit::Degrees, result.unit());
                assert!(is_within_tolerance(
                    a.latitude(),
                    result.latitude(),
                    128.0 * f64::EPSILON
                ));
                assert!(is_within_tolerance(
                    a.longitude(),
                    result.longitude(),
                    256.0 * f64::EPSILON
                ));
            }
        }
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(0.0, degrees_to_radians(0.0));
        assert_eq!(0.0, radians_to_degrees(0.0));
        assert!(is_within_tolerance(PI, degrees_to_radians(180.0), f64::EPSILON));
        assert!(is_within_tolerance(
            -FRAC_PI_2,
            degrees_to_radians(-90.0),
            f64::EPSILON
        ));
        assert!(is_within_tolerance(
            180.0,
            radians_to_degrees(PI),
            128.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            -90.0,
            radians_to_degrees(-FRAC_PI_2),
            64.0 * f64::EPSILON
        ));
    }

    #[test]
    fn test_coordinate_is_valid() {
        assert!(Coordinate::degrees(90.0, 180.0).is_valid());
        assert!(Coordinate::degrees(-90.0, -180.0).is_valid());
        assert!(!Coordinate::degrees(90.5, 0.0).is_valid());
        assert!(!Coordinate::degrees(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::degrees(0.0, f64::INFINITY).is_valid());

        assert!(Coordinate::radians(FRAC_PI_2, PI).is_valid());
        assert!(!Coordinate::radians(2.0, 0.0).is_valid());
        // 52.5 is a valid latitude in degrees but not in radians
        assert!(Coordinate::degrees(52.5, 0.0).is_valid());
        assert!(!Coordinate::radians(52.5, 0.0).is_valid());
    }

    #[test]
    fn test_coordinate_from_angles() {
        let a = Coordinate::from((Degrees(42.0), Degrees(29.0)));
        assert_eq!(Coordinate::degrees(42.0, 29.0), a);

        let b = Coordinate::from((Radians(0.5), Radians(-1.0)));
        assert_eq!(Coordinate::radians(0.5, -1.0), b);
    }

    #[test]
    fn test_coordinate_lat_long() {
        let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
        let a = Coordinate::from(&istanbul);
        assert_eq!(Coordinate::degrees(42.0, 29.0), a);

        let lat_long = LatLong::from(&a);
        assert_eq!(istanbul.lat().0, lat_long.lat().0);
        assert_eq!(istanbul.lon().0, lat_long.lon().0);

        let b = Coordinate::radians(FRAC_PI_2 / 2.0, -FRAC_PI_2);
        let lat_long = LatLong::from(&b);
        assert!(is_within_tolerance(
            45.0,
            lat_long.lat().0,
            64.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            -90.0,
            lat_long.lon().0,
            64.0 * f64::EPSILON
        ));
    }
}
