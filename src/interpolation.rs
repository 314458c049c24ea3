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

//! The interpolation module contains functions for calculating positions
//! along the great circle arc between two positions.
//!
//! Positions are interpolated by spherical linear interpolation: the
//! endpoints are blended as Cartesian vectors on the unit sphere and the
//! result is converted back to a latitude and longitude.
//!
//! The interpolation divides by the sine of the arc length, so it is
//! undefined when the endpoints are coincident or antipodal.
//! `great_circle_intermediate` lets the resulting NaN or Inf values
//! propagate, `checked_great_circle_intermediate` returns `None` instead.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::coordinate::{to_degrees, to_radians, Coordinate};
use crate::distance::calculate_central_angle;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use unit_sphere::great_circle;

/// Calculate the number of points to interpolate.
/// * `n` - the requested number of points.
///
/// returns `n` rounded to the nearest integer, at least 1.
/// NaN is 1 and values larger than `usize::MAX` saturate to `usize::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn effective_count(n: f64) -> usize {
    // NaN.max(1.0) is 1.0
    libm::round(n).max(1.0) as usize
}

/// The great circle arc between two positions on the unit sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Arc {
    /// sin and cos of the start latitude and longitude.
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lon1: f64,
    cos_lon1: f64,
    /// sin and cos of the end latitude and longitude.
    sin_lat2: f64,
    cos_lat2: f64,
    sin_lon2: f64,
    cos_lon2: f64,
    /// The arc length in radians.
    d: f64,
    sin_d: f64,
}

impl Arc {
    fn new(p: &Coordinate, q: &Coordinate) -> Self {
        let a = to_radians(p);
        let b = to_radians(q);
        let d = calculate_central_angle(&a, &b).0;
        Self {
            sin_lat1: libm::sin(a.latitude()),
            cos_lat1: libm::cos(a.latitude()),
            sin_lon1: libm::sin(a.longitude()),
            cos_lon1: libm::cos(a.longitude()),
            sin_lat2: libm::sin(b.latitude()),
            cos_lat2: libm::cos(b.latitude()),
            sin_lon2: libm::sin(b.longitude()),
            cos_lon2: libm::cos(b.longitude()),
            d,
            sin_d: libm::sin(d),
        }
    }

    /// Whether the positions are (nearly) coincident or antipodal, or NaN.
    fn is_degenerate(&self) -> bool {
        self.sin_d.is_nan() || libm::fabs(self.sin_d) < great_circle::MIN_VALUE
    }

    /// The position at `fraction` of the way along the arc, in degrees.
    fn position(&self, fraction: f64) -> Coordinate {
        let a = libm::sin((1.0 - fraction) * self.d) / self.sin_d;
        let b = libm::sin(fraction * self.d) / self.sin_d;

        let x = a * self.cos_lat1 * self.cos_lon1 + b * self.cos_lat2 * self.cos_lon2;
        let y = a * self.cos_lat1 * self.sin_lon1 + b * self.cos_lat2 * self.sin_lon2;
        let z = a * self.sin_lat1 + b * self.sin_lat2;

        let lat = libm::atan2(z, libm::sqrt(x * x + y * y));
        let lon = libm::atan2(y, x);
        to_degrees(&Coordinate::radians(lat, lon))
    }
}

/// An iterator over evenly spaced positions along the great circle arc
/// between two positions, excluding the positions themselves.
///
/// The positions are yielded in order from the start position to the end
/// position, in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct IntermediatePoints {
    arc: Arc,
    /// The number of positions yielded so far.
    index: usize,
    /// The total number of positions.
    count: usize,
}

impl IntermediatePoints {
    /// Constructor.
    /// * `p`, `q` - the start and end positions, in either `Unit`.
    /// * `n` - the number of positions, see `effective_count`.
    #[must_use]
    pub fn new(p: &Coordinate, q: &Coordinate, n: f64) -> Self {
        let arc = Arc::new(p, q);
        if arc.is_degenerate() {
            log::debug!(
                "degenerate great circle arc: {:?} to {:?}, length: {} radians",
                p,
                q,
                arc.d
            );
        }
        Self {
            arc,
            index: 0,
            count: effective_count(n),
        }
    }

    /// Whether the start and end positions are coincident or antipodal, so
    /// that the great circle between them is undefined.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.arc.is_degenerate()
    }
}

impl Iterator for IntermediatePoints {
    type Item = Coordinate;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.count {
            self.index += 1;
            let fraction = self.index as f64 / (self.count as f64 + 1.0);
            Some(self.arc.position(fraction))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntermediatePoints {}

impl FusedIterator for IntermediatePoints {}

/// Calculate the position at a fraction of the way along the great circle
/// arc between two positions.
/// * `p`, `q` - the start and end positions, in either `Unit`.
/// * `fraction` - the fraction of the arc length from `p`.
///
/// returns the position in degrees.
#[must_use]
pub fn calculate_intermediate_point(p: &Coordinate, q: &Coordinate, fraction: f64) -> Coordinate {
    Arc::new(p, q).position(fraction)
}

/// Calculate the position half way along the great circle arc between two
/// positions.
/// * `p`, `q` - the start and end positions, in either `Unit`.
///
/// returns the mid point in degrees.
#[must_use]
pub fn great_circle_midpoint(p: &Coordinate, q: &Coordinate) -> Coordinate {
    calculate_intermediate_point(p, q, 0.5)
}

/// Calculate evenly spaced positions along the great circle arc between two
/// positions.
/// * `p`, `q` - the start and end positions, in either `Unit`.
/// * `n` - the number of positions: rounded to the nearest integer, at least 1.
///
/// returns the positions in degrees, ordered from `p` to `q`. The positions
/// are NaN or infinite if `p` and `q` are coincident or antipodal.
///
/// # Panics
///
/// The function will panic (or abort on allocation failure) if `n` is too
/// large for the positions to be allocated, e.g. if `n` is infinite.
/// # Examples
/// ```
/// use spherical_earth::{great_circle_intermediate, Coordinate, Unit};
///
/// let a = Coordinate::degrees(0.0, 0.0);
/// let b = Coordinate::degrees(0.0, 90.0);
/// let points = great_circle_intermediate(&a, &b, 2.0);
/// assert_eq!(2, points.len());
/// assert_eq!(Unit::Degrees, points[0].unit());
/// assert!((30.0 - points[0].longitude()).abs() < 1e-12);
/// assert!((60.0 - points[1].longitude()).abs() < 1e-12);
/// ```
#[must_use]
pub fn great_circle_intermediate(p: &Coordinate, q: &Coordinate, n: f64) -> Vec<Coordinate> {
    IntermediatePoints::new(p, q, n).collect()
}

/// Calculate evenly spaced positions along the great circle arc between two
/// positions, if the great circle between them is defined.
/// * `p`, `q` - the start and end positions, in either `Unit`.
/// * `n` - the number of positions: rounded to the nearest integer, at least 1.
///
/// returns the positions in degrees, ordered from `p` to `q`, or None if
/// `p` and `q` are coincident or antipodal.
///
/// # Panics
///
/// The function will panic if `n` is too large for the positions to be
/// allocated, see `great_circle_intermediate`.
#[must_use]
pub fn checked_great_circle_intermediate(
    p: &Coordinate,
    q: &Coordinate,
    n: f64,
) -> Option<Vec<Coordinate>> {
    let points = IntermediatePoints::new(p, q, n);
    if points.is_degenerate() {
        None
    } else {
        Some(points.collect())
    }
}
