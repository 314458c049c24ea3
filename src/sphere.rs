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

//! The sphere module contains functions for converting between great circle
//! arc lengths on a unit sphere and distances on a sphere of a given radius.

pub mod earth;

use crate::Metres;
use angle_sc::Radians;

/// Convert a great circle arc length on the unit sphere to a distance.
/// * `arc_length` - the arc length on the unit sphere.
/// * `radius` - the radius of the sphere.
/// # Examples
/// ```
/// use spherical_earth::{Metres, Radians};
/// use spherical_earth::sphere::convert_radians_to_metres;
///
/// let distance = convert_radians_to_metres(Radians(0.5), Metres(1_000.0));
/// assert_eq!(Metres(500.0), distance);
/// ```
#[must_use]
pub fn convert_radians_to_metres(arc_length: Radians, radius: Metres) -> Metres {
    Metres(arc_length.0 * radius.0)
}

/// Convert a distance on a sphere to a great circle arc length on the unit
/// sphere.
/// * `distance` - the distance on the sphere.
/// * `radius` - the radius of the sphere.
#[must_use]
pub fn convert_metres_to_radians(distance: Metres, radius: Metres) -> Radians {
    Radians(distance.0 / radius.0)
}
