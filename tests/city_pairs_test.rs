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

extern crate spherical_earth;

use angle_sc::{is_within_tolerance, Angle, Degrees};
use spherical_earth::{
    great_circle_distance, great_circle_intermediate, great_circle_midpoint, Coordinate,
    EARTH_SPHERE,
};
use unit_sphere::{great_circle, vector};

const FILENAME: &str = "data/great_circle_city_pairs.csv";

/// name1, lat1, lon1, name2, lat2, lon2, central_angle, mid_lat, mid_lon
type DataRecord = (String, f64, f64, String, f64, f64, f64, f64, f64);

/// Calculate the great circle distance between a pair of positions using
/// the chord between their points on the unit sphere.
fn calculate_chord_central_angle(a: &Coordinate, b: &Coordinate) -> f64 {
    let a = vector::to_point(
        Angle::from(Degrees(a.latitude())),
        Angle::from(Degrees(a.longitude())),
    );
    let b = vector::to_point(
        Angle::from(Degrees(b.latitude())),
        Angle::from(Degrees(b.longitude())),
    );
    great_circle::e2gc_distance(vector::distance(&a, &b)).0
}

#[test]
fn test_city_pairs() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let record = result?;

        let a = Coordinate::degrees(record.1, record.2);
        let b = Coordinate::degrees(record.4, record.5);
        let central_angle = record.6;

        let result = great_circle_distance(&a, &b, 1.0);
        assert!(
            is_within_tolerance(central_angle, result, 1e-12),
            "{} to {}: {}",
            record.0,
            record.3,
            result
        );
        assert_eq!(result, great_circle_distance(&b, &a, 1.0));
        assert_eq!(result * 1852.0, great_circle_distance(&a, &b, 1852.0));
        assert_eq!(
            result * EARTH_SPHERE.radius().0,
            EARTH_SPHERE.distance(&a, &b).0
        );

        // cross check the haversine against the unit sphere chord length
        let chord_angle = calculate_chord_central_angle(&a, &b);
        assert!(
            is_within_tolerance(chord_angle, result, 1e-9),
            "{} to {}: {}",
            record.0,
            record.3,
            chord_angle
        );

        let mid_point = great_circle_midpoint(&a, &b);
        assert!(is_within_tolerance(record.7, mid_point.latitude(), 1e-9));
        assert!(is_within_tolerance(record.8, mid_point.longitude(), 1e-9));

        let points = great_circle_intermediate(&a, &b, 7.0);
        assert_eq!(7, points.len());
        assert_eq!(mid_point, points[3]);

        let mut previous = 0.0;
        for point in &points {
            let distance = great_circle_distance(&a, point, 1.0);
            assert!(previous < distance);
            assert!(distance < result);
            previous = distance;
        }

        count += 1;
    }
    assert_eq!(10, count);

    Ok(())
}
