//! Centripetal Catmull-Rom smoothing for the session-duration curve,
//! emitted as cubic Bézier segments so the canvas path builder can draw it.

use iced::Point;

const EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub control_a: Point,
    pub control_b: Point,
    pub end: Point,
}

/// Converts a polyline into Bézier segments interpolating every input point.
/// `alpha` is the knot parameterization exponent (0.5 = centripetal).
pub fn catmull_rom(points: &[Point], alpha: f32) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let p0 = if i == 0 { points[0] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() {
            points[i + 2]
        } else {
            points[i + 1]
        };

        let l01 = distance(p0, p1).powf(alpha);
        let l12 = distance(p1, p2).powf(alpha);
        let l23 = distance(p2, p3).powf(alpha);
        let l01_2 = l01 * l01;
        let l12_2 = l12 * l12;
        let l23_2 = l23 * l23;

        // Duplicate neighbors (the endpoints) collapse the tangent onto the
        // segment endpoint itself.
        let control_a = if l01 > EPSILON {
            let a = 2.0 * l01_2 + 3.0 * l01 * l12 + l12_2;
            let n = 3.0 * l01 * (l01 + l12);
            Point::new(
                (p1.x * a - p0.x * l12_2 + p2.x * l01_2) / n,
                (p1.y * a - p0.y * l12_2 + p2.y * l01_2) / n,
            )
        } else {
            p1
        };

        let control_b = if l23 > EPSILON {
            let b = 2.0 * l23_2 + 3.0 * l23 * l12 + l12_2;
            let m = 3.0 * l23 * (l23 + l12);
            Point::new(
                (p2.x * b - p3.x * l12_2 + p1.x * l23_2) / m,
                (p2.y * b - p3.y * l12_2 + p1.y * l23_2) / m,
            )
        } else {
            p2
        };

        segments.push(Segment {
            control_a,
            control_b,
            end: p2,
        });
    }

    segments
}

fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn produces_one_segment_per_gap() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 2.0),
            Point::new(30.0, 8.0),
        ];
        assert_eq!(catmull_rom(&points, 0.5).len(), 3);
    }

    #[test]
    fn fewer_than_two_points_yields_no_segments() {
        assert!(catmull_rom(&[], 0.5).is_empty());
        assert!(catmull_rom(&[Point::new(1.0, 1.0)], 0.5).is_empty());
    }

    #[test]
    fn curve_interpolates_every_input_point() {
        let points = vec![
            Point::new(0.0, 10.0),
            Point::new(50.0, 40.0),
            Point::new(100.0, 20.0),
        ];
        let segments = catmull_rom(&points, 0.5);

        for (segment, expected) in segments.iter().zip(points.iter().skip(1)) {
            assert!(close(segment.end.x, expected.x));
            assert!(close(segment.end.y, expected.y));
        }
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(30.0, 30.0),
        ];

        for segment in catmull_rom(&points, 0.5) {
            assert!(close(segment.control_a.x, segment.control_a.y));
            assert!(close(segment.control_b.x, segment.control_b.y));
        }
    }

    #[test]
    fn smoothing_is_deterministic() {
        let points = vec![
            Point::new(0.0, 3.0),
            Point::new(25.0, 30.0),
            Point::new(50.0, 12.0),
            Point::new(75.0, 45.0),
        ];
        assert_eq!(catmull_rom(&points, 0.5), catmull_rom(&points, 0.5));
    }
}
