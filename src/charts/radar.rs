use std::f32::consts::{FRAC_PI_2, TAU};

use iced::mouse;
use iced::widget::canvas::{self, Cache, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::api::models::PerformanceMetric;
use crate::theme;

/// Fixed normalization ceiling for every axis. A configuration constant,
/// not a derived statistic.
pub const NORMALIZATION_CEILING: f32 = 250.0;

/// Concentric reference rings drawn behind the blob.
pub const RING_COUNT: usize = 5;

const LABEL_RADIUS_RATIO: f32 = 1.18;
const RING_COLOR: Color = Color::from_rgb8(0xcd, 0xcd, 0xcd);

/// Performance radar on the dark card: one axis per metric, values
/// normalized against the fixed ceiling, closed blob filled with partial
/// opacity.
pub struct PerformanceRadar {
    cache: Cache,
    metrics: Vec<PerformanceMetric>,
}

impl PerformanceRadar {
    pub fn new(metrics: Vec<PerformanceMetric>) -> Self {
        Self {
            cache: Cache::new(),
            metrics,
        }
    }
}

/// Axis angles: equal 2π/N spacing from the top (−π/2), clockwise in
/// screen coordinates.
pub(crate) fn axis_angles(count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f32;
    (0..count).map(|index| -FRAC_PI_2 + index as f32 * step).collect()
}

pub(crate) fn vertex(center: Point, radius: f32, angle: f32, fraction: f32) -> Point {
    Point::new(
        center.x + radius * fraction * angle.cos(),
        center.y + radius * fraction * angle.sin(),
    )
}

pub(crate) fn blob_vertices(
    metrics: &[PerformanceMetric],
    center: Point,
    radius: f32,
) -> Vec<Point> {
    axis_angles(metrics.len())
        .into_iter()
        .zip(metrics)
        .map(|(angle, metric)| {
            let fraction = (metric.value / NORMALIZATION_CEILING).clamp(0.0, 1.0);
            vertex(center, radius, angle, fraction)
        })
        .collect()
}

fn closed_polygon(points: &[Point]) -> Path {
    Path::new(|builder| {
        if let Some(first) = points.first() {
            builder.move_to(*first);
            for point in points.iter().skip(1) {
                builder.line_to(*point);
            }
            builder.close();
        }
    })
}

impl canvas::Program<crate::message::Message> for PerformanceRadar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let size = frame.size();
            let background = Path::rectangle(Point::ORIGIN, size);
            frame.fill(&background, theme::CARD_DARK);

            // An empty metric set draws the bare card, which is not an error.
            if self.metrics.is_empty() {
                return;
            }

            let center = Point::new(size.width / 2.0, size.height / 2.0);
            let radius = size.width.min(size.height) * 0.32;
            let angles = axis_angles(self.metrics.len());

            for ring in 1..=RING_COUNT {
                let fraction = ring as f32 / RING_COUNT as f32;
                let ring_points: Vec<Point> = angles
                    .iter()
                    .map(|angle| vertex(center, radius, *angle, fraction))
                    .collect();
                let path = closed_polygon(&ring_points);
                frame.stroke(
                    &path,
                    Stroke::default().with_width(1.0).with_color(RING_COLOR),
                );
            }

            for (angle, metric) in angles.iter().zip(&self.metrics) {
                let anchor = vertex(center, radius, *angle, LABEL_RADIUS_RATIO);
                let offset = anchor.x - center.x;

                // Flip the anchor at the vertical midline so labels grow
                // away from the plot.
                let align_x = if offset > 1.0 {
                    iced::alignment::Horizontal::Left
                } else if offset < -1.0 {
                    iced::alignment::Horizontal::Right
                } else {
                    iced::alignment::Horizontal::Center
                };

                frame.fill_text(Text {
                    content: metric.kind.clone(),
                    position: anchor,
                    color: Color::WHITE,
                    size: 11.0.into(),
                    align_x: align_x.into(),
                    align_y: iced::alignment::Vertical::Center.into(),
                    ..Text::default()
                });
            }

            if self.metrics.len() >= 3 {
                let blob = closed_polygon(&blob_vertices(&self.metrics, center, radius));
                frame.fill(&blob, Color::from_rgba8(0xff, 0x01, 0x01, 0.7));
                frame.stroke(
                    &blob,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(Color::from_rgba8(0xff, 0x01, 0x01, 0.1)),
                );
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn metric(kind: &str, value: f32) -> PerformanceMetric {
        PerformanceMetric {
            kind: kind.to_owned(),
            value,
        }
    }

    #[test]
    fn angular_gaps_close_to_a_full_turn() {
        for count in 3..=8 {
            let angles = axis_angles(count);
            let mut sum = 0.0_f32;
            for index in 0..count {
                let next = angles[(index + 1) % count];
                let mut gap = next - angles[index];
                if gap < 0.0 {
                    gap += TAU;
                }
                sum += gap;
            }
            assert!((sum - TAU).abs() < 1e-4, "count {count}: sum {sum}");
        }
    }

    #[test]
    fn first_axis_points_straight_up_and_proceeds_clockwise() {
        let angles = axis_angles(6);
        assert_eq!(angles[0], -FRAC_PI_2);
        for pair in angles.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn no_axes_for_an_empty_set() {
        assert!(axis_angles(0).is_empty());
        assert!(blob_vertices(&[], Point::ORIGIN, 100.0).is_empty());
    }

    #[test]
    fn values_above_the_ceiling_are_clamped_to_the_outer_ring() {
        let center = Point::new(0.0, 0.0);
        let vertices = blob_vertices(&[metric("cardio", 400.0)], center, 100.0);

        let distance = (vertices[0].x.powi(2) + vertices[0].y.powi(2)).sqrt();
        assert!((distance - 100.0).abs() < 1e-3);
    }

    #[test]
    fn vertex_at_full_fraction_sits_on_the_axis_tip() {
        let center = Point::new(50.0, 50.0);
        let top = vertex(center, 40.0, -FRAC_PI_2, 1.0);
        assert!((top.x - 50.0).abs() < 1e-3);
        assert!((top.y - 10.0).abs() < 1e-3);
    }

    #[test]
    fn blob_layout_is_deterministic() {
        let metrics = vec![
            metric("cardio", 120.0),
            metric("energy", 200.0),
            metric("endurance", 80.0),
            metric("strength", 140.0),
        ];
        let center = Point::new(130.0, 130.0);

        assert_eq!(
            blob_vertices(&metrics, center, 80.0),
            blob_vertices(&metrics, center, 80.0)
        );
    }
}
