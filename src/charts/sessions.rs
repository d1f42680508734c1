use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::model;
use super::scale::{LinearScale, PointScale};
use super::smooth;
use crate::api::models::SessionSample;
use crate::theme;

/// Monday-first weekday initials. Tuesday and Thursday share the "M"; the
/// axis keys disambiguate by position, never by label.
pub(crate) const DAY_INITIALS: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];

const PADDING_TOP: f32 = 64.0;
const PADDING_BOTTOM: f32 = 44.0;
const POINT_PADDING: f32 = 0.5;
const CURVE_ALPHA: f32 = 0.5;
const DOT_RADIUS: f32 = 3.5;
const DOT_RADIUS_HOVERED: f32 = 5.5;
const HOVER_DISTANCE: f32 = 24.0;

pub(crate) fn day_initial(index: usize) -> &'static str {
    DAY_INITIALS[index % 7]
}

/// Average session durations on the red card, drawn as a smoothed curve
/// with a hover reveal toward the right edge.
pub struct SessionChart {
    cache: Cache,
    samples: Vec<SessionSample>,
}

impl SessionChart {
    pub fn new(samples: Vec<SessionSample>) -> Self {
        Self {
            cache: Cache::new(),
            samples,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SessionPoint {
    /// Initial plus positional index, unique even for the two "M" days.
    pub key: String,
    pub initial: &'static str,
    pub minutes: f32,
    pub position: Point,
}

pub(crate) fn layout_points(samples: &[SessionSample], size: Size) -> Vec<SessionPoint> {
    let plot_bottom = size.height - PADDING_BOTTOM;
    let max_minutes = samples
        .iter()
        .map(|sample| sample.session_length)
        .fold(0.0_f32, f32::max)
        .max(1.0);

    let x = PointScale::new(samples.len(), (0.0, size.width), POINT_PADDING);
    let y = LinearScale::new((0.0, max_minutes), (plot_bottom, PADDING_TOP));

    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| SessionPoint {
            key: format!("{}{index}", day_initial(index)),
            initial: day_initial(index),
            minutes: sample.session_length,
            position: Point::new(x.position(index), y.project(sample.session_length)),
        })
        .collect()
}

fn hovered_index(points: &[SessionPoint], cursor: Point) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| (index, (point.position.x - cursor.x).abs()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|(_, distance)| *distance <= HOVER_DISTANCE)
        .map(|(index, _)| index)
}

impl canvas::Program<crate::message::Message> for SessionChart {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<crate::message::Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let size = frame.size();
            let background = Path::rectangle(Point::ORIGIN, size);
            frame.fill(&background, theme::PRIMARY_RED);

            let faded_white = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
            frame.fill_text(Text {
                content: "Durée moyenne des".to_owned(),
                position: Point::new(16.0, 16.0),
                color: faded_white,
                size: 15.0.into(),
                ..Text::default()
            });
            frame.fill_text(Text {
                content: "sessions".to_owned(),
                position: Point::new(16.0, 34.0),
                color: faded_white,
                size: 15.0.into(),
                ..Text::default()
            });

            if self.samples.is_empty() {
                return;
            }

            let points = layout_points(&self.samples, size);
            let positions: Vec<Point> = points.iter().map(|point| point.position).collect();

            if positions.len() >= 2 {
                let segments = smooth::catmull_rom(&positions, CURVE_ALPHA);
                let curve = Path::new(|builder| {
                    builder.move_to(positions[0]);
                    for segment in &segments {
                        builder.bezier_curve_to(
                            segment.control_a,
                            segment.control_b,
                            segment.end,
                        );
                    }
                });
                frame.stroke(
                    &curve,
                    Stroke::default().with_width(2.5).with_color(faded_white),
                );
            }

            for point in &points {
                frame.fill(&Path::circle(point.position, DOT_RADIUS), Color::WHITE);
                frame.fill_text(Text {
                    content: point.initial.to_owned(),
                    position: Point::new(point.position.x, size.height - 28.0),
                    color: faded_white,
                    size: 13.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let points = layout_points(&self.samples, bounds.size());
            if let Some(index) = hovered_index(&points, cursor_pos) {
                let point = &points[index];
                let mut overlay = Frame::new(renderer, bounds.size());

                // "What's ahead" reveal: darken everything right of the
                // hovered point.
                let reveal = Path::rectangle(
                    Point::new(point.position.x, 0.0),
                    Size::new(bounds.width - point.position.x, bounds.height),
                );
                overlay.fill(&reveal, Color::from_rgba(0.0, 0.0, 0.0, 0.1));

                overlay.fill(
                    &Path::circle(point.position, DOT_RADIUS_HOVERED),
                    Color::WHITE,
                );
                overlay.stroke(
                    &Path::circle(point.position, DOT_RADIUS_HOVERED + 3.0),
                    Stroke::default()
                        .with_width(4.0)
                        .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.3)),
                );

                model::draw_tooltip(
                    &mut overlay,
                    point.position,
                    Rectangle {
                        x: 0.0,
                        y: 0.0,
                        width: bounds.width,
                        height: bounds.height,
                    },
                    &[format!("{:.0} min", point.minutes)],
                );

                geometries.push(overlay.into_geometry());
            }
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
