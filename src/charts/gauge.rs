use std::f32::consts::PI;

use iced::mouse;
use iced::widget::canvas::{self, path, stroke, Cache, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Radians, Rectangle, Renderer, Theme};

use crate::theme;

/// Angular range of the gauge: a semicircle over the top of the dial.
pub const SWEEP_RANGE: f32 = PI;

// Track runs from the left end of the dial over the top toward the right.
const TRACK_START: f32 = PI;
const TRACK_COLOR: Color = Color::from_rgb8(0xe8, 0xe8, 0xe8);
const ARC_WIDTH: f32 = 10.0;

/// Goal-completion gauge. A pure function of the score: no hover state, no
/// interactivity.
pub struct ScoreGauge {
    cache: Cache,
    score: f32,
}

impl ScoreGauge {
    pub fn new(score: f32) -> Self {
        Self {
            cache: Cache::new(),
            score,
        }
    }
}

/// Foreground sweep for a score, clamped to [0, 100]: zero-length at 0,
/// the full configured range at 100.
pub(crate) fn sweep_angle(score: f32) -> f32 {
    score.clamp(0.0, 100.0) / 100.0 * SWEEP_RANGE
}

impl canvas::Program<crate::message::Message> for ScoreGauge {
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
            frame.fill(&background, theme::CARD_LIGHT);

            frame.fill_text(Text {
                content: "Score".to_owned(),
                position: Point::new(16.0, 16.0),
                color: theme::TEXT_DARK,
                size: 15.0.into(),
                ..Text::default()
            });

            let center = Point::new(size.width / 2.0, size.height * 0.58);
            let radius = size.width.min(size.height) * 0.3;

            let track = Path::new(|builder| {
                builder.arc(path::Arc {
                    center,
                    radius,
                    start_angle: Radians(TRACK_START),
                    end_angle: Radians(TRACK_START + SWEEP_RANGE),
                });
            });
            frame.stroke(
                &track,
                Stroke::default()
                    .with_width(ARC_WIDTH)
                    .with_color(TRACK_COLOR)
                    .with_line_cap(stroke::LineCap::Round),
            );

            let sweep = sweep_angle(self.score);
            if sweep > 0.0 {
                let arc = Path::new(|builder| {
                    builder.arc(path::Arc {
                        center,
                        radius,
                        start_angle: Radians(TRACK_START),
                        end_angle: Radians(TRACK_START + sweep),
                    });
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(ARC_WIDTH)
                        .with_color(theme::PRIMARY_RED)
                        .with_line_cap(stroke::LineCap::Round),
                );
            }

            frame.fill_text(Text {
                content: format!("{:.0}%", self.score.clamp(0.0, 100.0)),
                position: center,
                color: theme::TEXT_DARK,
                size: 24.0.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Center.into(),
                ..Text::default()
            });

            for (line, offset) in [("de votre", 20.0), ("objectif", 36.0)] {
                frame.fill_text(Text {
                    content: line.to_owned(),
                    position: Point::new(center.x, center.y + offset),
                    color: theme::TEXT_MUTED,
                    size: 12.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Center.into(),
                    ..Text::default()
                });
            }
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        mouse::Interaction::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_has_a_zero_length_sweep() {
        assert_eq!(sweep_angle(0.0), 0.0);
    }

    #[test]
    fn full_score_spans_the_whole_range() {
        assert_eq!(sweep_angle(100.0), SWEEP_RANGE);
    }

    #[test]
    fn sweep_is_proportional_in_between() {
        assert!((sweep_angle(50.0) - SWEEP_RANGE / 2.0).abs() < 1e-6);
        assert!((sweep_angle(25.0) - SWEEP_RANGE / 4.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(sweep_angle(150.0), SWEEP_RANGE);
        assert_eq!(sweep_angle(-20.0), 0.0);
    }
}
