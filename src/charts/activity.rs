use iced::mouse;
use iced::widget::canvas::{self, stroke, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::model;
use super::scale::{self, BandScale, LinearScale};
use crate::api::models::ActivitySample;
use crate::theme;

const PADDING_TOP: f32 = 48.0;
const PADDING_RIGHT: f32 = 56.0;
const PADDING_BOTTOM: f32 = 36.0;
const PADDING_LEFT: f32 = 16.0;

// Heavy band padding keeps the paired bars thin, like the reference design.
const BAND_PADDING: f32 = 0.8;
const BAR_CORNER: f32 = 3.0;
const DASH: [f32; 2] = [4.0, 4.0];

/// Daily activity: one band per day holding a weight bar (right axis) and a
/// calories bar (left axis), rounded tops, dashed gridlines on weight ticks.
pub struct ActivityChart {
    cache: Cache,
    samples: Vec<ActivitySample>,
}

impl ActivityChart {
    pub fn new(samples: Vec<ActivitySample>) -> Self {
        Self {
            cache: Cache::new(),
            samples,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarColumn {
    pub label: String,
    pub kilogram: f32,
    pub calories: f32,
    /// Horizontal extent of the whole step, used for hover hit-testing.
    pub step: (f32, f32),
    pub weight_bar: Bar,
    pub calorie_bar: Bar,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ActivityLayout {
    pub plot: Rectangle,
    pub weight_domain: (f32, f32),
    pub calorie_domain: (f32, f32),
    pub columns: Vec<BarColumn>,
}

impl ActivityLayout {
    pub(crate) fn column_at(&self, x: f32) -> Option<&BarColumn> {
        self.columns
            .iter()
            .find(|column| x >= column.step.0 && x < column.step.1)
    }
}

/// Full draw-tree geometry as a pure function of samples and canvas size.
pub(crate) fn layout(samples: &[ActivitySample], size: Size) -> ActivityLayout {
    let plot = Rectangle {
        x: PADDING_LEFT,
        y: PADDING_TOP,
        width: (size.width - PADDING_LEFT - PADDING_RIGHT).max(0.0),
        height: (size.height - PADDING_TOP - PADDING_BOTTOM).max(0.0),
    };

    let weight_domain = scale::weight_domain(samples.iter().map(|sample| sample.kilogram));
    let calorie_domain = (
        0.0,
        scale::calorie_ceiling(samples.iter().map(|sample| sample.calories)),
    );

    let bands = BandScale::new(samples.len(), (plot.x, plot.x + plot.width), BAND_PADDING);
    let baseline = plot.y + plot.height;
    let weight = LinearScale::new(weight_domain, (baseline, plot.y));
    let calories = LinearScale::new(calorie_domain, (baseline, plot.y));

    let columns = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let band_start = bands.band_start(index);
            let bandwidth = bands.bandwidth();
            let bar_width = bandwidth / 2.5;
            let weight_top = weight.project(sample.kilogram).min(baseline);
            let calorie_top = calories.project(sample.calories).min(baseline);
            let step_start = plot.x + index as f32 * bands.step();

            BarColumn {
                label: sample.day.clone(),
                kilogram: sample.kilogram,
                calories: sample.calories,
                step: (step_start, step_start + bands.step()),
                weight_bar: Bar {
                    x: band_start,
                    y: weight_top,
                    width: bar_width,
                    height: baseline - weight_top,
                },
                calorie_bar: Bar {
                    x: band_start + bandwidth / 2.0,
                    y: calorie_top,
                    width: bar_width,
                    height: baseline - calorie_top,
                },
            }
        })
        .collect();

    ActivityLayout {
        plot,
        weight_domain,
        calorie_domain,
        columns,
    }
}

fn rounded_top_bar(bar: Bar) -> Path {
    let radius = BAR_CORNER.min(bar.width / 2.0).min(bar.height);
    Path::new(|builder| {
        builder.move_to(Point::new(bar.x, bar.y + bar.height));
        builder.line_to(Point::new(bar.x, bar.y + radius));
        builder.quadratic_curve_to(
            Point::new(bar.x, bar.y),
            Point::new(bar.x + radius, bar.y),
        );
        builder.line_to(Point::new(bar.x + bar.width - radius, bar.y));
        builder.quadratic_curve_to(
            Point::new(bar.x + bar.width, bar.y),
            Point::new(bar.x + bar.width, bar.y + radius),
        );
        builder.line_to(Point::new(bar.x + bar.width, bar.y + bar.height));
        builder.close();
    })
}

impl canvas::Program<crate::message::Message> for ActivityChart {
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
        if self.samples.is_empty() {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let layout = layout(&self.samples, frame.size());
            let plot = layout.plot;
            if plot.width <= 0.0 || plot.height <= 0.0 {
                return;
            }

            frame.fill_text(Text {
                content: "Activité quotidienne".to_owned(),
                position: Point::new(plot.x, 12.0),
                color: theme::TEXT_DARK,
                size: 15.0.into(),
                ..Text::default()
            });

            draw_legend(frame, plot);

            let baseline = plot.y + plot.height;
            let weight =
                LinearScale::new(layout.weight_domain, (baseline, plot.y));
            for tick in scale::weight_ticks(layout.weight_domain) {
                let y = weight.project(tick);
                let line = Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y));
                frame.stroke(
                    &line,
                    Stroke {
                        line_dash: stroke::LineDash {
                            segments: &DASH,
                            offset: 0,
                        },
                        ..Stroke::default()
                            .with_width(1.0)
                            .with_color(theme::GRID_LINE)
                    },
                );

                frame.fill_text(Text {
                    content: format!("{tick:.0}"),
                    position: Point::new(plot.x + plot.width + 12.0, y - 7.0),
                    color: theme::TEXT_MUTED,
                    size: 12.0.into(),
                    ..Text::default()
                });
            }

            for column in &layout.columns {
                frame.fill(&rounded_top_bar(column.weight_bar), theme::BAR_DARK);
                frame.fill(&rounded_top_bar(column.calorie_bar), theme::PRIMARY_RED);

                let center = (column.step.0 + column.step.1) / 2.0;
                frame.fill_text(Text {
                    content: column.label.clone(),
                    position: Point::new(center, baseline + 10.0),
                    color: theme::TEXT_MUTED,
                    size: 13.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let layout = layout(&self.samples, bounds.size());
            let plot = layout.plot;

            if let Some(column) = layout.column_at(cursor_pos.x) {
                if cursor_pos.y >= plot.y && cursor_pos.y <= plot.y + plot.height {
                    let mut overlay = Frame::new(renderer, bounds.size());

                    // Light band highlight behind the hovered day.
                    let band = Path::rectangle(
                        Point::new(column.step.0, plot.y),
                        Size::new(column.step.1 - column.step.0, plot.height),
                    );
                    overlay.fill(&band, Color::from_rgba8(0xc4, 0xc4, 0xc4, 0.3));

                    model::draw_tooltip(
                        &mut overlay,
                        cursor_pos,
                        plot,
                        &[
                            format!("Poids: {:.0}kg", column.kilogram),
                            format!("Calories: {:.0}Kcal", column.calories),
                        ],
                    );

                    geometries.push(overlay.into_geometry());
                }
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

fn draw_legend(frame: &mut Frame, plot: Rectangle) {
    let entries = [
        ("Poids (kg)", theme::BAR_DARK, 0.55),
        ("Calories brûlées (kCal)", theme::PRIMARY_RED, 0.72),
    ];

    for (label, color, offset) in entries {
        let x = plot.x + plot.width * offset;
        frame.fill(&Path::circle(Point::new(x, 16.0), 4.0), color);
        frame.fill_text(Text {
            content: label.to_owned(),
            position: Point::new(x + 10.0, 9.0),
            color: theme::TEXT_MUTED,
            size: 11.0.into(),
            ..Text::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample(day: &str, kilogram: f32, calories: f32) -> ActivitySample {
        ActivitySample {
            day: day.to_owned(),
            kilogram,
            calories,
        }
    }

    fn canvas_size() -> Size {
        Size::new(700.0, 260.0)
    }

    #[test]
    fn layout_matches_worked_axis_domains() {
        let samples = vec![sample("1", 80.0, 300.0), sample("2", 81.0, 250.0)];
        let layout = layout(&samples, canvas_size());

        assert_eq!(layout.weight_domain, (75.0, 87.0));
        assert_eq!(layout.calorie_domain, (0.0, 600.0));
    }

    #[test]
    fn layout_is_idempotent_for_identical_input() {
        let samples = vec![
            sample("1", 80.0, 240.0),
            sample("2", 80.0, 220.0),
            sample("3", 81.0, 280.0),
        ];
        assert_eq!(
            layout(&samples, canvas_size()),
            layout(&samples, canvas_size())
        );
    }

    #[test]
    fn paired_bars_sit_side_by_side_without_overlap() {
        let samples = vec![sample("1", 80.0, 240.0), sample("2", 81.0, 220.0)];
        let layout = layout(&samples, canvas_size());

        for column in &layout.columns {
            let weight_right = column.weight_bar.x + column.weight_bar.width;
            assert!(weight_right < column.calorie_bar.x);
        }
    }

    #[test]
    fn bars_stay_inside_the_plot() {
        let samples = vec![sample("1", 90.0, 500.0)];
        let layout = layout(&samples, canvas_size());
        let plot = layout.plot;

        let column = &layout.columns[0];
        for bar in [column.weight_bar, column.calorie_bar] {
            assert!(bar.y >= plot.y);
            assert!(bar.y + bar.height <= plot.y + plot.height + 1e-3);
            assert!(bar.x >= plot.x);
            assert!(bar.x + bar.width <= plot.x + plot.width);
        }
    }

    #[test]
    fn single_sample_series_produces_positive_bar_heights() {
        let samples = vec![sample("1", 70.0, 200.0)];
        let layout = layout(&samples, canvas_size());

        let column = &layout.columns[0];
        assert!(column.weight_bar.height > 0.0);
        assert!(column.calorie_bar.height > 0.0);
    }

    #[test]
    fn column_hit_testing_uses_step_extents() {
        let samples = vec![sample("1", 80.0, 240.0), sample("2", 81.0, 220.0)];
        let layout = layout(&samples, canvas_size());

        let first_center = (layout.columns[0].step.0 + layout.columns[0].step.1) / 2.0;
        assert_eq!(layout.column_at(first_center).unwrap().label, "1");
        assert!(layout.column_at(-10.0).is_none());
    }
}
