use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Size};

use crate::theme;

const TOOLTIP_PADDING: f32 = 6.0;
const TOOLTIP_LINE_HEIGHT: f32 = 16.0;

/// Small white tooltip box anchored next to the pointer, flipped when it
/// would leave the chart area.
pub fn draw_tooltip(frame: &mut Frame, anchor: Point, area: Rectangle, lines: &[String]) {
    if lines.is_empty() {
        return;
    }

    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = longest as f32 * 7.0 + TOOLTIP_PADDING * 2.0;
    let height = lines.len() as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING;

    let mut x = anchor.x + 10.0;
    let mut y = anchor.y - height - 10.0;
    if x + width > area.x + area.width {
        x = anchor.x - width - 10.0;
    }
    if y < area.y {
        y = anchor.y + 10.0;
    }

    let rect = Path::rectangle(Point::new(x, y), Size::new(width, height));
    frame.fill(&rect, Color::WHITE);
    frame.stroke(
        &rect,
        Stroke::default().with_width(1.0).with_color(theme::GRID_LINE),
    );

    for (index, line) in lines.iter().enumerate() {
        frame.fill_text(Text {
            content: line.clone(),
            position: Point::new(
                x + TOOLTIP_PADDING,
                y + TOOLTIP_PADDING / 2.0 + index as f32 * TOOLTIP_LINE_HEIGHT,
            ),
            color: theme::TEXT_DARK,
            size: 12.0.into(),
            ..Text::default()
        });
    }
}
