//! Terminal rendering of the volume slider.

use mmp_types::{SliderTheme, SliderView, ThemeColor, TICKS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Widget},
};

const TICK_SYMBOL: &str = "╷";
const HANDLE_SYMBOL: &str = "▼";
const FILL_SYMBOL: &str = "█";
const EMPTY_SYMBOL: &str = "░";

fn color(c: ThemeColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Column offset of `pct` on a track `width` cells wide.
pub fn column_for(pct: f64, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    let last = (width - 1) as f64;
    (pct.clamp(0.0, 100.0) / 100.0 * last).round() as u16
}

/// Bordered slider: a mark row (ticks and handle) over the filled track,
/// with the decibel readout in the top border.
pub struct VolumeBar<'a> {
    view: &'a SliderView,
    theme: &'a SliderTheme,
}

impl<'a> VolumeBar<'a> {
    pub fn new(view: &'a SliderView, theme: &'a SliderTheme) -> Self {
        Self { view, theme }
    }

    /// Rows the bar needs, borders included.
    pub const HEIGHT: u16 = 4;

    fn block(theme: &SliderTheme) -> Block<'static> {
        let border_type = if theme.border_radius_px > 0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(color(theme.border_color)))
    }

    /// Screen area that reacts to the mouse: the rows inside the border.
    pub fn track_area(area: Rect, theme: &SliderTheme) -> Rect {
        let inner = Self::block(theme).inner(area);
        Rect::new(inner.x, inner.y, inner.width, inner.height.min(2))
    }
}

impl Widget for VolumeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track = Self::track_area(area, self.theme);
        Self::block(self.theme)
            .title(Line::from(self.view.label()).centered())
            .render(area, buf);
        if track.width == 0 || track.height < 2 {
            return;
        }
        let marks_y = track.y;
        let fill_y = track.y + 1;

        let tick_style = Style::default().fg(color(self.theme.primary));
        for tick in TICKS {
            let x = track.x + column_for(tick as f64, track.width);
            buf.set_string(x, marks_y, TICK_SYMBOL, tick_style);
        }
        let handle_x = track.x + column_for(self.view.handle_left, track.width);
        buf.set_string(
            handle_x,
            marks_y,
            HANDLE_SYMBOL,
            Style::default().fg(color(self.theme.dark_primary)),
        );

        let filled = if self.view.value > 0.0 {
            column_for(self.view.value, track.width) + 1
        } else {
            0
        };
        let fill_style = Style::default().fg(color(self.theme.primary));
        let empty_style = Style::default().fg(color(self.theme.border_color));
        for i in 0..track.width {
            let (symbol, style) = if i < filled {
                (FILL_SYMBOL, fill_style)
            } else {
                (EMPTY_SYMBOL, empty_style)
            };
            buf.set_string(track.x + i, fill_y, symbol, style);
        }
    }
}
