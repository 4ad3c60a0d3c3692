//! Rendering: frame layout and drawing.

use mmp_core::player::MediaPlayer;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::AppRuntime;
use crate::terminal::TerminalBackend;
use crate::widget::VolumeBar;

const HINT: &str = "drag/click the bar · ←/→ step · Home/End · q quit";

impl AppRuntime {
    /// Draw a frame if anything changed since the last one.
    pub(crate) fn maybe_render(&mut self, backend: &mut TerminalBackend) -> std::io::Result<()> {
        if !self.render_needed {
            return Ok(());
        }
        self.render_needed = false;
        backend.draw(|frame| self.render(frame))
    }

    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, bar_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(VolumeBar::HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        let volume = self.view.value.round().clamp(0.0, 100.0) as u32;
        let mut title = vec![
            Span::styled(
                self.player.name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  Volume {}%", volume)),
        ];
        if self.player.is_muted() {
            title.push(Span::styled("  muted", Style::default().fg(Color::Red)));
        }
        frame.render_widget(Paragraph::new(Line::from(title)), title_area);

        self.track_area = VolumeBar::track_area(bar_area, &self.theme);
        frame.render_widget(VolumeBar::new(&self.view, &self.theme), bar_area);

        frame.render_widget(
            Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }
}
