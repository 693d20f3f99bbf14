use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::scoring::Progress;
use crate::ui::theme::Theme;

/// One-line status bar: app name, level and score tiers.
pub struct Header<'a> {
    pub title: &'a str,
    pub progress: &'a Progress,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, progress: &'a Progress, theme: &'a Theme) -> Self {
        Self {
            title,
            progress,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let base = Style::default().fg(colors.header_fg()).bg(colors.header_bg());

        let info = format!(
            " Nivel {} | {} puntos | ⭐ {} | 🏆 {}",
            self.progress.current_level,
            self.progress.points,
            self.progress.stars,
            self.progress.trophies,
        );
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", self.title), base.add_modifier(Modifier::BOLD)),
            Span::styled(info, base.fg(colors.text_pending())),
        ]))
        .style(base)
        .render(area, buf);
    }
}
