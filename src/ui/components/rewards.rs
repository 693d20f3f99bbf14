use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::scoring::{POINTS_PER_STAR, Progress, STICKERS};
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::theme::Theme;

const LOCKED_STICKER: &str = "🔒";

pub struct RewardsView<'a> {
    pub progress: &'a Progress,
    pub catalog_len: usize,
    pub theme: &'a Theme,
}

impl<'a> RewardsView<'a> {
    pub fn new(progress: &'a Progress, catalog_len: usize, theme: &'a Theme) -> Self {
        Self {
            progress,
            catalog_len,
            theme,
        }
    }
}

impl Widget for RewardsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let rewards = self.progress.rewards();

        let block = Block::bordered()
            .title(" Mis premios ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            format!("{} puntos", self.progress.points),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        let label = Style::default().fg(colors.text_pending());
        let value = Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD);
        let counts = vec![
            Line::from(vec![
                Span::styled("  ⭐ Estrellas: ", label),
                Span::styled(rewards.stars.to_string(), value),
                Span::styled("     🏆 Trofeos: ", label),
                Span::styled(rewards.trophies.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("  🏅 Medallas:  ", label),
                Span::styled(rewards.badges.to_string(), value),
                Span::styled("     👑 Coronas: ", label),
                Span::styled(rewards.crowns.to_string(), value),
            ]),
        ];
        Paragraph::new(counts).render(layout[1], buf);

        let to_star = self.progress.points_to_next_star();
        ProgressBar::new(
            "Próxima estrella",
            f64::from(POINTS_PER_STAR - to_star) / f64::from(POINTS_PER_STAR),
            self.theme,
        )
        .caption(format!("faltan {to_star} puntos"))
        .render(layout[2], buf);

        ProgressBar::new(
            "Niveles",
            self.progress.level_progress(self.catalog_len),
            self.theme,
        )
        .caption(format!(
            "nivel {} de {}",
            self.progress.current_level, self.catalog_len
        ))
        .render(layout[3], buf);

        ProgressBar::new(
            "Álbum de stickers",
            f64::from(rewards.album_ratio_percent) / 100.0,
            self.theme,
        )
        .render(layout[4], buf);

        let album: Vec<Span> = STICKERS
            .iter()
            .enumerate()
            .map(|(i, sticker)| {
                let shown = if i < rewards.stickers_unlocked {
                    *sticker
                } else {
                    LOCKED_STICKER
                };
                Span::raw(format!(" {shown} "))
            })
            .collect();
        Paragraph::new(vec![Line::from(""), Line::from(album)])
            .alignment(Alignment::Center)
            .render(layout[5], buf);

        Paragraph::new(Line::from(Span::styled(
            " [Enter] Jugar  [Esc] Volver",
            Style::default().fg(colors.text_pending()),
        )))
        .render(layout[6], buf);
    }
}
