use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::engine::scoring::POINTS_PER_SENTENCE;
use crate::session::state::{Modal, Session, Verification};
use crate::ui::theme::Theme;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 8;

/// Overlay for whichever modal the session has open. Renders nothing when
/// no modal is open.
pub struct ModalDialog<'a> {
    pub session: &'a Session,
    pub theme: &'a Theme,
}

impl<'a> ModalDialog<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    fn content(&self) -> Option<(&'static str, Color, Vec<Line<'a>>)> {
        let colors = &self.theme.colors;
        let text = Style::default().fg(colors.fg());
        let keys = Style::default().fg(colors.text_pending());

        match (self.session.modal(), self.session.verification()) {
            (Modal::None, _) => None,
            (Modal::ResetConfirm, _) => Some((
                " ¿Empezar de nuevo? ",
                colors.warning(),
                vec![
                    Line::from(Span::styled(
                        "Se quitarán todas las palabras que pusiste.",
                        text,
                    )),
                    Line::from(""),
                    Line::from(Span::styled("[y/Enter] Sí    [Esc] No", keys)),
                ],
            )),
            (Modal::Feedback, Verification::Correct) => Some((
                " ¡Excelente! ",
                colors.success(),
                vec![
                    Line::from(Span::styled(
                        self.session.sentence().correct_text.clone(),
                        text.add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("¡Lo hiciste perfecto! +{POINTS_PER_SENTENCE} puntos"),
                        Style::default().fg(colors.success()),
                    )),
                    Line::from(""),
                    Line::from(Span::styled("[Enter] Siguiente nivel    [Esc] Cerrar", keys)),
                ],
            )),
            (Modal::Feedback, Verification::Incorrect | Verification::Unresolved) => Some((
                " ¡Casi! ",
                colors.error(),
                vec![
                    Line::from(Span::styled("Revisa el orden de las palabras.", text)),
                    Line::from(""),
                    Line::from(Span::styled("[Enter] Intentar otra vez", keys)),
                ],
            )),
        }
    }
}

impl Widget for ModalDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((title, border, lines)) = self.content() else {
            return;
        };
        let colors = &self.theme.colors;

        let width = DIALOG_WIDTH.min(area.width);
        let height = DIALOG_HEIGHT.min(area.height);
        let dialog_area = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        Clear.render(dialog_area, buf);
        let mut body = vec![Line::from("")];
        body.extend(lines);
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(colors.bg()))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(dialog_area, buf);
    }
}
