use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

pub struct TutorialStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const STEPS: [TutorialStep; 7] = [
    TutorialStep {
        title: "¡Bienvenido!",
        body: "En ordena armas oraciones. Las palabras aparecen desordenadas y tú las pones en el orden correcto.",
    },
    TutorialStep {
        title: "Muévete con las flechas",
        body: "Usa ← y → para elegir una palabra. ↑ sube a tu oración y ↓ baja a las palabras sueltas.",
    },
    TutorialStep {
        title: "Pon una palabra",
        body: "Pulsa Enter o Espacio sobre una palabra suelta para ponerla al final de tu oración.",
    },
    TutorialStep {
        title: "Quita una palabra",
        body: "Sube a tu oración y pulsa Supr o Retroceso para devolver una palabra a las sueltas.",
    },
    TutorialStep {
        title: "¿Necesitas ayuda?",
        body: "Ctrl+P te da una pista: pone la siguiente palabra correcta. Ctrl+R vuelve a empezar la oración.",
    },
    TutorialStep {
        title: "Revisa tu oración",
        body: "Cuando pongas todas las palabras, pulsa Ctrl+V. Si está bien ganas 100 puntos.",
    },
    TutorialStep {
        title: "Gana premios",
        body: "Cada 300 puntos ganas una estrella y cada 1000 un trofeo. Pulsa F1 o ? para ver todas las teclas. ¡A jugar!",
    },
];

pub struct TutorialView<'a> {
    pub step: usize,
    pub theme: &'a Theme,
}

impl<'a> TutorialView<'a> {
    pub fn new(step: usize, theme: &'a Theme) -> Self {
        Self {
            step: step.min(STEPS.len() - 1),
            theme,
        }
    }

    pub fn is_last(step: usize) -> bool {
        step + 1 >= STEPS.len()
    }
}

impl Widget for TutorialView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let step = &STEPS[self.step];

        let block = Block::bordered()
            .title(format!(" Cómo jugar ({}/{}) ", self.step + 1, STEPS.len()))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                step.title,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        Paragraph::new(Span::styled(step.body, Style::default().fg(colors.fg())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout[1], buf);

        let dots: String = (0..STEPS.len())
            .map(|i| if i == self.step { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");
        Paragraph::new(Span::styled(dots, Style::default().fg(colors.accent_dim())))
            .alignment(Alignment::Center)
            .render(layout[2], buf);

        let enter = if Self::is_last(self.step) {
            "[Enter] ¡Jugar!"
        } else {
            "[Enter/→] Siguiente"
        };
        Paragraph::new(Span::styled(
            format!(" [←] Anterior  {enter}  [Esc] Volver"),
            Style::default().fg(colors.text_pending()),
        ))
        .render(layout[3], buf);
    }
}
