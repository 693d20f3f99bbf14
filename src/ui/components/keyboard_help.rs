use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

pub const SHORTCUTS: [(&str, &str); 13] = [
    ("← →", "Elegir palabra"),
    ("↑ ↓", "Cambiar entre oración y palabras"),
    ("Enter / Espacio", "Poner o quitar la palabra elegida"),
    ("Supr / Retroceso", "Quitar palabra de la oración"),
    ("Ctrl+P", "Pista"),
    ("Ctrl+R", "Empezar de nuevo"),
    ("Ctrl+V", "Revisar oración"),
    ("Esc", "Cerrar ventana / volver al inicio"),
    ("Alt+I", "Inicio"),
    ("Alt+J", "Jugar"),
    ("Alt+R", "Mis premios"),
    ("Alt+A / Alt+H", "Ajustes / Cómo jugar"),
    ("F1 / ?", "Mostrar u ocultar esta ayuda"),
];

pub struct KeyboardHelp<'a> {
    pub theme: &'a Theme,
}

impl<'a> KeyboardHelp<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for KeyboardHelp<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let key_width = SHORTCUTS
            .iter()
            .map(|(k, _)| k.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![Line::from("")];
        lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {keys:<key_width$}  "),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(colors.fg())),
            ])
        }));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .style(Style::default().bg(colors.bg()))
            .block(
                Block::bordered()
                    .title(" Teclas ")
                    .title_bottom(" [Esc] Cerrar ")
                    .border_style(Style::default().fg(colors.accent()))
                    .style(Style::default().bg(colors.bg())),
            )
            .render(area, buf);
    }
}
