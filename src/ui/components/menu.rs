use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::controller::Screen;
use crate::ui::theme::Theme;

pub struct MenuItem {
    pub key: char,
    pub label: &'static str,
    pub description: &'static str,
    /// `None` quits the app.
    pub target: Option<Screen>,
}

pub static MENU_ITEMS: [MenuItem; 5] = [
    MenuItem {
        key: '1',
        label: "Jugar",
        description: "Ordena las palabras para formar la oración",
        target: Some(Screen::Game),
    },
    MenuItem {
        key: '2',
        label: "Cómo jugar",
        description: "Aprende los controles paso a paso",
        target: Some(Screen::Tutorial),
    },
    MenuItem {
        key: '3',
        label: "Mis premios",
        description: "Estrellas, trofeos y tu álbum de stickers",
        target: Some(Screen::Rewards),
    },
    MenuItem {
        key: '4',
        label: "Ajustes",
        description: "Tamaño de letra, colores y dificultad",
        target: Some(Screen::Settings),
    },
    MenuItem {
        key: 'q',
        label: "Salir",
        description: "Cerrar ordena",
        target: None,
    },
];

/// Home-screen selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MENU_ITEMS.len();
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = MENU_ITEMS.len() - 1;
        }
    }

    pub fn current(&self) -> &'static MenuItem {
        &MENU_ITEMS[self.selected % MENU_ITEMS.len()]
    }

    pub fn by_key(key: char) -> Option<&'static MenuItem> {
        MENU_ITEMS.iter().find(|item| item.key == key)
    }
}

pub struct Menu<'a> {
    pub state: &'a MenuState,
    pub theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a MenuState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "ordena",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Arma oraciones palabra por palabra",
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let item_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(MENU_ITEMS.iter().map(|_| Constraint::Length(3)))
            .split(layout[2]);

        for (i, (item, row)) in MENU_ITEMS.iter().zip(item_rows.iter()).enumerate() {
            let is_selected = i == self.state.selected;
            let indicator = if is_selected { ">" } else { " " };
            let label_style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };

            let lines = vec![
                Line::from(Span::styled(
                    format!(" {indicator} [{}] {}", item.key, item.label),
                    label_style,
                )),
                Line::from(Span::styled(
                    format!("     {}", item.description),
                    Style::default().fg(colors.text_pending()),
                )),
            ];
            Paragraph::new(lines).render(*row, buf);
        }
    }
}
