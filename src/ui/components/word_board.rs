use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::focus::{Focus, FocusArea};
use crate::session::state::Verification;
use crate::ui::theme::Theme;

const CHIP_GAP: usize = 1;

/// Greedy row packing for word chips. Returns the word indices on each row;
/// a chip wider than `width` gets a row of its own.
pub fn chip_rows(words: &[String], padding: usize, width: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0;

    for (i, word) in words.iter().enumerate() {
        let chip = Span::raw(word.as_str()).width() + 2 * padding;
        let needed = if current.is_empty() { chip } else { used + CHIP_GAP + chip };
        if !current.is_empty() && needed > width {
            rows.push(std::mem::take(&mut current));
            used = chip;
        } else {
            used = needed;
        }
        current.push(i);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// One of the two word lists (the sentence being built, or the loose words).
pub struct WordList<'a> {
    pub title: &'a str,
    pub words: &'a [String],
    pub area: FocusArea,
    pub focus: Focus,
    pub padding: usize,
    pub placeholder: &'a str,
    pub verification: Verification,
    pub theme: &'a Theme,
}

impl<'a> WordList<'a> {
    pub fn new(title: &'a str, words: &'a [String], area: FocusArea, theme: &'a Theme) -> Self {
        Self {
            title,
            words,
            area,
            focus: Focus::default(),
            padding: 1,
            placeholder: "",
            verification: Verification::Unresolved,
            theme,
        }
    }

    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn verification(mut self, verification: Verification) -> Self {
        self.verification = verification;
        self
    }

    fn border_color(&self) -> Color {
        let colors = &self.theme.colors;
        match self.verification {
            Verification::Correct => colors.success(),
            Verification::Incorrect => colors.error(),
            Verification::Unresolved if self.focus.area == self.area => colors.border_focused(),
            Verification::Unresolved => colors.border(),
        }
    }

    fn chip_style(&self, index: usize) -> Style {
        let colors = &self.theme.colors;
        if self.focus.is_on(self.area, index) {
            return Style::default()
                .fg(colors.word_focused_fg())
                .bg(colors.word_focused_bg())
                .add_modifier(Modifier::BOLD);
        }
        let fg = match self.area {
            FocusArea::Available => colors.word_available(),
            FocusArea::Placed => colors.word_placed(),
        };
        Style::default().fg(fg).bg(colors.accent_dim())
    }
}

impl Widget for WordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(self.border_color()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.words.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(colors.text_pending())
                    .add_modifier(Modifier::ITALIC),
            )))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let pad = " ".repeat(self.padding);
        let mut lines: Vec<Line> = Vec::new();
        for (row_no, row) in chip_rows(self.words, self.padding, inner.width as usize)
            .into_iter()
            .enumerate()
        {
            if row_no > 0 && self.padding > 1 {
                lines.push(Line::from(""));
            }
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (n, index) in row.into_iter().enumerate() {
                if n > 0 {
                    spans.push(Span::raw(" ".repeat(CHIP_GAP)));
                }
                spans.push(Span::styled(
                    format!("{pad}{}{pad}", self.words[index]),
                    self.chip_style(index),
                ));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
