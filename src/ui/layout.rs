use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the game screen, top to bottom.
pub struct GameLayout {
    pub header: Rect,
    pub prompt: Rect,
    pub placed: Rect,
    pub available: Rect,
    pub progress: Option<Rect>,
    pub footer: Rect,
}

impl GameLayout {
    pub fn new(area: Rect) -> Self {
        // The progress bar is the first thing to go on short terminals.
        let show_progress = area.height >= 24;

        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Min(5),
        ];
        if show_progress {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(2));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (progress, footer) = if show_progress {
            (Some(rows[4]), rows[5])
        } else {
            (None, rows[4])
        };

        Self {
            header: rows[0],
            prompt: rows[1],
            placed: rows[2],
            available: rows[3],
            progress,
            footer,
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
        }
        has_hint = true;
    }

    if has_hint {
        out.push(current);
    }
    out
}

/// Rect of at least `min_w` x `min_h` (clamped to `area`) centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, min_w: u16, min_h: u16, area: Rect) -> Rect {
    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(min_w).min(area.width);
    let target_h = requested_h.max(min_h).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_wrap_at_width() {
        let lines = pack_hint_lines(&["[Enter] Poner", "[Supr] Quitar", "[Ctrl+P] Pista"], 30);
        assert_eq!(lines, vec![" [Enter] Poner  [Supr] Quitar", " [Ctrl+P] Pista"]);
        assert!(pack_hint_lines(&["x"], 0).is_empty());
    }

    #[test]
    fn centered_rect_stays_inside_small_areas() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(50, 50, 60, 12, area);
        assert_eq!(r, area);

        let big = Rect::new(0, 0, 100, 40);
        let r = centered_rect(50, 50, 10, 5, big);
        assert_eq!(r, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn game_layout_drops_progress_when_short() {
        assert!(GameLayout::new(Rect::new(0, 0, 80, 30)).progress.is_some());
        assert!(GameLayout::new(Rect::new(0, 0, 80, 20)).progress.is_none());
    }
}
