//! Rendered copy of the list plus the transient state used to animate reorders.

use std::time::{Duration, Instant};

use list_core::Renderer;
use shared::domain::{Row, RowNumber};

pub struct ListView {
    rows: Vec<Row>,
    highlight: Option<(RowNumber, Instant)>,
    highlight_for: Duration,
    scroll_to_top: bool,
}

impl ListView {
    pub fn new(highlight_for: Duration) -> Self {
        Self {
            rows: Vec::new(),
            highlight: None,
            highlight_for,
            scroll_to_top: false,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn checked_count(&self) -> usize {
        self.rows.iter().filter(|row| row.checked).count()
    }

    pub fn highlight(&mut self, number: RowNumber, now: Instant) {
        self.highlight = Some((number, now));
    }

    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    /// 1.0 right after the move, fading linearly to 0.0.
    pub fn highlight_strength(&self, number: RowNumber, now: Instant) -> f32 {
        let Some((highlighted, started)) = self.highlight else {
            return 0.0;
        };
        if highlighted != number || self.highlight_for.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.highlight_for {
            return 0.0;
        }
        1.0 - elapsed.as_secs_f32() / self.highlight_for.as_secs_f32()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.highlight
            .is_some_and(|(number, _)| self.highlight_strength(number, now) > 0.0)
    }

    /// Returns the pending scroll request once.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }
}

impl Renderer for ListView {
    fn render(&mut self, rows: &[Row], reordered: bool) {
        self.rows.clear();
        self.rows.extend_from_slice(rows);
        if reordered {
            self.scroll_to_top = true;
        }
    }
}
