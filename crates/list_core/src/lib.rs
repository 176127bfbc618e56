//! Ordered checklist model: toggle moves newly checked rows to the front,
//! shuffle permutes uniformly. Renderers observe it through [`Renderer`].

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use shared::{
    domain::{Row, RowNumber, ROW_COUNT},
    protocol::{ListEvent, ListUpdate},
};
use tracing::debug;

pub mod config;
pub mod stats;

/// Presentation seam. Implementations draw `rows` in order; `reordered` marks
/// updates where positions moved rather than a flag flipping in place.
pub trait Renderer {
    fn render(&mut self, rows: &[Row], reordered: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// `None` when the number is not in the list.
    pub checked: Option<bool>,
    pub reordered: bool,
}

pub struct ListModel {
    rows: Vec<Row>,
    rng: StdRng,
}

impl ListModel {
    /// Fresh list seeded from OS entropy.
    pub fn initialize() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_settings(settings: &config::Settings) -> Self {
        match settings.shuffle_seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::initialize(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        let rows = (1..=ROW_COUNT)
            .map(|n| Row::unchecked(RowNumber(n)))
            .collect();
        Self { rows, rng }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn position_of(&self, number: RowNumber) -> Option<usize> {
        self.rows.iter().position(|row| row.number == number)
    }

    pub fn checked_count(&self) -> usize {
        self.rows.iter().filter(|row| row.checked).count()
    }

    /// Flips `checked` on `number`. A row that becomes checked is moved to
    /// index 0; a row that becomes unchecked stays where it is. Unknown
    /// numbers are ignored.
    pub fn toggle(&mut self, number: RowNumber) -> ToggleOutcome {
        let Some(index) = self.position_of(number) else {
            debug!(row = number.0, "toggle ignored for unknown row");
            return ToggleOutcome {
                checked: None,
                reordered: false,
            };
        };

        let checked = !self.rows[index].checked;
        self.rows[index].checked = checked;

        let reordered = checked && index != 0;
        if reordered {
            let row = self.rows.remove(index);
            self.rows.insert(0, row);
        }

        debug!(row = number.0, checked, reordered, "row toggled");
        ToggleOutcome {
            checked: Some(checked),
            reordered,
        }
    }

    /// Uniform in-place permutation. `checked` travels with each row.
    pub fn shuffle(&mut self) {
        self.rows.shuffle(&mut self.rng);
        debug!(checked = self.checked_count(), "rows shuffled");
    }

    /// Single entry point for presentation events.
    pub fn dispatch(&mut self, event: ListEvent) -> ListUpdate {
        let (reordered, changed) = match event {
            ListEvent::RowTapped(number) => {
                let outcome = self.toggle(number);
                (outcome.reordered, outcome.checked.is_some())
            }
            ListEvent::ShuffleRequested => {
                self.shuffle();
                (true, true)
            }
        };

        ListUpdate {
            rows: self.rows.clone(),
            reordered,
            changed,
        }
    }

    /// Dispatches `event` and pushes the result to `renderer` when anything changed.
    pub fn dispatch_to(&mut self, event: ListEvent, renderer: &mut impl Renderer) -> bool {
        let update = self.dispatch(event);
        if update.changed {
            renderer.render(&update.rows, update.reordered);
        }
        update.changed
    }

    pub fn render_into(&self, renderer: &mut impl Renderer) {
        renderer.render(&self.rows, false);
    }
}

impl Default for ListModel {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
