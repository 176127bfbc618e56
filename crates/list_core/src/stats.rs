//! Position-frequency measurement for the shuffle.

use shared::domain::ROW_COUNT;

use crate::ListModel;

/// `counts[number - 1][position]` = how often `number` landed at `position`.
#[derive(Debug, Clone)]
pub struct PositionHistogram {
    pub trials: usize,
    pub counts: Vec<Vec<u32>>,
}

impl PositionHistogram {
    pub fn expected_per_cell(&self) -> f64 {
        self.trials as f64 / f64::from(ROW_COUNT)
    }

    pub fn min_cell(&self) -> u32 {
        self.counts.iter().flatten().copied().min().unwrap_or(0)
    }

    pub fn max_cell(&self) -> u32 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Pearson chi-square over all number/position cells.
    pub fn chi_square(&self) -> f64 {
        let expected = self.expected_per_cell();
        if expected == 0.0 {
            return 0.0;
        }
        self.counts
            .iter()
            .flatten()
            .map(|&observed| {
                let diff = f64::from(observed) - expected;
                diff * diff / expected
            })
            .sum()
    }

    /// Mean of [`Self::chi_square`] under a uniform shuffle.
    pub fn degrees_of_freedom(&self) -> u32 {
        ROW_COUNT * (ROW_COUNT - 1)
    }
}

/// Shuffles `model` `trials` times, sampling positions after each shuffle.
pub fn position_histogram(model: &mut ListModel, trials: usize) -> PositionHistogram {
    let size = ROW_COUNT as usize;
    let mut counts = vec![vec![0u32; size]; size];

    for _ in 0..trials {
        model.shuffle();
        for (position, row) in model.rows().iter().enumerate() {
            let index = row.number.0 as usize - 1;
            counts[index][position] += 1;
        }
    }

    PositionHistogram { trials, counts }
}
