use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use list_core::{stats::position_histogram, ListModel};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shuffle a fresh list repeatedly and report how evenly rows land.
    ShuffleStats {
        #[arg(long, default_value_t = 10_000)]
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::ShuffleStats { trials, seed } => {
            ensure!(trials > 0, "--trials must be at least 1");
            let mut model = match seed {
                Some(seed) => ListModel::with_seed(seed),
                None => ListModel::initialize(),
            };
            let histogram = position_histogram(&mut model, trials);
            println!("trials={trials}");
            println!("expected_per_cell={:.2}", histogram.expected_per_cell());
            println!(
                "min_cell={} max_cell={}",
                histogram.min_cell(),
                histogram.max_cell()
            );
            println!(
                "chi_square={:.1} (uniform mean {})",
                histogram.chi_square(),
                histogram.degrees_of_freedom()
            );
        }
    }

    Ok(())
}
