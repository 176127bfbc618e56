use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Parser;
use list_core::{config::load_settings, ListModel};
use shared::{domain::Row, protocol::ListEvent};
use tracing_subscriber::EnvFilter;

/// Replays tap/shuffle events against a fresh list and prints the result.
#[derive(Parser, Debug)]
struct Args {
    /// Fixed RNG seed; overrides `shuffle_seed` from config.
    #[arg(long)]
    seed: Option<u64>,
    /// `tap:<n>` or `shuffle`, applied in order.
    #[arg(long = "event", value_name = "EVENT")]
    events: Vec<ListEvent>,
    /// Print rows as JSON instead of one line per row.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings().context("failed to load checklist settings")?;
    if args.seed.is_some() {
        settings.shuffle_seed = args.seed;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(seed = ?settings.shuffle_seed, events = args.events.len(), "replaying events");

    let mut model = ListModel::from_settings(&settings);
    for event in args.events {
        let update = model.dispatch(event);
        if !update.changed {
            tracing::warn!(%event, "event had no effect");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(model.rows())?);
    } else {
        print!("{}", format_rows(model.rows()));
    }

    Ok(())
}

fn format_rows(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        let mark = if row.checked { 'x' } else { ' ' };
        let _ = writeln!(out, "{:>2} [{mark}]", row.number);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::RowNumber;

    #[test]
    fn parses_repeated_events() {
        let args = Args::try_parse_from([
            "desktop", "--seed", "3", "--event", "tap:5", "--event", "shuffle",
        ])
        .expect("args");
        assert_eq!(args.seed, Some(3));
        assert_eq!(
            args.events,
            vec![
                ListEvent::RowTapped(RowNumber(5)),
                ListEvent::ShuffleRequested
            ]
        );
        assert!(!args.json);
    }

    #[test]
    fn rejects_malformed_event() {
        assert!(Args::try_parse_from(["desktop", "--event", "tap:five"]).is_err());
    }

    #[test]
    fn formats_checked_marks() {
        let rows = [
            Row {
                number: RowNumber(5),
                checked: true,
            },
            Row::unchecked(RowNumber(12)),
        ];
        assert_eq!(format_rows(&rows), " 5 [x]\n12 [ ]\n");
    }
}
