//! Line-oriented interaction session.
//!
//! Each input line is one JSON-encoded [`InteractionEvent`]; each output line
//! is the JSON [`DashboardView`](beer_model::DashboardView) that results. The
//! initial view is written before any input is read.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use beer_explore::Dashboard;
use beer_model::{DashboardState, InteractionEvent};

/// Counters reported when the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub events: usize,
    pub skipped: usize,
}

/// Runs a session until `input` reaches end of file.
///
/// Lines that do not parse as an event are logged and skipped; the state is
/// left untouched and no view is written for them.
pub fn run_session<R, W>(
    dashboard: &Dashboard<'_>,
    initial: DashboardState,
    input: R,
    mut output: W,
) -> Result<SessionStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();
    let mut state = initial;
    write_line(&mut output, &dashboard.on_interaction(&state))?;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("read session input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: InteractionEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(error) => {
                warn!(line = index + 1, %error, "skipping malformed event");
                stats.skipped += 1;
                continue;
            }
        };
        let (next, view) = dashboard.dispatch(state, event);
        state = next;
        write_line(&mut output, &view)?;
        stats.events += 1;
    }

    info!(
        events = stats.events,
        skipped = stats.skipped,
        "session finished"
    );
    Ok(stats)
}

fn write_line<W: Write, T: serde::Serialize>(output: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *output, value).context("encode view")?;
    output.write_all(b"\n").context("write view")?;
    output.flush().context("flush view")
}
