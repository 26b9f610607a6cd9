//! Terminal output for the demo drivers.

use std::{
    io::Write,
    sync::mpsc::Receiver,
    thread,
    time::Duration,
};

use tracing::warn;

use crate::{grid::Grid, perceptron::Prediction};

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes frames received on `rx` to stdout until every sender is dropped.
///
/// `frame_delay` is slept after each frame to pace the animation.
pub fn output(rx: Receiver<String>, frame_delay: Option<Duration>) {
    let mut stdout = std::io::stdout().lock();
    for frame in rx {
        let written = writeln!(stdout, "{CLEAR_SCREEN}{frame}").and_then(|()| stdout.flush());
        if let Err(err) = written {
            warn!(%err, "Stopping renderer, stdout is unavailable");
            return;
        }
        if let Some(delay) = frame_delay {
            thread::sleep(delay);
        }
    }
}

/// Renders one generation with a header line.
pub fn frame(generation: usize, grid: &Grid) -> String {
    format!(
        "generation {generation} ({} alive)\n{grid}",
        grid.live_count()
    )
}

/// Formats one prediction as `[x y]: activation -> predicted`, the bias input omitted.
pub fn prediction_line(prediction: &Prediction) -> String {
    let inputs = prediction
        .features
        .iter()
        .take(prediction.features.len().saturating_sub(1))
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "[{inputs}]: {} -> {}",
        prediction.activation, prediction.predicted
    )
}
