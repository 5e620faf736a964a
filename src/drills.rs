//! The three console drills and the reporting of their failures.
//!
//! Each drill stops at its first failure. The failure is reported and the
//! next drill runs regardless.

use std::io::{self, BufRead, Write};

use gridbot_arith::{ArithmeticError, ThresholdAccumulator, divide};
use gridbot_grid::{GridError, Position};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::settings::{GridSettings, Settings};

/// Why a drill stopped early.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Prints a fixed set of quotients, one per line. The second one divides by zero.
pub fn division_drill<W: Write>(out: &mut W) -> Result<(), DrillError> {
    writeln!(out, "{}", divide(4_i32, 2)?)?;
    writeln!(out, "{}", divide(4.3_f32, 0.0)?)?;
    writeln!(out, "{}", divide(-5.6_f64, 1.0)?)?;
    writeln!(out, "{}", divide(3_u16, 3)?)?;
    Ok(())
}

/// Feeds whitespace-separated integers from `input` to a `ThresholdAccumulator`.
///
/// Stops after a zero has been fed, at the end of input, or at the first token
/// that is not an integer. Returns the accumulator as it was left.
pub fn accumulator_drill<R: BufRead>(
    input: R,
    limit: i32,
) -> Result<ThresholdAccumulator, DrillError> {
    let mut acc = ThresholdAccumulator::with_limit(limit);

    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let delta = match token.parse::<i32>() {
                Ok(delta) => delta,
                Err(e) => {
                    warn!(token, error = %e, "Input is not an integer, ending accumulator drill");
                    return Ok(acc);
                }
            };

            acc.set(delta)?;
            debug!(delta, total = acc.total(), "Accumulator accepted update");

            if delta == 0 {
                return Ok(acc);
            }
        }
    }

    info!(total = acc.total(), "Input ended before a zero was entered");
    Ok(acc)
}

/// Builds the configured grid and runs its command labels in order.
pub fn grid_drill(settings: &GridSettings) -> Result<Position, DrillError> {
    let mut grid = settings.build()?;
    for label in &settings.moves {
        grid.execute(label)?;
    }
    Ok(grid.position())
}

/// Writes the diagnostic for `err`, choosing the format by error kind.
pub fn report<W: Write>(err: &DrillError, out: &mut W) -> io::Result<()> {
    match err {
        DrillError::Arithmetic(ArithmeticError::ThresholdExceeded { value }) => {
            writeln!(out, "Error. {}", value)
        }
        DrillError::Arithmetic(e) => match e.signature() {
            Some(signature) => writeln!(out, "Error in function: {}", signature),
            None => writeln!(out, "Error: {}", e),
        },
        DrillError::Grid(GridError::OutOfBounds(ctx)) => {
            let (p, bounds) = (ctx.position(), ctx.bounds());
            writeln!(out, "Error: Off the field")?;
            writeln!(out, "Current position: {} {}", p.x, p.y)?;
            writeln!(out, "Direction: {}", ctx.direction_label())?;
            writeln!(out, "Grid size: {} {}", bounds.max_x, bounds.max_y)
        }
        DrillError::Grid(GridError::IllegalCommand(reason)) => writeln!(out, "{}", reason),
        DrillError::Grid(e) => writeln!(out, "Error: {}", e),
        DrillError::Io(e) => writeln!(out, "Error: {}", e),
    }
}

/// Runs every drill in order, reporting each failure to `err` before moving on.
///
/// Drill failures are reported, never returned. The only error returned is a
/// failure to write to `out` or `err` themselves, which `main` propagates as a
/// non-zero exit code since nothing else can be reported at that point.
pub fn run_all<R, O, E>(settings: &Settings, input: R, out: &mut O, err: &mut E) -> io::Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    info!("Starting division drill");
    if let Err(e) = division_drill(out) {
        info!(error = %e, "Division drill stopped");
        report(&e, err)?;
    }

    info!(limit = settings.accumulator.limit, "Starting accumulator drill");
    match accumulator_drill(input, settings.accumulator.limit) {
        Ok(acc) => info!(total = acc.total(), "Accumulator drill finished"),
        Err(e) => {
            info!(error = %e, "Accumulator drill stopped");
            report(&e, err)?;
        }
    }

    info!(moves = settings.grid.moves.len(), "Starting grid drill");
    match grid_drill(&settings.grid) {
        Ok(p) => info!(position = %p, "Grid drill finished"),
        Err(e) => {
            info!(error = %e, "Grid drill stopped");
            report(&e, err)?;
        }
    }

    out.flush()?;
    err.flush()
}
