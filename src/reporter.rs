use crate::types::{ProbeOutcome, Verdict};
use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};

/// Announce the closed-form target before the reduction runs.
pub fn print_target(out: &mut impl WriteColor, target: i32) -> std::io::Result<()> {
    writeln!(out, "Reduction Target is {}.", target)
}

/// Report the aggregate delivered by the reduction and the verdict line.
///
/// The verdict is colored on interactive terminals; under a launcher or a
/// pipe the sink emits the plain literals that job scripts grep for.
pub fn print_outcome(out: &mut impl WriteColor, outcome: &ProbeOutcome) -> std::io::Result<()> {
    writeln!(out, "Result is: {}.", outcome.observed)?;

    match outcome.verdict {
        Verdict::Matched => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(out, "SUCCESS! MPI_Reduction matched expected results.")?;
        }
        Verdict::Mismatched => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            writeln!(out, "FAILURE! MPI_Reduction did not match expected results.")?;
        }
    }

    out.reset()
}
