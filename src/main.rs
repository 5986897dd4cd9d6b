use anyhow::{Context, Result};
use std::process;
use termcolor::{ColorChoice, StandardStream};
use topocheck::probe;
use topocheck::types::ProbeSpec;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let universe = mpi::initialize()
        .context("Failed to initialize MPI (launch the probe with srun or mpirun)")?;
    let world = universe.world();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    let rank_run = probe::run(&ProbeSpec::default(), &world, &mut stdout)?;
    let code = rank_run.exit_code();

    // MPI_Finalize runs when the universe guard drops; process::exit in
    // main skips destructors, so the guard must die before returning.
    drop(universe);

    Ok(code)
}
