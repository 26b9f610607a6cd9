use std::{process::ExitCode, sync::mpsc, thread, time::Duration};

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};

use gol_perceptron::{
    Automaton, DefaultBackend, Grid, Result, WeightVector,
    args::{Cli, Command, LifeArgs, PerceptronArgs, import_field},
    logging, perceptron, render,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let outcome = match cli.command {
        Command::Life(args) => run_life(args),
        Command::Perceptron(args) => run_perceptron(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Run failed");
            ExitCode::FAILURE
        }
    }
}

fn run_life(args: LifeArgs) -> Result<()> {
    let mut field = match &args.input_file {
        Some(path) => import_field(path, args.alive_symbol)?,
        None => Grid::reference_pattern(),
    };
    info!(
        rows = field.rows(),
        cols = field.cols(),
        live = field.live_count(),
        generations = args.generations,
        "Starting Game of Life"
    );

    let automaton = Automaton::<DefaultBackend>::default();
    let frame_delay = (args.fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(args.fps)));

    let (tx, rx) = mpsc::channel::<String>();
    let renderer = thread::spawn(move || render::output(rx, frame_delay));

    let mut result = Ok(());
    for generation in 1..=args.generations {
        field = match automaton.step(&field) {
            Ok(next) => next,
            Err(err) => {
                result = Err(err);
                break;
            }
        };
        if tx.send(render::frame(generation, &field)).is_err() {
            // Renderer has stopped and already logged why
            break;
        }
    }

    drop(tx);
    if renderer.join().is_err() {
        error!("Renderer thread panicked");
    }
    info!(live = field.live_count(), "Game of Life finished");
    result
}

fn run_perceptron(args: PerceptronArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let training_set = perceptron::or_truth_table();
    let mut weights = WeightVector::random(3, &mut rng);
    info!(weights = ?weights.as_slice(), "Initial weights");

    perceptron::train(
        &training_set,
        &mut weights,
        args.learning_rate,
        args.iterations,
        &mut rng,
    )?;

    let predictions = perceptron::evaluate(&training_set, &weights)?;
    for prediction in &predictions {
        println!("{}", render::prediction_line(prediction));
    }

    let correct = predictions.iter().filter(|p| p.is_correct()).count();
    info!(correct, total = predictions.len(), "Evaluation finished");
    Ok(())
}
