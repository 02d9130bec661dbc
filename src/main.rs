// Trains a network on XOR and logs the result.
// Run with:
//   RUST_LOG=debug cargo run -- [config.json]
use std::process::ExitCode;

use log::{debug, error, info};

use flatnet::train::{evaluate, xor_patterns};
use flatnet::{train_online, Network, Result, Sgd, TrainConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::xor(),
    };
    config.validate()?;
    info!(
        "layers {:?}, learning rate {}, {} iterations, seed {}",
        config.layers.widths(),
        config.learning_rate,
        config.iterations,
        config.seed
    );

    let mut network = Network::new(config.layers.widths(), config.seed)?;
    let patterns = xor_patterns();
    let optimizer = Sgd::new(config.learning_rate);

    train_online(
        &mut network,
        &patterns,
        config.iterations,
        &optimizer,
        config.report_every,
    )?;

    let outputs = evaluate(&mut network, &patterns)?;
    for (pattern, output) in patterns.iter().zip(outputs) {
        info!(
            "{:?} -> {:.4} (target {:.1})",
            pattern.input, output, pattern.target
        );
    }
    debug!("{}", network.dump_state());
    Ok(())
}
