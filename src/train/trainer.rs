use log::{debug, info};

use crate::error::{NetworkError, Result};
use crate::loss::MseLoss;
use crate::network::Network;
use crate::optim::Sgd;
use crate::train::report::TrainReport;

/// One training sample: input values and the single target output.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub input: Vec<f64>,
    pub target: f64,
}

impl Pattern {
    pub fn new(input: Vec<f64>, target: f64) -> Pattern {
        Pattern { input, target }
    }
}

/// The four XOR patterns in presentation order: bit 0 of the iteration
/// counter drives the first input, bit 1 the second.
pub fn xor_patterns() -> Vec<Pattern> {
    (0..4)
        .map(|i| {
            let a = if i & 1 != 0 { 1.0 } else { 0.0 };
            let b = if i & 2 != 0 { 1.0 } else { 0.0 };
            let target = if i == 1 || i == 2 { 1.0 } else { 0.0 };
            Pattern::new(vec![a, b], target)
        })
        .collect()
}

/// Online training: presents `patterns` round-robin for `iterations`
/// samples, with one forward and one backward pass per sample.
///
/// Every `report_every` iterations the next few samples are logged at debug
/// level. Returns the mean squared error over the last pass.
pub fn train_online(
    network: &mut Network,
    patterns: &[Pattern],
    iterations: usize,
    optimizer: &Sgd,
    report_every: usize,
) -> Result<TrainReport> {
    check_patterns(network, patterns)?;

    let n = patterns.len();
    let window_start = iterations.saturating_sub(n);
    let mut window_loss = 0.0;

    for i in 0..iterations {
        let pattern = &patterns[i % n];
        network.set_input(&pattern.input)?;
        network.forward()?;
        let actual = network.read_output()?[0];
        let err = MseLoss::error_signal(pattern.target, actual);

        if report_every > 0 && i > 0 && i % report_every < n {
            debug!(
                "{:?} | {:.2} - {:.2} = err {:.2}",
                pattern.input, pattern.target, actual, err
            );
        }
        if i >= window_start {
            window_loss += MseLoss::loss(&[actual], &[pattern.target]);
        }

        optimizer.step(network, err)?;
    }

    let final_loss = window_loss / (iterations - window_start).max(1) as f64;
    info!("trained {iterations} iterations, final loss {final_loss:.6}");
    Ok(TrainReport {
        iterations,
        final_loss,
    })
}

/// Output for each pattern under the current weights.
pub fn evaluate(network: &mut Network, patterns: &[Pattern]) -> Result<Vec<f64>> {
    patterns
        .iter()
        .map(|p| Ok(network.predict(&p.input)?[0]))
        .collect()
}

fn check_patterns(network: &Network, patterns: &[Pattern]) -> Result<()> {
    if patterns.is_empty() {
        return Err(NetworkError::Configuration("pattern set is empty".to_owned()));
    }
    let width = network.spec().input_width();
    if let Some(bad) = patterns.iter().position(|p| p.input.len() != width) {
        return Err(NetworkError::Configuration(format!(
            "pattern {bad} has {} inputs, network expects {width}",
            patterns[bad].input.len()
        )));
    }
    Ok(())
}
