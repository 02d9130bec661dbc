mod common;

use common::{SplitMix64, XOR_SEED};
use flatnet::train::{evaluate, xor_patterns};
use flatnet::{train_online, MseLoss, Network, Sgd};

const LEARNING_RATE: f64 = 2.6;
const ITERATIONS: usize = 8000;

#[test]
fn xor_converges_with_the_raw_cycle() {
    let mut network = Network::with_rng(&[2, 2, 1], &mut SplitMix64::new(XOR_SEED)).unwrap();
    let patterns = xor_patterns();

    for i in 0..ITERATIONS {
        let pattern = &patterns[i % patterns.len()];
        network.set_input(&pattern.input).unwrap();
        network.forward().unwrap();
        let actual = network.read_output().unwrap()[0];
        network
            .backward(MseLoss::error_signal(pattern.target, actual), LEARNING_RATE)
            .unwrap();
    }

    for pattern in &patterns {
        let out = network.predict(&pattern.input).unwrap()[0];
        assert!(
            (out - pattern.target).abs() < 0.1,
            "{:?} -> {out}, want {}",
            pattern.input,
            pattern.target
        );
    }
}

#[test]
fn deeper_network_learns_xor() {
    let mut network =
        Network::with_rng(&[2, 3, 2, 1], &mut SplitMix64::new(XOR_SEED)).unwrap();
    let patterns = xor_patterns();
    let report = train_online(
        &mut network,
        &patterns,
        ITERATIONS,
        &Sgd::new(LEARNING_RATE),
        0,
    )
    .unwrap();

    let outputs = evaluate(&mut network, &patterns).unwrap();
    for (pattern, out) in patterns.iter().zip(outputs) {
        assert!((out - pattern.target).abs() < 0.1, "{:?} -> {out}", pattern.input);
    }
    assert!(report.final_loss < 0.01);
}

#[test]
fn raw_cycle_and_trainer_agree() {
    let patterns = xor_patterns();
    let mut by_hand = Network::with_rng(&[2, 2, 1], &mut SplitMix64::new(3)).unwrap();
    let mut by_trainer = by_hand.clone();

    for i in 0..200 {
        let pattern = &patterns[i % 4];
        let actual = by_hand.predict(&pattern.input).unwrap()[0];
        by_hand.backward(pattern.target - actual, LEARNING_RATE).unwrap();
    }
    train_online(&mut by_trainer, &patterns, 200, &Sgd::new(LEARNING_RATE), 0).unwrap();

    assert_eq!(by_hand.weights(), by_trainer.weights());
}
