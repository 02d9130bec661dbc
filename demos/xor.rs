use flatnet::train::{evaluate, xor_patterns};
use flatnet::{train_online, Network, Sgd};

fn main() -> flatnet::Result<()> {
    let mut network = Network::new(&[2, 3, 1], 1)?;
    let patterns = xor_patterns();
    let optimizer = Sgd::new(2.6);

    for round in 0..8 {
        let report = train_online(&mut network, &patterns, 1000, &optimizer, 0)?;
        println!("Round {round}: loss = {:.6}", report.final_loss);
    }

    for (pattern, output) in patterns.iter().zip(evaluate(&mut network, &patterns)?) {
        println!("Input: {:?} -> Output: {:.4}", pattern.input, output);
    }
    println!("{}", network.dump_state());
    Ok(())
}
