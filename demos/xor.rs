use rand::rngs::StdRng;
use rand::SeedableRng;

use shallow_nn::{Network, NnError};

fn main() -> Result<(), NnError> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = Network::with_learning_rate(2, 4, 1, 0.5, &mut rng)?;

    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let targets = [[0.0], [1.0], [1.0], [0.0]];

    let epochs = 10_000;
    for epoch in 0..epochs {
        for (input, target) in inputs.iter().zip(targets.iter()) {
            network.train(input, target)?;
        }

        if epoch % 1000 == 0 {
            let mut loss = 0.0;
            for (input, target) in inputs.iter().zip(targets.iter()) {
                let output = network.compute_output(input)?;
                loss += (output[0] - target[0]).powi(2);
            }
            println!("Epoch {epoch}: loss = {:.6}", loss / inputs.len() as f64);
        }
    }

    for input in &inputs {
        let output = network.compute_output(input)?;
        println!("Input: {:?} -> Output: {:.4}", input, output[0]);
    }

    Ok(())
}
