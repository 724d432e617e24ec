use rand::rngs::StdRng;
use rand::SeedableRng;

use shallow_nn::Network;

const XOR_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const XOR_TARGETS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

#[test]
fn test_learns_xor() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut network = Network::with_learning_rate(2, 4, 1, 0.5, &mut rng).unwrap();

    for _ in 0..20_000 {
        for (input, &target) in XOR_INPUTS.iter().zip(XOR_TARGETS.iter()) {
            network.train(input, &[target]).unwrap();
        }
    }

    for (input, &target) in XOR_INPUTS.iter().zip(XOR_TARGETS.iter()) {
        let output = network.compute_output(input).unwrap()[0];
        assert_eq!(
            output > 0.5,
            target > 0.5,
            "{input:?} produced {output:.4}, expected the {target} side of 0.5"
        );
    }
}

#[test]
fn test_seeded_initialization_is_reproducible() {
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);

    let net_a = Network::new(3, 5, 2, &mut rng_a).unwrap();
    let net_b = Network::new(3, 5, 2, &mut rng_b).unwrap();

    let input = [0.25, -0.5, 0.75];
    assert_eq!(
        net_a.compute_output(&input).unwrap(),
        net_b.compute_output(&input).unwrap()
    );
}

#[test]
fn test_xor_error_trends_down_during_training() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut network = Network::with_learning_rate(2, 4, 1, 0.5, &mut rng).unwrap();

    let mean_squared_error = |network: &Network| {
        XOR_INPUTS
            .iter()
            .zip(XOR_TARGETS.iter())
            .map(|(input, &target)| {
                let output = network.compute_output(input).unwrap()[0];
                (output - target).powi(2)
            })
            .sum::<f64>()
            / XOR_INPUTS.len() as f64
    };

    let initial = mean_squared_error(&network);
    for _ in 0..5_000 {
        for (input, &target) in XOR_INPUTS.iter().zip(XOR_TARGETS.iter()) {
            network.train(input, &[target]).unwrap();
        }
    }
    let trained = mean_squared_error(&network);

    assert!(
        trained < initial,
        "error did not decrease: {initial:.4} -> {trained:.4}"
    );
}
