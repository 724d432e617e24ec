use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative};
use crate::error::NnError;
use crate::math::matrix::Matrix;

const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Fully connected feedforward network with exactly one hidden layer and
/// sigmoid activation on both the hidden and the output layer.
///
/// The four parameter matrices are the network's only state. They are
/// randomized at construction from the caller-supplied generator and
/// mutated in place by every [`train`](Network::train) call;
/// [`compute_output`](Network::compute_output) never touches them.
/// Epoch and dataset iteration are the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    learning_rate: f64,
    weights_input_hidden: Matrix,
    weights_hidden_output: Matrix,
    bias_hidden: Matrix,
    bias_output: Matrix,
}

impl Network {
    /// Builds a network with the default learning rate of 0.01.
    pub fn new<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Network, NnError> {
        Network::with_learning_rate(input_size, hidden_size, output_size, DEFAULT_LEARNING_RATE, rng)
    }

    /// Builds a network with an explicit learning rate, which must be a
    /// positive finite number.
    pub fn with_learning_rate<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network, NnError> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NnError::InvalidLearningRate(learning_rate));
        }

        let mut weights_input_hidden = Matrix::zeros(hidden_size, input_size)?;
        let mut weights_hidden_output = Matrix::zeros(output_size, hidden_size)?;
        let mut bias_hidden = Matrix::zeros(hidden_size, 1)?;
        let mut bias_output = Matrix::zeros(output_size, 1)?;

        weights_input_hidden.randomize(rng);
        weights_hidden_output.randomize(rng);
        bias_hidden.randomize(rng);
        bias_output.randomize(rng);

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            weights_input_hidden,
            weights_hidden_output,
            bias_hidden,
            bias_output,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Forward pass: `sigmoid(W_ih * input + b_h)` into
    /// `sigmoid(W_ho * hidden + b_o)`, flattened to a plain vector.
    ///
    /// `input` must have exactly `input_size` entries; anything else
    /// surfaces as a `DimensionMismatch` from the underlying product.
    pub fn compute_output(&self, input: &[f64]) -> Result<Vec<f64>, NnError> {
        let inputs = Matrix::from_array(input)?;

        let mut hidden = Matrix::dot(&self.weights_input_hidden, &inputs)?;
        hidden.add_matrix(&self.bias_hidden)?;
        hidden.apply(sigmoid);

        let mut output = Matrix::dot(&self.weights_hidden_output, &hidden)?;
        output.add_matrix(&self.bias_output)?;
        output.apply(sigmoid);

        Ok(output.to_array())
    }

    /// One online gradient-descent step on a single labeled example.
    ///
    /// Runs the forward pass, then updates all four parameter matrices in
    /// place from the backpropagated error. Shape failures (wrong `input`
    /// or `target` length) are caught before any parameter is touched.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<(), NnError> {
        // Forward pass, keeping both post-sigmoid activations.
        let inputs = Matrix::from_array(input)?;

        let mut hidden = Matrix::dot(&self.weights_input_hidden, &inputs)?;
        hidden.add_matrix(&self.bias_hidden)?;
        hidden.apply(sigmoid);

        let mut output = Matrix::dot(&self.weights_hidden_output, &hidden)?;
        output.add_matrix(&self.bias_output)?;
        output.apply(sigmoid);

        let targets = Matrix::from_array(target)?;
        let output_errors = Matrix::sub(&targets, &output)?;

        // Output-layer delta: sigmoid'(output) (.) error, scaled by the rate.
        let mut output_gradient =
            Matrix::hadamard(&output.map(sigmoid_derivative), &output_errors)?;
        output_gradient.scale(self.learning_rate);

        let hidden_output_deltas = Matrix::dot(&output_gradient, &hidden.transpose())?;
        self.weights_hidden_output.add_matrix(&hidden_output_deltas)?;
        // The bias delta is the gradient itself; its input column is all ones.
        self.bias_output.add_matrix(&output_gradient)?;

        // The hidden error is propagated through the freshly updated output
        // weights, not the pre-update values.
        let hidden_errors = Matrix::dot(&self.weights_hidden_output.transpose(), &output_errors)?;

        let mut hidden_gradient =
            Matrix::hadamard(&hidden.map(sigmoid_derivative), &hidden_errors)?;
        hidden_gradient.scale(self.learning_rate);

        let input_hidden_deltas = Matrix::dot(&hidden_gradient, &inputs.transpose())?;
        self.weights_input_hidden.add_matrix(&input_hidden_deltas)?;
        self.bias_hidden.add_matrix(&hidden_gradient)?;

        Ok(())
    }
}
