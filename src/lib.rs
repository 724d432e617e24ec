pub mod activation;
pub mod error;
pub mod math;
pub mod network;

// Convenience re-exports
pub use error::NnError;
pub use math::matrix::Matrix;
pub use network::network::Network;
