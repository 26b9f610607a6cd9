//! Two small numeric simulations:
//!
//! - [`automaton`]: Conway's Game of Life on a toroidal grid, counted with a burn convolution
//! - [`perceptron`]: a single-layer perceptron trained on the OR truth table
//!
//! The two share nothing but the error type.

pub mod args;
pub mod automaton;
pub mod error;
pub mod grid;
pub mod logging;
pub mod model;
pub mod perceptron;
pub mod render;

pub use automaton::Automaton;
pub use error::{Error, Result};
pub use grid::{CountGrid, Grid};
pub use model::LifeModel;
pub use perceptron::{Prediction, Sample, WeightVector};

/// CPU backend used by the binary and the tests.
pub type DefaultBackend = burn::backend::NdArray;
