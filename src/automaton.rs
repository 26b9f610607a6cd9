//! Grid-level entry points of the automaton engine.
//!
//! [`Automaton`] owns a [`LifeModel`] and the device it lives on, and converts between
//! [`Grid`] values and tensors. The caller owns the current generation and threads it
//! through [`Automaton::step`].

use burn::{
    prelude::Backend,
    tensor::{Tensor, TensorData},
};
use tracing::debug;

use crate::{
    error::{Error, Result},
    grid::{CountGrid, Grid},
    model::LifeModel,
};

pub struct Automaton<B: Backend> {
    model: LifeModel<B>,
    device: B::Device,
}

impl<B: Backend> Automaton<B> {
    pub fn new(device: B::Device) -> Self {
        Self {
            model: LifeModel::init(&device),
            device,
        }
    }

    /// Sum of the eight toroidal neighbors of every cell.
    pub fn neighbor_count(&self, grid: &Grid) -> Result<CountGrid> {
        let counts = self.model.neighbors(grid.to_tensor::<B>(&self.device));
        let values: Vec<f32> = read_back(counts, grid)?;
        // Counts are sums of 0.0/1.0 terms, so they are exact small integers
        let counts = values.into_iter().map(|v| v.round() as u8).collect();
        Ok(CountGrid::new(grid.rows(), grid.cols(), counts))
    }

    /// The next generation of `grid`. The input is left untouched.
    pub fn step(&self, grid: &Grid) -> Result<Grid> {
        let next = self.model.forward(grid.to_tensor::<B>(&self.device));
        let alive: Vec<bool> = read_back(next, grid)?;
        let next = Grid::new(
            grid.rows(),
            grid.cols(),
            alive.into_iter().map(u8::from).collect(),
        )?;
        debug!(live = next.live_count(), "Computed generation");
        Ok(next)
    }

    /// Runs `generations` steps from `grid`, returning the final generation.
    pub fn run(&self, grid: &Grid, generations: usize) -> Result<Grid> {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.step(&current)?;
        }
        Ok(current)
    }
}

impl<B: Backend> Default for Automaton<B> {
    fn default() -> Self {
        Self::new(B::Device::default())
    }
}

/// Flattens a `[1, 1, rows, cols]` tensor back into row-major values.
fn read_back<B, K, E>(tensor: Tensor<B, 4, K>, grid: &Grid) -> Result<Vec<E>>
where
    B: Backend,
    K: burn::tensor::BasicOps<B>,
    E: burn::tensor::Element,
{
    let data: TensorData = tensor.reshape([grid.rows(), grid.cols()]).into_data();
    data.convert::<E>()
        .to_vec::<E>()
        .map_err(|err| Error::Tensor(format!("{err:?}")))
}
