//! # Game of Life Convolution Model
//!
//! Conway's Game of Life computed with a single convolutional layer:
//!
//! 1. **Toroidal padding**: the grid is extended by one cell on each side, copied from the
//!    opposite edge, so the board wraps around instead of ending at a wall
//! 2. **Convolution**: a 3x3 kernel with a zero centre sums the eight neighbors of each
//!    cell over the padded grid (no further padding, so the output keeps the input shape)
//! 3. **Boolean logic**: birth and survival rules are applied with tensor comparisons
//!
//! ## Rules
//!
//! - **Birth or continued life**: any cell with exactly 3 live neighbors is alive next
//! - **Survival**: a live cell with exactly 2 live neighbors stays alive
//! - **Death**: every other cell is dead next generation
//!
//! Every cell is computed from the same input tensor, so all transitions within one
//! generation are simultaneous.

/// 3x3 kernel that sums the eight neighbors of a cell and ignores the cell itself.
///
/// Layout:
/// ```text
/// [1.0, 1.0, 1.0]
/// [1.0, 0.0, 1.0]
/// [1.0, 1.0, 1.0]
/// ```
const NEIGHBOR_KERNEL: [[f32; 3]; 3] = [[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]];

use burn::{
    module::{Module, Param},
    nn::{
        PaddingConfig2d,
        conv::{Conv2d, Conv2dConfig},
    },
    prelude::Backend,
    tensor::{Bool, Float, Tensor},
};

/// Convolutional model computing one Game of Life generation on a toroidal grid.
///
/// ## Architecture
///
/// - **Input**: 4D tensor `[batch, channels, height, width]` holding 0.0/1.0 values
/// - **Padding**: one wrapped row/column on each side, built with `narrow` + `cat`
/// - **Convolution**: 3x3 kernel, valid padding, no bias
/// - **Output**: 4D boolean tensor of the same shape holding the next generation
#[derive(Module, Debug)]
pub struct LifeModel<B: Backend> {
    /// Neighbor-counting layer: 1 input channel, 1 output channel, 3x3 kernel, no bias.
    conv: Conv2d<B>,
}

impl<B: Backend> LifeModel<B> {
    /// Creates a model with a custom `[1, 1, 3, 3]` kernel.
    pub fn new(kernel: Tensor<B, 4, Float>, device: &B::Device) -> Self {
        let mut conv = Conv2dConfig::new([1, 1], [3, 3])
            .with_bias(false)
            .with_padding(PaddingConfig2d::Valid)
            .init(device);
        conv.weight = Param::from_tensor(kernel);
        Self { conv }
    }

    /// Creates the standard neighbor-counting model on `device`.
    pub fn init(device: &B::Device) -> Self {
        let matrix: Tensor<B, 2, Float> = Tensor::from_floats(NEIGHBOR_KERNEL, device);
        Self::new(matrix.reshape([1, 1, 3, 3]), device)
    }

    /// Live-neighbor count for every cell, with indices wrapping at the edges.
    ///
    /// The output has the same shape as `grid`; each value is a whole number in `0..=8`.
    pub fn neighbors(&self, grid: Tensor<B, 4, Float>) -> Tensor<B, 4, Float> {
        self.conv.forward(wrap_pad(grid))
    }

    /// Computes the next generation.
    ///
    /// # Arguments
    ///
    /// * `grid` - Current generation, shape `[batch, channels, height, width]`, values 0.0/1.0
    ///
    /// # Returns
    ///
    /// Boolean tensor of the same shape, `true` where the cell is alive next generation.
    pub fn forward(&self, grid: Tensor<B, 4, Float>) -> Tensor<B, 4, Bool> {
        let neighbors = self.neighbors(grid.clone());

        // Exactly three neighbors: alive regardless of current state
        let birth = neighbors.clone().equal_elem(3.0);

        // Exactly two neighbors: only a live cell stays alive
        let survive = neighbors.equal_elem(2.0).bool_and(grid.equal_elem(1.0));

        birth.bool_or(survive)
    }
}

impl<B: Backend> Default for LifeModel<B> {
    /// Standard neighbor-counting model on the backend's default device.
    fn default() -> Self {
        Self::init(&B::Device::default())
    }
}

/// Pads the last two dimensions by one cell on each side, taking each new row or column
/// from the opposite edge.
///
/// A `[b, c, h, w]` input becomes `[b, c, h + 2, w + 2]`. For `h == 1` or `w == 1` the
/// wrapped row/column is the input itself, matching shift-and-add on a one-cell-wide torus.
fn wrap_pad<B: Backend>(grid: Tensor<B, 4, Float>) -> Tensor<B, 4, Float> {
    let [_, _, height, width] = grid.dims();

    let top = grid.clone().narrow(2, height - 1, 1);
    let bottom = grid.clone().narrow(2, 0, 1);
    let grid = Tensor::cat(vec![top, grid, bottom], 2);

    let left = grid.clone().narrow(3, width - 1, 1);
    let right = grid.clone().narrow(3, 0, 1);
    Tensor::cat(vec![left, grid, right], 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn tensor(rows: &[[f32; 3]; 3]) -> Tensor<TestBackend, 4, Float> {
        Tensor::<TestBackend, 2, Float>::from_floats(*rows, &Default::default())
            .reshape([1, 1, 3, 3])
    }

    #[test]
    fn test_wrap_pad_shape_and_corners() {
        let grid = tensor(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let padded = wrap_pad(grid);
        assert_eq!(padded.dims(), [1, 1, 5, 5]);

        let values: Vec<f32> = padded.into_data().to_vec().unwrap();
        // Top-left corner of the padding is the bottom-right cell of the input
        assert_eq!(values[0], 9.0);
        // Bottom-right corner of the padding is the top-left cell of the input
        assert_eq!(values[24], 1.0);
        // Padded top row is the input's last row, wrapped horizontally
        assert_eq!(&values[0..5], &[9.0, 7.0, 8.0, 9.0, 7.0]);
    }

    #[test]
    fn test_neighbors_keeps_shape() {
        let model = LifeModel::<TestBackend>::default();
        let grid = tensor(&[[0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(model.neighbors(grid).dims(), [1, 1, 3, 3]);
    }

    #[test]
    fn test_forward_full_torus_dies() {
        // On a 3x3 torus every cell of a full board sees all eight others
        let model = LifeModel::<TestBackend>::default();
        let grid = tensor(&[[1.0; 3]; 3]);
        let next: Vec<bool> = model.forward(grid).into_data().to_vec().unwrap();
        assert!(next.iter().all(|alive| !alive));
    }
}
