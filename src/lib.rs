//! Gated highway layer for sequence models, built on Burn.
//!
//! A [`Highway`](ml::highway::Highway) stacks `num_layers` repetitions of
//!
//! ```text
//! t   = relu(transform_i(x))
//! g   = sigmoid(gate_i(x))
//! out = g * t + (1 - g) * carry
//! ```
//!
//! where `carry` is `t` for the first repetition and the repetition's input for later ones.
//!
//! over the trailing feature dimension, with dropout between repetitions
//! when called in [`ForwardMode::Train`](domain::ForwardMode).
//!
//! ```rust,no_run
//! use burn::{backend::NdArray, tensor::Tensor};
//! use highway_nn::{domain::ForwardMode, ml::HighwayConfig};
//!
//! let device = Default::default();
//! let highway = HighwayConfig::new(16)
//!     .with_num_layers(2)
//!     .with_dropout(0.1)
//!     .init::<NdArray>(&device)
//!     .unwrap();
//!
//! let x = Tensor::<NdArray, 3>::ones([4, 10, 16], &device);
//! let y = highway.forward(x, ForwardMode::Eval).unwrap();
//! assert_eq!(y.dims(), [4, 10, 16]);
//! ```

pub mod application;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;

pub use domain::{ForwardMode, HighwayError, HighwayVariant};
pub use ml::highway::{Highway, HighwayConfig, HighwayTrace};
