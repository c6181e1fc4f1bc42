//! `mv-core` - Dense matrix-vector products over a fixed pool of worker threads.
//!
//! This crate provides:
//! - A `Matrix` type holding row-major f64 data with a `Shape`
//! - A `MatVecBackend` trait with serial and threaded implementations
//! - Balanced block partitioning of output rows among workers
//! - The per-row dot-product kernel shared by every backend
//! - A `WorkerPool` that runs the kernel on disjoint row slices and joins
//! - A `TimingHarness` that brackets total and compute-only intervals

pub mod backend;
pub mod cpu;
pub mod error;
pub mod matrix;
pub mod partition;
pub mod pool;
pub mod shape;
pub mod timing;

// Re-export primary types at the crate root for convenience.
pub use backend::MatVecBackend;
pub use cpu::SerialBackend;
pub use error::{MatVecError, Result};
pub use matrix::Matrix;
pub use partition::{partition, RowRange};
pub use pool::WorkerPool;
pub use shape::Shape;
pub use timing::{TimingHarness, TimingSample};
