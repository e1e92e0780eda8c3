//! Построение, умножение и вывод целочисленных матриц

pub mod config;
pub mod error;
pub mod matrix;
pub mod printer;
pub mod utils;

// Реэкспорт основных типов для удобства
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, MatrixType};
