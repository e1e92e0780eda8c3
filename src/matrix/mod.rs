//! Модуль для работы с матрицами
//! 
//! Предоставляет:
//! - Тип целочисленной матрицы
//! - Построение, умножение и сверку результатов

mod types;
pub mod operations;

pub use types::{Matrix, MatrixType};
pub use operations::{
    build_random, build_sequential, compare_results, initialize_matrices,
    initialize_matrices_with, multiply, reference_product,
};
