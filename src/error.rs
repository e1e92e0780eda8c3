//! Ошибки матричных операций

use thiserror::Error;

/// Результат матричных операций
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Ошибки построения и умножения матриц
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Нулевое число строк или столбцов
    #[error("invalid matrix dimension: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Число столбцов левой матрицы не равно числу строк правой
    #[error("dimension mismatch: left matrix has {left_cols} columns, right matrix has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// Промежуточное значение не помещается в i64
    #[error("numeric overflow at cell ({row}, {col})")]
    NumericOverflow { row: usize, col: usize },

    /// rows * cols не помещается в usize
    #[error("matrix dimension overflow: {rows}x{cols} elements do not fit in memory index range")]
    DimensionOverflow { rows: usize, cols: usize },

    /// Пустой диапазон для случайного заполнения
    #[error("empty value range: [{low}, {high})")]
    EmptyRange { low: i64, high: i64 },

    /// Длина данных не совпадает с rows * cols
    #[error("element count mismatch: expected {expected}, got {actual}")]
    ElementCount { expected: usize, actual: usize },
}
