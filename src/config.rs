//! Параметры эталонного запуска

use crate::matrix::MatrixType;

/// Размер квадратных матриц
pub const MATRIX_SIZE: usize = 16;

/// Первое значение последовательности, которой заполняются матрицы
pub const SEQUENCE_START: i64 = 1;

/// Тип матриц эталонного запуска
pub const MATRIX_TYPE: MatrixType = MatrixType::Sequential { start: SEQUENCE_START };

/// Размер матриц для сравнения производительности
pub const BENCH_MATRIX_SIZE: usize = 256;

/// Диапазон случайных значений для сравнения производительности
pub const BENCH_VALUE_RANGE: (i64, i64) = (-1000, 1000);
