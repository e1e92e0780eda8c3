//! Операции над матрицами

use super::types::{checked_len, Matrix, MatrixType};
use crate::error::{MatrixError, Result};
use ndarray::Array2;
use rand::Rng;
use tracing::debug;

/// Строит матрицу из последовательных целых: элемент `(i, j)` равен `start + i * cols + j`
pub fn build_sequential(start: i64, rows: usize, cols: usize) -> Result<Matrix> {
    let len = checked_len(rows, cols)?;
    let elements = (0..len)
        .map(|idx| {
            i64::try_from(idx)
                .ok()
                .and_then(|offset| start.checked_add(offset))
                .ok_or(MatrixError::NumericOverflow {
                    row: idx / cols,
                    col: idx % cols,
                })
        })
        .collect::<Result<Vec<i64>>>()?;
    Matrix::from_vec(rows, cols, elements)
}

/// Строит матрицу со случайными значениями из `[low, high)`
pub fn build_random<R: Rng + ?Sized>(
    rng: &mut R,
    low: i64,
    high: i64,
    rows: usize,
    cols: usize,
) -> Result<Matrix> {
    if low >= high {
        return Err(MatrixError::EmptyRange { low, high });
    }
    let len = checked_len(rows, cols)?;
    let elements = (0..len).map(|_| rng.gen_range(low..high)).collect();
    Matrix::from_vec(rows, cols, elements)
}

/// Инициализирует пару квадратных матриц заданного типа и размера
pub fn initialize_matrices(matrix_type: MatrixType, size: usize) -> Result<(Matrix, Matrix)> {
    initialize_matrices_with(&mut rand::thread_rng(), matrix_type, size)
}

/// То же, что [`initialize_matrices`], с явным генератором
pub fn initialize_matrices_with<R: Rng + ?Sized>(
    rng: &mut R,
    matrix_type: MatrixType,
    size: usize,
) -> Result<(Matrix, Matrix)> {
    debug!(?matrix_type, size, "initializing matrices");
    match matrix_type {
        MatrixType::Sequential { start } => {
            let a = build_sequential(start, size, size)?;
            let b = build_sequential(start, size, size)?;
            Ok((a, b))
        }
        MatrixType::Random { low, high } => {
            let a = build_random(rng, low, high, size, size)?;
            let b = build_random(rng, low, high, size, size)?;
            Ok((a, b))
        }
    }
}

/// Наивное умножение матриц (порядок циклов i-j-k)
///
/// Арифметика точная: любое переполнение i64 возвращается как
/// [`MatrixError::NumericOverflow`] с координатами ячейки результата.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }

    let (rows, inner, cols) = (a.rows(), a.cols(), b.cols());
    debug!(rows, inner, cols, "multiplying matrices");

    let lhs = a.elements();
    let rhs = b.elements();
    let mut c = Vec::with_capacity(rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            let mut sum = 0i64;
            for k in 0..inner {
                sum = lhs[i * inner + k]
                    .checked_mul(rhs[k * cols + j])
                    .and_then(|term| sum.checked_add(term))
                    .ok_or(MatrixError::NumericOverflow { row: i, col: j })?;
            }
            c.push(sum);
        }
    }

    Matrix::from_vec(rows, cols, c)
}

/// Эталонное произведение через `ndarray`
///
/// Считается в i128, поэтому порядок суммирования не важен. Ячейка, точное
/// значение которой не помещается в i64, возвращается как
/// [`MatrixError::NumericOverflow`].
pub fn reference_product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }
    check_terms(a, b)?;

    let product = to_wide_array(a).dot(&to_wide_array(b));
    let (rows, cols) = product.dim();
    let elements = product
        .indexed_iter()
        .map(|((row, col), &value)| {
            i64::try_from(value).map_err(|_| MatrixError::NumericOverflow { row, col })
        })
        .collect::<Result<Vec<i64>>>()?;
    Matrix::from_vec(rows, cols, elements)
}

/// Проверяет, что |a[i][k] * b[k][j]| <= 2^63 для всех слагаемых
///
/// Тогда сумма любых `inner` слагаемых помещается в i128.
fn check_terms(a: &Matrix, b: &Matrix) -> Result<()> {
    const TERM_LIMIT: u128 = 1 << 63;

    for k in 0..a.cols() {
        let (row, lhs) = (0..a.rows())
            .map(|i| (i, a.elements()[i * a.cols() + k].unsigned_abs()))
            .max_by_key(|&(_, v)| v)
            .unwrap_or((0, 0));
        let (col, rhs) = (0..b.cols())
            .map(|j| (j, b.elements()[k * b.cols() + j].unsigned_abs()))
            .max_by_key(|&(_, v)| v)
            .unwrap_or((0, 0));
        if u128::from(lhs) * u128::from(rhs) > TERM_LIMIT {
            return Err(MatrixError::NumericOverflow { row, col });
        }
    }
    Ok(())
}

fn to_wide_array(m: &Matrix) -> Array2<i128> {
    let cols = m.cols();
    let elements = m.elements();
    Array2::from_shape_fn((m.rows(), cols), |(i, j)| i128::from(elements[i * cols + j]))
}

/// Сравнивает результаты двух реализаций умножения
pub fn compare_results(actual: &Matrix, expected: &Matrix) -> bool {
    if (actual.rows(), actual.cols()) != (expected.rows(), expected.cols()) {
        debug!(
            actual_rows = actual.rows(),
            actual_cols = actual.cols(),
            expected_rows = expected.rows(),
            expected_cols = expected.cols(),
            "result shapes differ"
        );
        return false;
    }

    let diff_count = actual
        .elements()
        .iter()
        .zip(expected.elements())
        .filter(|(x, y)| x != y)
        .count();

    if diff_count > 0 {
        debug!(diff_count, "results differ");
        false
    } else {
        debug!("results match");
        true
    }
}
