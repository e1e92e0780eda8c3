//! Типы матриц и связанные структуры

use crate::error::{MatrixError, Result};

/// Способ заполнения входных матриц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixType {
    /// Последовательные целые числа начиная со `start` (построчно)
    Sequential { start: i64 },
    /// Случайные целые из диапазона `[low, high)`
    Random { low: i64, high: i64 },
}

/// Целочисленная матрица с построчным хранением
///
/// Элемент `(i, j)` лежит в `elements[i * cols + j]`.
/// После создания матрица не изменяется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<i64>,
}

impl Matrix {
    /// Создает матрицу из построчного вектора значений
    pub fn from_vec(rows: usize, cols: usize, elements: Vec<i64>) -> Result<Self> {
        let expected = checked_len(rows, cols)?;
        if elements.len() != expected {
            return Err(MatrixError::ElementCount {
                expected,
                actual: elements.len(),
            });
        }
        Ok(Self { rows, cols, elements })
    }

    /// Создает матрицу из вложенных строк
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let elements: Vec<i64> = rows.iter().flatten().copied().collect();
        Self::from_vec(rows.len(), cols, elements)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Все элементы в построчном порядке
    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.elements[row * self.cols + col])
        } else {
            None
        }
    }

    /// Срез одной строки
    pub fn row(&self, row: usize) -> Option<&[i64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.elements[start..start + self.cols])
        } else {
            None
        }
    }

    /// Итератор по строкам матрицы
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.elements.chunks_exact(self.cols)
    }

    /// Произведение `self x other`
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        super::operations::multiply(self, other)
    }
}

/// Проверяет размеры и возвращает rows * cols
pub(crate) fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::DimensionOverflow { rows, cols })
}
