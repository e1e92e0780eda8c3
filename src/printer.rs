//! Вывод матриц в консоль

use crate::matrix::Matrix;
use prettytable::{format, Cell, Row, Table};
use std::io::{self, Write};

pub const LABEL_A: &str = "Matrix A";
pub const LABEL_B: &str = "Matrix B";
pub const LABEL_RESULT: &str = "Result of A x B";

/// Строит таблицу без рамок, значения выровнены по правому краю
fn matrix_table(matrix: &Matrix) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for row in matrix.iter_rows() {
        let cells = row
            .iter()
            .map(|value| Cell::new(&value.to_string()).style_spec("r"))
            .collect();
        table.add_row(Row::new(cells));
    }
    table
}

/// Заголовок и строки матрицы, по одной строке матрицы на строку текста
pub fn render_matrix(label: &str, matrix: &Matrix) -> String {
    format!("{}:\n{}", label, matrix_table(matrix))
}

/// Записывает три блока: A, B и результат
pub fn write_report<W: Write>(out: &mut W, a: &Matrix, b: &Matrix, result: &Matrix) -> io::Result<()> {
    write!(out, "{}", render_matrix(LABEL_A, a))?;
    writeln!(out)?;
    write!(out, "{}", render_matrix(LABEL_B, b))?;
    writeln!(out)?;
    write!(out, "{}", render_matrix(LABEL_RESULT, result))?;
    out.flush()
}

/// Печатает отчет в stdout
pub fn print_report(a: &Matrix, b: &Matrix, result: &Matrix) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, a, b, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::build_sequential;

    fn parse_rows(body: &str) -> Vec<Vec<i64>> {
        body.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|v| v.parse().unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn render_keeps_row_major_order() {
        let m = Matrix::from_rows(&[vec![1, -20, 300], vec![4000, 5, 6]]).unwrap();
        let text = render_matrix("Matrix A", &m);
        let (label, body) = text.split_once('\n').unwrap();
        assert_eq!(label, "Matrix A:");
        assert_eq!(parse_rows(body), vec![vec![1, -20, 300], vec![4000, 5, 6]]);
    }

    #[test]
    fn report_contains_labels_in_order() {
        let a = build_sequential(1, 2, 2).unwrap();
        let b = build_sequential(5, 2, 2).unwrap();
        let c = a.matmul(&b).unwrap();

        let mut buf = Vec::new();
        write_report(&mut buf, &a, &b, &c).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let pos_a = text.find("Matrix A:").unwrap();
        let pos_b = text.find("Matrix B:").unwrap();
        let pos_r = text.find("Result of A x B:").unwrap();
        assert!(pos_a < pos_b && pos_b < pos_r);

        let result_rows = parse_rows(&text[pos_r + "Result of A x B:".len()..]);
        assert_eq!(result_rows, vec![vec![19, 22], vec![43, 50]]);
    }
}
