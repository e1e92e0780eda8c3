use matrix_product::config::{MATRIX_SIZE, MATRIX_TYPE};
use matrix_product::matrix::{initialize_matrices, multiply, reference_product};
use matrix_product::printer::{LABEL_A, LABEL_B, LABEL_RESULT};
use std::process::Command;

#[test]
fn test_reference_inputs() {
    let (a, b) = initialize_matrices(MATRIX_TYPE, MATRIX_SIZE).unwrap();
    assert_eq!((a.rows(), a.cols()), (16, 16));
    assert_eq!(a, b);
    assert_eq!(a.elements(), (1..=256).collect::<Vec<i64>>().as_slice());
}

#[test]
fn test_reference_product_corners() {
    let (a, b) = initialize_matrices(MATRIX_TYPE, MATRIX_SIZE).unwrap();
    let c = multiply(&a, &b).unwrap();
    assert_eq!((c.rows(), c.cols()), (16, 16));

    let top_left: i64 = (0..16i64).map(|k| (1 + k) * (1 + 16 * k)).sum();
    let bottom_right: i64 = (0..16i64).map(|k| (241 + k) * 16 * (k + 1)).sum();
    assert_eq!(top_left, 21896);
    assert_eq!(bottom_right, 546176);

    assert_eq!(c.get(0, 0), Some(21896));
    assert_eq!(c.get(0, 15), Some(23936));
    assert_eq!(c.get(15, 0), Some(486536));
    assert_eq!(c.get(15, 15), Some(546176));
    assert_eq!(c.elements().iter().sum::<i64>(), 69026816);
    assert_eq!(c, reference_product(&a, &b).unwrap());
}

#[test]
fn test_binary_prints_three_blocks() {
    let output = Command::new(env!("CARGO_BIN_EXE_matrix_product"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let pos_a = stdout.find(&format!("{LABEL_A}:")).unwrap();
    let pos_b = stdout.find(&format!("{LABEL_B}:")).unwrap();
    let pos_r = stdout.find(&format!("{LABEL_RESULT}:")).unwrap();
    assert!(pos_a < pos_b && pos_b < pos_r);

    let first_a_row: Vec<i64> = stdout[pos_a..]
        .lines()
        .skip(1)
        .find(|line| !line.trim().is_empty())
        .unwrap()
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(first_a_row, (1..=16).collect::<Vec<i64>>());

    let last_line: Vec<i64> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .last()
        .unwrap()
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(last_line.len(), 16);
    assert_eq!(last_line[15], 546176);
}
