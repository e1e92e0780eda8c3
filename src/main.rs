//! Эталонный запуск: две матрицы 16x16 из чисел 1..256, их произведение и вывод

use anyhow::{Context, Result};
use matrix_product::{
    config::{MATRIX_SIZE, MATRIX_TYPE},
    matrix::{compare_results, initialize_matrices, multiply, reference_product},
    printer::print_report,
    utils::{init_logging, measure_time},
};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    init_logging();
    info!(size = MATRIX_SIZE, matrix_type = ?MATRIX_TYPE, "starting matrix multiplication");

    let (a, b) = initialize_matrices(MATRIX_TYPE, MATRIX_SIZE)
        .context("Failed to build input matrices")?;

    let (result, duration) = measure_time(|| multiply(&a, &b));
    let result = result.context("Failed to multiply matrices")?;
    debug!(?duration, "multiplication finished");

    let reference = reference_product(&a, &b).context("Failed to compute reference product")?;
    if !compare_results(&result, &reference) {
        warn!("product differs from ndarray reference");
    }

    print_report(&a, &b, &result).context("Failed to write report")?;
    Ok(())
}
