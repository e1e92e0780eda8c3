//! Сравнение производительности наивного умножения и ndarray
use anyhow::{Context, Result};
use matrix_product::{
    config::{BENCH_MATRIX_SIZE, BENCH_VALUE_RANGE},
    matrix::{compare_results, initialize_matrices, multiply, reference_product},
    utils::{init_logging, measure_time},
    MatrixType,
};
use prettytable::{row, Table};
use tracing::info;

const NUM_ITERATIONS: u32 = 10;

fn main() -> Result<()> {
    init_logging();

    let (low, high) = BENCH_VALUE_RANGE;
    let (a, b) = initialize_matrices(MatrixType::Random { low, high }, BENCH_MATRIX_SIZE)
        .context("Failed to build random matrices")?;
    info!(size = BENCH_MATRIX_SIZE, iterations = NUM_ITERATIONS, "matrices ready");

    // Прогрев
    let naive = multiply(&a, &b).context("Naive multiplication failed")?;
    let reference = reference_product(&a, &b).context("Reference multiplication failed")?;
    let results_match = compare_results(&naive, &reference);

    let (naive_runs, naive_duration) = measure_time(|| {
        (0..NUM_ITERATIONS).try_for_each(|_| multiply(&a, &b).map(drop))
    });
    naive_runs.context("Naive multiplication failed")?;

    let (reference_runs, reference_duration) = measure_time(|| {
        (0..NUM_ITERATIONS).try_for_each(|_| reference_product(&a, &b).map(drop))
    });
    reference_runs.context("Reference multiplication failed")?;

    let naive_avg = naive_duration.as_secs_f64() / NUM_ITERATIONS as f64;
    let reference_avg = reference_duration.as_secs_f64() / NUM_ITERATIONS as f64;
    let speedup = naive_avg / reference_avg;

    let mut table = Table::new();
    table.add_row(row!["Matrix size", format!("{0}x{0}", BENCH_MATRIX_SIZE)]);
    table.add_row(row!["Naive i-j-k, ms", format!("{:.3}", naive_avg * 1000.0)]);
    table.add_row(row!["ndarray dot, ms", format!("{:.3}", reference_avg * 1000.0)]);
    table.add_row(row!["ndarray speedup", format!("{:.2}x", speedup)]);
    table.add_row(row!["Results match", if results_match { "yes" } else { "no" }]);
    table.printstd();

    Ok(())
}
