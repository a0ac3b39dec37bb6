use majority_bench::report::{render_html, write_html};
use majority_bench::utils::{last_observed, NO_MAJORITY};
use majority_bench::{log_checkpoints, BenchConfig, BenchError, Benchmark};

fn small_config() -> BenchConfig {
    BenchConfig::default()
        .with_max_size(2_000)
        .with_brute_force_cap(500)
        .with_repeats(3)
}

#[test]
fn test_run_measures_every_checkpoint() {
    let config = small_config();
    let bench = Benchmark::new(config.clone()).unwrap();

    let mut streamed = Vec::new();
    let rows = bench.run(|row| streamed.push(row.clone())).unwrap();

    let sizes: Vec<usize> = rows.iter().map(|r| r.size).collect();
    assert_eq!(sizes, log_checkpoints(2_000));
    assert_eq!(streamed, rows);

    for row in &rows {
        assert!(row.moore_us >= 0.0);
        assert!(row.sort_us >= 0.0);
        assert_eq!(row.brute_us.is_some(), row.size <= 500, "size {}", row.size);
    }

    // the last timed call found the injected majority value
    assert_eq!(last_observed(), i64::from(config.majority_value));
    assert_ne!(last_observed(), NO_MAJORITY);
}

#[test]
fn test_run_is_reproducible_in_shape() {
    let bench = Benchmark::new(small_config().with_seed(7)).unwrap();
    let a = bench.run(|_| {}).unwrap();
    let b = bench.run(|_| {}).unwrap();
    assert_eq!(a.len(), b.len());
    assert!(a.iter().zip(&b).all(|(x, y)| x.size == y.size));
}

#[test]
fn test_new_rejects_zero_repeats() {
    assert!(Benchmark::new(small_config().with_repeats(0)).is_err());
}

#[test]
fn test_report_written_to_disk() {
    let path = std::env::temp_dir().join(format!(
        "majority-bench-{}-report.html",
        std::process::id()
    ));
    let config = small_config().with_output_path(&path);
    let rows = Benchmark::new(config.clone()).unwrap().run(|_| {}).unwrap();

    write_html(&config.output_path, &rows, &config).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_html(&rows, &config).unwrap());
    assert!(written.contains("up to 2,000 elements (brute force capped at 500)"));
    assert!(written.contains("null"));

    // a second run overwrites the file
    write_html(&config.output_path, &rows[..1], &config).unwrap();
    let rewritten = std::fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains(r#"const labels = ["1"];"#));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_write_error_is_reported() {
    let config = small_config().with_output_path(
        std::env::temp_dir()
            .join("majority-bench-no-such-dir")
            .join("benchmark.html"),
    );
    let err = write_html(&config.output_path, &[], &config).unwrap_err();
    assert!(matches!(err, BenchError::Write { .. }));
    assert!(err.to_string().contains("benchmark.html"));
}
