use std::fs;

use polyeval::{run_sweep, SweepConfig};

fn fast_full_sweep(dir: &tempfile::TempDir) -> SweepConfig {
    SweepConfig {
        repetitions: 1,
        output_path: dir.path().join("resultados.csv"),
        ..SweepConfig::default()
    }
}

#[test]
fn full_sweep_writes_one_row_per_degree() {
    let dir = tempfile::tempdir().unwrap();
    let config = fast_full_sweep(&dir);

    let results = run_sweep(&config, Vec::new()).unwrap();
    assert_eq!(results.len(), 100);

    let csv = fs::read_to_string(&config.output_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("grado,tiempo_tradicional_ns,tiempo_optimizado_ns")
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 100);
    for (row, expected_degree) in rows.iter().zip((10..=1000).step_by(10)) {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].parse::<usize>().unwrap(), expected_degree);
        fields[1].parse::<u64>().unwrap();
        fields[2].parse::<u64>().unwrap();
    }
}

#[test]
fn rerun_overwrites_previous_results() {
    let dir = tempfile::tempdir().unwrap();
    let config = fast_full_sweep(&dir);

    run_sweep(&config, Vec::new()).unwrap();
    run_sweep(&config, Vec::new()).unwrap();

    let csv = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(csv.lines().count(), 101);
}

#[test]
fn unwritable_output_fails_before_printing() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        output_path: dir.path().join("no_such_dir").join("resultados.csv"),
        ..fast_full_sweep(&dir)
    };
    let mut stdout = Vec::new();

    let err = run_sweep(&config, &mut stdout).unwrap_err();

    assert!(err.to_string().starts_with("could not open file for writing"));
    assert!(stdout.is_empty());
}
