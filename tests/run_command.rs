use clap::Parser;
use coordq::cli::run::{RunArgs, execute};
use coordq::{RegretRow, RunSummary};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> RunArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    RunArgs::parse_from(args)
}

fn read_rows(path: &std::path::Path) -> Vec<RegretRow> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("regret curve should deserialize")
}

#[test]
fn writes_one_record_per_timestep() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("regrets.csv");

    let args = parse_args([
        "coordq",
        "--nodes",
        "3",
        "--experiments",
        "2",
        "--timesteps",
        "10",
        "--seed",
        "42",
        "--output",
        output.to_str().unwrap(),
    ]);

    execute(args).expect("run should succeed");

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 10);
    for (timestep, row) in rows.iter().enumerate() {
        assert_eq!(row.timestep, timestep);
        assert!(row.mean.is_finite());
        assert!(row.std_dev >= 0.0);
    }
}

#[test]
fn single_timestep_run_is_deterministic() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("regrets.csv");

    let args = parse_args([
        "coordq",
        "--nodes",
        "3",
        "--experiments",
        "1",
        "--timesteps",
        "1",
        "--seed",
        "0",
        "--output",
        output.to_str().unwrap(),
    ]);

    execute(args).expect("run should succeed");

    // The first joint action is all zeros: both edges pay rate 0.1, so the
    // normalized regret is 1 − 0.2 / 0.55 whatever the seed draws.
    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].timestep, 0);
    assert!((rows[0].mean - (1.0 - 0.2 / 0.55)).abs() < 1e-12);
    assert_eq!(rows[0].std_dev, 0.0);
}

#[test]
fn fixed_seed_reproduces_the_output_file() {
    let tmp = tempdir().unwrap();
    let first = tmp.path().join("first.csv");
    let second = tmp.path().join("second.csv");

    for output in [&first, &second] {
        let args = parse_args([
            "coordq",
            "--nodes",
            "4",
            "--experiments",
            "3",
            "--timesteps",
            "25",
            "--seed",
            "7",
            "--output",
            output.to_str().unwrap(),
        ]);
        execute(args).expect("run should succeed");
    }

    let first_contents = std::fs::read_to_string(&first).unwrap();
    let second_contents = std::fs::read_to_string(&second).unwrap();
    assert_eq!(first_contents, second_contents);
}

#[test]
fn summary_file_echoes_the_configuration() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("regrets.csv");
    let summary_path = tmp.path().join("nested").join("summary.json");

    let args = parse_args([
        "coordq",
        "--nodes",
        "3",
        "--experiments",
        "2",
        "--timesteps",
        "5",
        "--seed",
        "1",
        "--summary",
        summary_path.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    execute(args).expect("run with summary should succeed");

    let summary = RunSummary::load(&summary_path).expect("summary should load");
    assert_eq!(summary.config.agents, 3);
    assert_eq!(summary.config.experiments, 2);
    assert_eq!(summary.config.timesteps, 5);
    assert_eq!(summary.config.seed, Some(1));

    let final_regret = summary.final_regret.expect("run had timesteps");
    assert_eq!(final_regret.timestep, 4);
}

#[test]
fn short_chains_are_rejected_without_output() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("regrets.csv");

    let args = parse_args([
        "coordq",
        "--nodes",
        "2",
        "--output",
        output.to_str().unwrap(),
    ]);

    let result = execute(args);
    assert!(result.is_err());
    assert!(
        result.unwrap_err().to_string().contains("at least three"),
        "error should explain the minimum chain length"
    );
    assert!(!output.exists(), "no partial output on configuration errors");
}
