use anyhow::Result;
use hashbench::algorithm::AlgorithmId;
use hashbench::bench::Benchmark;
use hashbench::console::{RecordingConsole, Severity};
use hashbench::progress::ProgressMode;
use hashbench::{run, Args};
use std::fs::{self, File};
use std::io::Write;

fn args_for(input: std::path::PathBuf, log: Option<std::path::PathBuf>) -> Args {
    Args {
        input,
        iterations: 20,
        algorithms: Vec::new(),
        log,
        no_progress: true,
    }
}

#[test]
fn test_integration_full_flow() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.txt");
    let log_path = dir.path().join("hashbench.log");

    let mut f = File::create(&input_path)?;
    f.write_all(b"abc")?;
    drop(f);

    // 1. Full run over every algorithm
    let outcomes = run(args_for(input_path.clone(), Some(log_path.clone())))?;
    assert_eq!(outcomes.len(), AlgorithmId::ALL.len() + 1);
    assert_eq!(outcomes[0].name, "xxHash");

    let md5 = outcomes.iter().find(|o| o.name == "MD5").unwrap();
    assert_eq!(md5.digest, "900150983cd24fb0d6963f7d28e17f72");

    for (outcome, algo) in outcomes[1..].iter().zip(AlgorithmId::ALL) {
        assert_eq!(outcome.name, algo.name());
        assert_eq!(outcome.digest.len(), algo.digest_len() * 2);
        assert_eq!(outcome.report.iterations, 20);
    }

    // 2. Transcript mirrors the console
    let log_content = fs::read_to_string(&log_path)?;
    assert!(log_content.contains("hashbench"));
    assert!(log_content.contains("MD5: 900150983cd24fb0d6963f7d28e17f72"));
    assert_eq!(log_content.matches("avg time for 20 iterations").count(), 8);

    // 3. Second run over the unchanged file gives the same digests
    let again = run(args_for(input_path.clone(), None))?;
    let digests: Vec<&str> = outcomes.iter().map(|o| o.digest.as_str()).collect();
    let digests_again: Vec<&str> = again.iter().map(|o| o.digest.as_str()).collect();
    assert_eq!(digests, digests_again);

    // 4. Algorithm selection
    let mut selected = args_for(input_path, None);
    selected.algorithms = vec![AlgorithmId::Sha1, AlgorithmId::Md5];
    let names: Vec<String> = run(selected)?.into_iter().map(|o| o.name).collect();
    assert_eq!(names, vec!["xxHash", "MD5", "SHA1"]);

    Ok(())
}

#[test]
fn test_integration_missing_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("hashbench.log");

    let outcomes = run(args_for(
        dir.path().join("does-not-exist.txt"),
        Some(log_path.clone()),
    ))?;
    assert!(outcomes.is_empty());

    let log_content = fs::read_to_string(&log_path)?;
    assert!(log_content.contains("error"));
    assert!(log_content.contains("does-not-exist.txt"));
    assert!(!log_content.contains("avg time for"));
    Ok(())
}

#[test]
fn test_integration_console_transcript() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, vec![b'x'; 4096])?;

    let console = RecordingConsole::new();
    Benchmark::new(&console, 10)
        .with_progress(ProgressMode::Hidden)
        .run_all(&input_path)?;

    let lines = console.lines();
    assert_eq!(
        lines[0],
        (Severity::Log, "Loading input file...".to_string())
    );
    assert_eq!(lines[1], (Severity::Success, "Input file loaded".to_string()));
    assert_eq!(lines[2], (Severity::Info, "Length: 4096 (4.00 KB)".to_string()));
    assert!(console.with_severity(Severity::Error).is_empty());
    assert_eq!(
        console
            .with_severity(Severity::Success)
            .iter()
            .filter(|l| *l == "Done.")
            .count(),
        8
    );
    Ok(())
}
