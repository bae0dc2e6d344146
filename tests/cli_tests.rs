use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    models: PathBuf,
    document: PathBuf,
}

impl TestContext {
    fn new(document: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let models = dir.path().join("models");
        let document_path = dir.path().join("input.txt");

        fs::write(dir.path().join("x.txt"), "aaab").unwrap();
        fs::write(dir.path().join("y.txt"), "bbba").unwrap();
        fs::write(&document_path, document).unwrap();

        Self {
            dir,
            models,
            document: document_path,
        }
    }

    fn corpus(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }

    fn lang_args(&self) -> Vec<String> {
        vec![
            "--lang".to_string(),
            format!("X={}", self.corpus("x.txt")),
            "--lang".to_string(),
            format!("Y={}", self.corpus("y.txt")),
        ]
    }

    fn run(&self, command: &str, extra: &[&str]) -> Output {
        let mut args: Vec<String> = vec![
            command.to_string(),
            "--models-dir".to_string(),
            self.models.display().to_string(),
        ];
        if command == "classify" {
            args.push(self.document.display().to_string());
        }
        args.extend(self.lang_args());
        args.extend(extra.iter().map(|s| s.to_string()));

        Command::new(env!("CARGO_BIN_EXE_langrank"))
            .args(&args)
            .output()
            .expect("Failed to execute binary")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn profile_path(models: &Path, ngram: usize, language: &str, ext: &str) -> PathBuf {
    models
        .join(format!("{}-gram", ngram))
        .join(format!("{}.{}", language, ext))
}

#[test]
fn test_cli_classify_prints_prediction_and_ranking() {
    let ctx = TestContext::new("aaab");
    let output = ctx.run("classify", &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("The input document is written in X."), "{}", out);
    assert!(out.contains("Ranking is as follows:"));

    // Rows: | position | score | language | ...
    let row = Regex::new(r"\|\s*(\d+)\s*\|\s*(\d+)\s*\|\s*(\w+)\s*\|").unwrap();
    let rows: Vec<(u64, String)> = row
        .captures_iter(&out)
        .map(|c| (c[2].parse().unwrap(), c[3].to_string()))
        .collect();
    assert_eq!(rows, vec![(0, "X".to_string()), (2, "Y".to_string())]);
}

#[test]
fn test_cli_json_output() {
    let ctx = TestContext::new("bbba");
    let output = ctx.run("classify", &["--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["predicted"], "Y");
    assert_eq!(json["ranking"][0]["language"], "Y");
    assert_eq!(json["ranking"][0]["score"], 0);
    assert_eq!(json["ranking"][1]["language"], "X");
    assert_eq!(json["ranking"][1]["score"], 2);
}

#[test]
fn test_cli_persists_language_profiles_but_not_the_document() {
    let ctx = TestContext::new("aaab");
    let output = ctx.run("classify", &[]);
    assert!(output.status.success());

    assert!(profile_path(&ctx.models, 1, "X", "tsv").is_file());
    assert!(profile_path(&ctx.models, 1, "Y", "tsv").is_file());
    assert!(!profile_path(&ctx.models, 1, "Input", "tsv").exists());

    // Second run loads from storage and agrees.
    let again = ctx.run("classify", &["--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&again)).unwrap();
    assert_eq!(json["predicted"], "X");
}

#[test]
fn test_cli_ngram_and_format_select_store_location() {
    let ctx = TestContext::new("aaab");
    let output = ctx.run("classify", &["--ngram", "2", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(profile_path(&ctx.models, 2, "X", "json").is_file());
    assert!(!profile_path(&ctx.models, 1, "X", "tsv").exists());
}

#[test]
fn test_cli_corrupt_profile_fails_then_train_recovers() {
    let ctx = TestContext::new("aaab");
    let path = profile_path(&ctx.models, 1, "X", "tsv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "symbol\trank\na\t1\nb\t1\n").unwrap();

    let output = ctx.run("classify", &[]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Corrupt Profile for 'X'"), "{}", err);
    assert!(!stdout(&output).contains("Ranking is as follows"));

    let train = ctx.run("train", &[]);
    assert!(train.status.success(), "stderr: {}", stderr(&train));

    let output = ctx.run("classify", &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("written in X."));
}

#[test]
fn test_cli_missing_corpus_fails_naming_the_file() {
    let ctx = TestContext::new("aaab");
    let output = Command::new(env!("CARGO_BIN_EXE_langrank"))
        .args([
            "classify",
            "--models-dir",
            ctx.models.to_str().unwrap(),
            ctx.document.to_str().unwrap(),
            "--lang",
            "Nowhere=/no/such/corpus.txt",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("/no/such/corpus.txt"));
}

#[test]
fn test_cli_rejects_reserved_language() {
    let ctx = TestContext::new("aaab");
    let output = ctx.run(
        "classify",
        &["--lang", &format!("Input={}", ctx.corpus("x.txt"))],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("reserved"));
}

#[test]
fn test_cli_requires_a_language() {
    let output = Command::new(env!("CARGO_BIN_EXE_langrank"))
        .args(["classify", "doc.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_config_file_with_override() {
    let ctx = TestContext::new("aaab");
    let config_path = ctx.dir.path().join("langrank.json");
    fs::write(
        &config_path,
        r#"{ "profile": { "ngram": 3 }, "store": { "format": "json" } }"#,
    )
    .unwrap();

    let output = ctx.run(
        "classify",
        &["--config", config_path.to_str().unwrap(), "--ngram", "2"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(profile_path(&ctx.models, 2, "X", "json").is_file());
    assert!(!profile_path(&ctx.models, 3, "X", "json").exists());
}
