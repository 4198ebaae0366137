//! End-to-end tests of the `genome-matcher` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn genome_file(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".txt").expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write genome file");
    temp.flush().expect("Failed to flush genome file");
    temp
}

fn fish_and_salmon() -> NamedTempFile {
    genome_file(">fish\nCTGAGAGTTTCAGTC\n>salmon\nGGCTCATG\nCTCG\n")
}

fn cmd() -> Command {
    Command::cargo_bin("genome-matcher").expect("binary should build")
}

#[test]
fn test_find_text_output() {
    let genomes = fish_and_salmon();

    cmd()
        .args(["find", "CTC", "--search-length", "3", "--genomes"])
        .arg(genomes.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("salmon: length 3 at position 2"))
        .stdout(predicate::str::contains("fish: length 3 at position 0"));
}

#[test]
fn test_find_exact_json_output() {
    let genomes = fish_and_salmon();

    let output = cmd()
        .args(["--format", "json", "find", "ctc", "-L", "3", "--exact-only", "--genomes"])
        .arg(genomes.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["fragment"], "CTC");
    assert_eq!(json["exact_match_only"], true);
    let matches = json["matches"].as_array().expect("matches array");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["genome_name"], "salmon");
    assert_eq!(matches[0]["position"], 2);
    assert_eq!(matches[0]["length"], 3);
}

#[test]
fn test_find_min_length_below_search_length_fails() {
    let genomes = fish_and_salmon();

    cmd()
        .args(["find", "CTCA", "-L", "4", "--min-length", "3", "--genomes"])
        .arg(genomes.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the index search length"));
}

#[test]
fn test_find_rejects_invalid_fragment() {
    let genomes = fish_and_salmon();

    cmd()
        .args(["find", "CTXC", "-L", "3", "--genomes"])
        .arg(genomes.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base 'X'"));
}

#[test]
fn test_find_no_match_succeeds() {
    let genomes = fish_and_salmon();

    cmd()
        .args(["find", "AAAAAA", "-L", "3", "--exact-only", "--genomes"])
        .arg(genomes.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No genomes contain AAAAAA"));
}

#[test]
fn test_related_tsv_ranking() {
    let genomes = genome_file(">1\nATGATCG\n>2\nTCGACTCGG\n>3\nTCTCGTTA\n");
    let query = genome_file(">query\nACTTATTCG\n");

    cmd()
        .args(["--format", "tsv", "related"])
        .arg(query.path())
        .args([
            "-L",
            "2",
            "--fragment-length",
            "3",
            "--exact-only",
            "--threshold",
            "0.1",
            "--genomes",
        ])
        .arg(genomes.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "query\trank\tgenome\tpercent_match\tlevel\n\
             query\t1\t2\t66.6667\tMEDIUM\n\
             query\t2\t1\t33.3333\tLOW\n\
             query\t3\t3\t33.3333\tLOW\n",
        ));
}

#[test]
fn test_related_rejects_bad_threshold() {
    let genomes = fish_and_salmon();
    let query = genome_file(">query\nACTTATTCG\n");

    cmd()
        .arg("related")
        .arg(query.path())
        .args(["--threshold", "150", "--genomes"])
        .arg(genomes.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--threshold must be between 0 and 100"));
}

#[test]
fn test_list_json() {
    let genomes = fish_and_salmon();

    let output = cmd()
        .args(["-f", "json", "list", "-L", "3", "--genomes"])
        .arg(genomes.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["search_length"], 3);
    assert_eq!(json["total_windows"], 23);
    assert_eq!(json["genomes"][1]["name"], "salmon");
    assert_eq!(json["genomes"][1]["length"], 12);
    assert_eq!(json["genomes"][1]["windows"], 10);
}

#[test]
fn test_malformed_genome_file_fails() {
    let genomes = genome_file(">fish\nCTGA\n\nGAGT\n");

    cmd()
        .args(["list", "--genomes"])
        .arg(genomes.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank lines are not allowed"));
}
