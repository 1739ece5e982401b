use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn bin() -> Command {
    Command::cargo_bin("tree2dot").unwrap()
}

#[test]
fn cli_writes_dot_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    let output = dir.path().join("tree.dot");
    std::fs::write(&input, "root\n  child\n").unwrap();

    let assert = bin().arg(&input).arg(&output).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("tree.dot"), "got: {stdout}");

    let dot = std::fs::read_to_string(&output).unwrap();
    assert_eq!(dot, tree2dot::convert(&["root", "  child"]));
}

#[test]
fn cli_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    let output = dir.path().join("tree.dot");
    std::fs::write(&input, "only\n").unwrap();
    std::fs::write(&output, "stale contents that are much longer than the result").unwrap();

    bin().arg(&input).arg(&output).assert().success();

    let dot = std::fs::read_to_string(&output).unwrap();
    assert!(!dot.contains("stale"));
    assert!(dot.contains("n0 [label=\"only\"];"));
}

#[test]
fn cli_tab_width_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    let output = dir.path().join("tree.dot");
    std::fs::write(&input, "a\n  b\n\tc\n").unwrap();

    bin()
        .arg(&input)
        .arg(&output)
        .args(["--tab-width", "1"])
        .assert()
        .success();

    let dot = std::fs::read_to_string(&output).unwrap();
    assert!(dot.contains("n0 -> n2;"), "got: {dot}");
}

#[test]
fn cli_rejects_zero_tab_width() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    std::fs::write(&input, "a\n").unwrap();

    bin()
        .arg(&input)
        .arg(dir.path().join("out.dot"))
        .args(["--tab-width", "0"])
        .assert()
        .failure();
    assert!(!dir.path().join("out.dot").exists());
}

#[test]
fn cli_too_few_arguments_prints_usage_and_exits_normally() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    std::fs::write(&input, "a\n").unwrap();

    let assert = bin()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage"), "got: {stderr}");
    assert!(assert.get_output().stdout.is_empty());

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the input file should exist");
}

#[test]
fn cli_too_many_arguments_prints_usage_and_exits_normally() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    let output = dir.path().join("tree.dot");
    std::fs::write(&input, "a\n").unwrap();

    let assert = bin()
        .arg(&input)
        .arg(&output)
        .arg("extra")
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage"), "got: {stderr}");
    assert!(!output.exists());
}

#[test]
fn cli_no_arguments_prints_usage_and_exits_normally() {
    let assert = bin().assert().success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage"), "got: {stderr}");
}

#[test]
fn cli_converts_carriage_return_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    let output = dir.path().join("tree.dot");
    std::fs::write(&input, "a\r b\r").unwrap();

    bin().arg(&input).arg(&output).assert().success();

    let dot = std::fs::read_to_string(&output).unwrap();
    assert!(dot.contains("n1 [label=\"b\"];"), "got: {dot}");
    assert!(dot.contains("n0 -> n1;"), "got: {dot}");
}

#[test]
fn cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.dot");

    let assert = bin()
        .arg(dir.path().join("nope.txt"))
        .arg(&output)
        .assert()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("ERROR: failed to read"), "got: {stderr}");
    assert!(!output.exists());
}
