use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const STATEMENT_A: &str = "Date;Text;Amount
15.01.2020;SUPERMERCADO ))));-25,40
16.01.2020;NOMINA;1500,00
";

const STATEMENT_B: &str = "Date;Text;Amount
03.02.2020;GASOLINERA;-40,00
04.02.2020;DEVOLUCION;12,00
";

const EXPECTED_OUTPUT: &str = "month;text;initial;amount;date
FEB20\tGASOLINERA\tB\t40,00\t03/02/2020
ENE20\tSUPERMERCADO\tA\t25,40\t15/01/2020
";

fn write_statement(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write statement file");
    path
}

fn run_binary<P: AsRef<OsStr>>(args: &[P]) -> Output {
    // Get the path to the binary using the CARGO_BIN_EXE environment variable
    let bin_path = env!("CARGO_BIN_EXE_expense_report");
    Command::new(bin_path)
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn assert_fails_with(output: &Output, message: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "Binary should have failed");
    assert!(
        stderr.contains(&format!("Error: {}", message)),
        "Unexpected stderr: {}",
        stderr
    );
    assert!(output.stdout.is_empty(), "No report expected, got: {}", String::from_utf8_lossy(&output.stdout));
}

#[test]
fn test_merges_two_statements() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let a = write_statement(dir.path(), "A-ENE20.csv", STATEMENT_A);
    let b = write_statement(dir.path(), "B-FEB20.csv", STATEMENT_B);

    let output = run_binary(&[&a, &b]);

    assert!(output.status.success(),
        "Binary failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_OUTPUT);
}

#[test]
fn test_file_order_does_not_change_report() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let a = write_statement(dir.path(), "A-ENE20.csv", STATEMENT_A);
    let b = write_statement(dir.path(), "B-FEB20.csv", STATEMENT_B);

    let output = run_binary(&[&b, &a]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_OUTPUT);
}

#[test]
fn test_wrong_argument_count() {
    // None of these exist, so a filesystem check would report a different error.
    let missing = Path::new("X-ENE20.csv");

    for args in [vec![], vec![missing], vec![missing, missing, missing]] {
        let output = run_binary(&args);
        assert_fails_with(&output, "Expected only 2 arguments");
    }
}

#[test]
fn test_invalid_filename() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let a = write_statement(dir.path(), "A-ENE20.csv", STATEMENT_A);
    let bad = write_statement(dir.path(), "A-XYZ20.csv", STATEMENT_B);

    let output = run_binary(&[&a, &bad]);

    assert_fails_with(&output, "The format of");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let a = write_statement(dir.path(), "A-ENE20.csv", STATEMENT_A);
    let missing = dir.path().join("B-FEB20.csv");

    let output = run_binary(&[&a, &missing]);

    assert_fails_with(&output, &format!("File '{}' not found", missing.display()));
}

#[test]
fn test_malformed_csv() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let a = write_statement(dir.path(), "A-ENE20.csv", STATEMENT_A);
    let b = write_statement(dir.path(), "B-FEB20.csv", "Date;Text\n03.02.2020;GASOLINERA\n");

    let output = run_binary(&[&a, &b]);

    assert_fails_with(&output, "Failed to parse");
}
