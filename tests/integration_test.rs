//! Integration tests for the phone browser CLI.
//!
//! These tests run the actual binary with scripted menu input.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary against `data_file`, feed `input` on stdin and return stdout
fn run_browser(data_file: &str, input: &str) -> String {
    let mut cmd = Command::cargo_bin("phone-browser").unwrap();
    let assert = cmd.arg(data_file).write_stdin(input).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_list_all_phones() {
    let output = run_browser(&test_data_path("phones.csv"), "1\n8\n");

    assert!(output.contains("Brand          Model"));
    for model in ["iPhone 12", "Galaxy S10", "Pixel 5", "iPhone SE", "3310"] {
        assert!(output.contains(model), "missing {}", model);
    }
    assert!(output.contains("1199.99"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_exact_model_lookup() {
    let output = run_browser(
        &test_data_path("phones.csv"),
        "2\nPixel 5\n2\nPixel\n8\n",
    );

    assert!(output.contains("Phone found for index: 2"));
    assert!(output.contains("Phone not found"));
}

#[test]
fn test_brand_counts_are_sorted() {
    let output = run_browser(&test_data_path("phones.csv"), "3\n8\n");

    assert!(output.contains(
        "----Count of phones by brand----\nApple: 2\nGoogle: 1\nNokia: 1\nSamsung: 2\n"
    ));
}

#[test]
fn test_brand_filter() {
    let output = run_browser(
        &test_data_path("phones.csv"),
        "4\nSamsung\n4\nMotorola\n8\n",
    );

    assert!(output.contains("Phones of brand: Samsung"));
    assert!(output.contains("Galaxy S21 Ultra"));
    assert!(output.contains("No phones found for brand: Motorola"));
}

#[test]
fn test_release_year_statistics() {
    let output = run_browser(&test_data_path("phones.csv"), "5\n8\n");

    // (2020 + 2019 + 2020 + 2016 + 2021 + 2000) / 6 = 2016
    assert!(output.contains("Average release year: 2016"));
    let newest = output.find("Newest phone:").unwrap();
    let oldest = output.find("Oldest phone:").unwrap();
    assert!(output[newest..oldest].contains("Galaxy S21 Ultra"));
    assert!(output[oldest..].contains("3310"));
}

#[test]
fn test_partial_model_search() {
    let output = run_browser(&test_data_path("phones.csv"), "6\nGalaxy\n8\n");

    assert!(output.contains("Galaxy S10"));
    assert!(output.contains("Galaxy S21 Ultra"));
    let results = &output[output.find("Enter part of the model name").unwrap()..];
    assert!(!results.contains("iPhone"));
}

#[test]
fn test_price_descending_listing() {
    let output = run_browser(&test_data_path("phones.csv"), "7\n8\n");

    let table = &output[output.rfind("Brand          Model").unwrap()..];
    let models: Vec<&str> = table
        .lines()
        .skip(1)
        .filter(|l| l.len() > 50)
        .map(|l| l[15..50].trim_end())
        .collect();
    assert_eq!(
        models,
        vec![
            "Galaxy S21 Ultra",
            "iPhone 12",
            "Galaxy S10",
            "Pixel 5",
            "iPhone SE",
            "3310"
        ]
    );
}

#[test]
fn test_invalid_menu_choice() {
    let output = run_browser(&test_data_path("phones.csv"), "abc\n99\n8\n");
    assert_eq!(output.matches("Invalid choice, please try again.").count(), 2);
}

#[test]
fn test_missing_file_starts_empty() {
    let mut cmd = Command::cargo_bin("phone-browser").unwrap();
    cmd.arg("nonexistent.csv")
        .write_stdin("1\n2\nanything\n5\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error opening file"))
        .stdout(predicate::str::contains("Phone not found"))
        .stdout(predicate::str::contains("No data available"));
}

#[test]
fn test_malformed_lines_are_reported() {
    let output = run_browser(&test_data_path("malformed.csv"), "3\n8\n");

    assert!(output.contains("Skipped Invalid record at row 2"));
    assert!(output.contains("Skipped Invalid record at row 3"));
    assert!(output.contains("A: 1\nD: 1\n"));
}

#[test]
fn test_round_trip_brand_filter_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "A,X,2019,100.00,5.5").unwrap();
    writeln!(file, "B,Y,2020,200.00,6.1").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let output = run_browser(&path, "4\nA\n4\nC\n8\n");

    assert!(output.contains("Phones of brand: A"));
    assert!(output.contains("100.00"));
    assert!(output.contains("No phones found for brand: C"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let output = run_browser(&test_data_path("phones.csv"), "");
    assert!(output.ends_with("Goodbye!\n"));
}
