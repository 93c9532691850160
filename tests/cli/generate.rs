use std::{collections::BTreeSet, fs};

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

/// Entries of a generated document, without quotes.
fn entries(document: &str) -> Vec<String> {
    document
        .lines()
        .skip(1)
        .take_while(|line| *line != "];")
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.trim_end_matches(',')
                .trim_matches('"')
                .to_string()
        })
        .collect()
}

#[test]
fn test_generate_with_defaults() -> Result<()> {
    let test = CliTest::with_file(
        "uscities.csv",
        "city,city_ascii,state_id\nSpringfield,Springfield,IL\nColumbus,Columbus,OH\nSpringfield,Springfield,MA\n",
    )?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "\u{2713} cities.js file has been created.\n"
    );
    assert_eq!(
        test.read_file("cities.js")?,
        "export const cities = [\n\"Columbus\",\n\"Springfield\"\n];"
    );

    Ok(())
}

#[test]
fn test_generate_distinct_values() -> Result<()> {
    let test = CliTest::with_file("uscities.csv", "city\nA\nA\nB\n")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let names = entries(&test.read_file("cities.js")?);
    assert_eq!(names.len(), 2);
    assert_eq!(
        names.into_iter().collect::<BTreeSet<_>>(),
        BTreeSet::from(["A".to_string(), "B".to_string()])
    );

    Ok(())
}

#[test]
fn test_generate_header_only() -> Result<()> {
    let test = CliTest::with_file("uscities.csv", "city,state_id\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("cities.js")?, "export const cities = [\n\n];");

    Ok(())
}

#[test]
fn test_generate_missing_column_fails() -> Result<()> {
    let test = CliTest::with_file("uscities.csv", "name,state_id\nBoston,MA\n")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Column \"city\" not found"));
    assert!(!test.root().join("cities.js").exists());

    Ok(())
}

#[test]
fn test_generate_missing_input_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to open input file: uscities.csv"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("uscities.csv", "city\nTopeka\nAmes\nTopeka\nFargo\n")?;

    test.command().output()?;
    let first = test.read_file("cities.js")?;
    test.command().output()?;
    let second = test.read_file("cities.js")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_generate_escapes_quotes() -> Result<()> {
    let test = CliTest::with_file("uscities.csv", "city\n\"Say \"\"Hi\"\"\"\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("cities.js")?,
        "export const cities = [\n\"Say \\\"Hi\\\"\"\n];"
    );

    Ok(())
}

#[test]
fn test_generate_with_flags() -> Result<()> {
    let test = CliTest::with_file(
        "data/places.csv",
        "name,city_ascii\nCañon City,Canon City\nAkron,Akron\n",
    )?;

    let output = test
        .command()
        .args([
            "--input",
            "data/places.csv",
            "--column",
            "city_ascii",
            "--output",
            "src/public/cities.js",
            "--export-name",
            "usCities",
        ])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/public/cities.js")?,
        "export const usCities = [\n\"Akron\",\n\"Canon City\"\n];"
    );

    Ok(())
}

#[test]
fn test_generate_with_config_file() -> Result<()> {
    let test = CliTest::with_file("data/us.csv", "city\nMiami\n")?;
    test.write_file(
        ".citylistrc.json",
        r#"{ "input": "data/us.csv", "output": "out/cities.js" }"#,
    )?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("out/cities.js")?,
        "export const cities = [\n\"Miami\"\n];"
    );

    Ok(())
}

#[test]
fn test_generate_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(".citylistrc.json", r#"{ "unknown": true }"#)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_generate_verbose() -> Result<()> {
    let test = CliTest::with_file("uscities.csv", "id,city\n1,Boston\n2,\n3,Boston\n4,Salem\n")?;

    let output = test.command().arg("--verbose").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("read 4 row(s) from uscities.csv"));
    assert!(stdout.contains("wrote 2 distinct value(s) of column \"city\" (1 duplicate(s) dropped)"));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning: 1 row(s) had an empty \"city\" value and were skipped"));

    Ok(())
}

#[test]
fn test_generate_invalid_utf8_fails() -> Result<()> {
    let test = CliTest::new()?;
    fs::write(test.root().join("uscities.csv"), b"city\n\xff\xfe\n")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Failed to parse CSV"));
    assert!(!test.root().join("cities.js").exists());

    Ok(())
}

#[test]
fn test_generate_short_row_skipped() -> Result<()> {
    let test = CliTest::with_file("uscities.csv", "state,city\nMA,Boston\nCO\nOH,Akron\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("cities.js")?,
        "export const cities = [\n\"Akron\",\n\"Boston\"\n];"
    );

    Ok(())
}
