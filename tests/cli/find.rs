use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

fn parse(output: &str) -> Result<Value> {
    Ok(serde_json::from_str(output)?)
}

#[test]
fn test_find_by_name() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["find", "mickey"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let component = parse(&stdout(&output))?;
    assert_eq!(component["name"], json!("mickey"));
    assert_eq!(
        component["config"],
        json!({ "disney": true, "type": "mouse", "name": "mickey" })
    );
    assert_eq!(
        component["src"]["path"],
        json!(format!("{}/components/mice/mickey.hbs", test.root().display()))
    );

    Ok(())
}

#[test]
fn test_find_duplicate_name_returns_first() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["find", "jerry"])?;
    assert!(output.status.success());
    assert_eq!(parse(&stdout(&output))?["config"]["type"], json!("dog"));

    Ok(())
}

#[test]
fn test_find_where_fields() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["find", "--where", "type=mouse", "--where", "disney=false"])?;
    assert!(output.status.success());
    assert_eq!(parse(&stdout(&output))?["name"], json!("jerry"));

    let output = test.run(&["find", "jerry", "--where", "type=mouse"])?;
    assert!(output.status.success());
    assert_eq!(
        parse(&stdout(&output))?["src"]["cwd"],
        json!(format!("{}/components", test.root().display()))
    );
    assert_eq!(parse(&stdout(&output))?["config"]["type"], json!("mouse"));

    Ok(())
}

#[test]
fn test_find_requires_all_fields() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["find", "mickey", "--where", "disney=false"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\u{2718} No component matches name=\"mickey\", disney=false\n"
    );

    Ok(())
}

#[test]
fn test_find_missing_component() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["find", "goofy"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\u{2718} No component matches name \"goofy\"\n"
    );

    Ok(())
}

#[test]
fn test_find_without_query() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["find"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Provide a component name"));

    Ok(())
}

#[test]
fn test_find_invalid_where() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["find", "--where", "disney"])?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected KEY=VALUE"));

    Ok(())
}
