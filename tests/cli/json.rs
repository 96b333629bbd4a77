use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_json_lists_every_component_in_order() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    let names: Vec<&str> = parsed
        .as_array()
        .expect("json output should be an array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, vec!["jerry", "odie", "pluto", "jerry", "mickey", "mighty"]);

    Ok(())
}

#[test]
fn test_json_item_shape() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["json", "--filter", "*/dogs/pluto.hbs"])?;
    assert!(output.status.success());

    let root = format!("{}/components", test.root().display());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        json!([{
            "name": "pluto",
            "src": { "path": format!("{}/dogs/pluto.hbs", root), "cwd": root },
            "config": { "disney": true, "type": "dog", "name": "pluto" }
        }])
    );

    Ok(())
}

#[test]
fn test_json_empty_result() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["json", "--reject", "*"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[]\n");

    Ok(())
}

#[test]
fn test_json_invalid_component_name_fails() -> Result<()> {
    let test = CliTest::with_characters()?;
    test.write_file("components/dogs/odie.config.json", r#"{ "name": ["odie"] }"#)?;

    let output = test.run(&["json"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("[properties-invalid]"));
    assert!(stdout(&output).is_empty());

    Ok(())
}
