use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .corralrc.json\n");
    assert!(test.root().join(".corralrc.json").exists());

    let content = test.read_file(".corralrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["componentsRoot"], "./components");
    assert_eq!(parsed["configSuffix"], ".config.json");
    assert!(parsed["extensions"].is_array());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".corralrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".corralrc.json already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.run(&["init"])?;
    test.write_file("components/button.hbs", "<button></button>")?;

    let output = test.run(&["list"])?;
    assert!(
        output.status.success(),
        "List command should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).starts_with("button  button.hbs\n"));

    Ok(())
}
