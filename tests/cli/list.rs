use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_list_all_components() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["list"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "jerry   dogs/jerry.hbs\n\
         odie    dogs/odie.hbs\n\
         pluto   dogs/pluto.hbs\n\
         jerry   mice/jerry.hbs\n\
         mickey  mice/mickey.hbs\n\
         mighty  mice/mighty.hbs\n\
         \n\
         \u{2713} 6 components\n"
    );

    Ok(())
}

#[test]
fn test_list_filter_by_path() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["list", "--filter", "*/dogs/jerry.hbs"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "jerry  dogs/jerry.hbs\n\n\u{2713} 1 of 6 components\n"
    );

    Ok(())
}

#[test]
fn test_list_reject_by_path() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["list", "--reject", "*/dogs/jerry.hbs"])?;
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("\u{2713} 5 of 6 components\n"));
    assert!(!stdout(&output).contains("dogs/jerry.hbs"));

    Ok(())
}

#[test]
fn test_list_filter_then_reject() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["list", "--filter", "*/mice/*", "--reject", "*/mighty.hbs"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "jerry   mice/jerry.hbs\n\
         mickey  mice/mickey.hbs\n\
         \n\
         \u{2713} 2 of 6 components\n"
    );

    Ok(())
}

#[test]
fn test_list_no_match() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["list", "--filter", "*/cats/*"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No components matched (6 discovered)\n");

    Ok(())
}

#[test]
fn test_list_invalid_glob() -> Result<()> {
    let test = CliTest::with_characters()?;

    let output = test.run(&["list", "--filter", "a/***"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("[pattern-invalid]"));

    Ok(())
}

#[test]
fn test_list_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["list"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Components root does not exist"));

    Ok(())
}

#[test]
fn test_list_root_override_and_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("patterns/button.njk", "<button></button>")?;
    test.write_file("patterns/_draft.njk", "<div></div>")?;
    test.write_file(".corralrc.json", r#"{ "ignores": ["_*"] }"#)?;

    let output = test.run(&["list", "--root", "patterns"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "button  button.njk\n\n\u{2713} 1 component\n"
    );

    Ok(())
}

#[test]
fn test_list_verbose_reports_bad_config() -> Result<()> {
    let test = CliTest::with_characters()?;
    test.write_file("components/dogs/odie.config.json", "{ oops")?;

    let output = test.run(&["list", "--verbose"])?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning:"));
    assert!(stderr(&output).contains("odie.config.json"));
    assert!(stdout(&output).contains("odie    dogs/odie.hbs"));

    Ok(())
}
