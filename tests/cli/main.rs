use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod find;
mod init;
mod json;
mod list;

const BIN_NAME: &str = "corral";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with six characters under `components/`.
    ///
    /// Walk order is `dogs/jerry`, `dogs/odie`, `dogs/pluto`, `mice/jerry`,
    /// `mice/mickey`, `mice/mighty`.
    pub fn with_characters() -> Result<Self> {
        let test = Self::new()?;
        for (path, config) in [
            ("mice/mickey", r#"{ "disney": true, "type": "mouse" }"#),
            ("mice/jerry", r#"{ "disney": false, "type": "mouse" }"#),
            ("mice/mighty", r#"{ "disney": false, "type": "mouse" }"#),
            ("dogs/pluto", r#"{ "disney": true, "type": "dog" }"#),
            ("dogs/odie", r#"{ "disney": false, "type": "dog" }"#),
            ("dogs/jerry", r#"{ "disney": false, "type": "dog" }"#),
        ] {
            test.write_file(&format!("components/{}.hbs", path), "<div></div>")?;
            test.write_file(&format!("components/{}.config.json", path), config)?;
        }
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        let output = self.command().args(args).output()?;
        Ok(output)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
