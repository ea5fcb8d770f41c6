//! Test environment builder for isolated CLI runs.
//!
//! Provides `TestEnv` - a project directory with a `vocabularies/` folder and
//! a separate HOME, so user-level config never leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every run
const LINKS_ENV_VARS: &[&str] = &[
    "TAXONOMY_LINKS_VOCABULARY",
    "TAXONOMY_LINKS_PARENT",
    "TAXONOMY_LINKS_MAX_DEPTH",
    "TAXONOMY_LINKS_FORMAT",
    "TAXONOMY_LINKS_VOCABULARIES",
    "RUST_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project and home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Path relative to the project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for key in LINKS_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute taxonomy-links");
        output_to_result(output)
    }

    /// Read a file written by the CLI
    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    vocabularies: Vec<(String, String)>,
    project_config: Option<String>,
    home_config: Option<String>,
}

impl TestEnvBuilder {
    /// Add a file to `<project>/vocabularies/`
    pub fn with_vocabulary(mut self, file_name: &str, content: &str) -> Self {
        self.vocabularies
            .push((file_name.to_string(), content.to_string()));
        self
    }

    /// Write `<project>/taxonomy-links.toml`
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Write `<home>/.config/taxonomy-links/config.toml`
    pub fn with_home_config(mut self, toml: &str) -> Self {
        self.home_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");

        let vocab_dir = project_root.path().join("vocabularies");
        std::fs::create_dir_all(&vocab_dir).expect("Failed to create vocabularies dir");
        for (name, content) in &self.vocabularies {
            std::fs::write(vocab_dir.join(name), content).expect("Failed to write vocabulary");
        }

        if let Some(toml) = &self.project_config {
            std::fs::write(project_root.path().join("taxonomy-links.toml"), toml)
                .expect("Failed to write project config");
        }

        if let Some(toml) = &self.home_config {
            let dir = home_dir.path().join(".config").join("taxonomy-links");
            std::fs::create_dir_all(&dir).expect("Failed to create home config dir");
            std::fs::write(dir.join("config.toml"), toml).expect("Failed to write home config");
        }

        TestEnv {
            project_root,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_taxonomy-links")),
        }
    }
}
