#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloc-audit binary.
#[macro_export]
macro_rules! sloc_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloc-audit"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".sloc-audit.toml", content);
    }

    /// Creates a C++ file with the given number of code lines.
    pub fn create_cpp_file(&self, relative_path: &str, code_lines: usize) {
        let mut content = String::new();
        for i in 0..code_lines {
            let _ = writeln!(content, "int var_{i} = {i};");
        }
        self.create_file(relative_path, &content);
    }

    /// Creates a C++ file padded with line comments, a block comment and blank lines.
    pub fn create_cpp_file_with_comments(
        &self,
        relative_path: &str,
        code_lines: usize,
        comment_lines: usize,
        blank_lines: usize,
    ) {
        let mut content = String::new();
        for i in 0..comment_lines {
            let _ = writeln!(content, "// Comment line {i}");
        }
        content.push_str("/*\n * block\n */\n");
        for _ in 0..blank_lines {
            content.push('\n');
        }
        for i in 0..code_lines {
            let _ = writeln!(content, "int var_{i} = {i}; // trailing");
        }
        self.create_file(relative_path, &content);
    }

    /// Turns the fixture into a git repository with a committer identity.
    pub fn init_git(&self) {
        self.git(&["init"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test User"]);
        self.git(&["config", "commit.gpgsign", "false"]);
    }

    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-m", message]);
    }

    fn git(&self, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
    }
}

pub const STRICT_CONFIG: &str = r#"
[content]
max_lines = 20
"#;

pub const RUST_ONLY_CONFIG: &str = r#"
[scanner]
extensions = ["rs"]
exclude_dirs = []

[content]
max_lines = 20
"#;
