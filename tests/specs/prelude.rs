//! Shared helpers for CLI specs
//!
//! Specs run the real binary in a temp directory and assert on stdout,
//! stderr, and exit codes. Dates are computed from the wall clock so the
//! suite passes on any day of the week.

use chrono::{Duration, Local, NaiveDate, Weekday};
use std::path::Path;

pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    pub fn rollcall(&self) -> Cmd {
        Cmd::new(self.dir.path())
    }

    /// Initialize the demo class for the week containing `date`
    pub fn init_demo(&self, date: NaiveDate) {
        self.rollcall()
            .args(&["init", "--demo", "--week-of", &ymd(date)])
            .passes();
    }
}

pub struct Cmd {
    cmd: assert_cmd::Command,
}

impl Cmd {
    fn new(dir: &Path) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("rollcall").unwrap();
        cmd.current_dir(dir);
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Checked {
        let output = self.cmd.output().unwrap();
        let checked = Checked::from(output);
        assert!(
            checked.success,
            "expected success, got failure\nstdout: {}\nstderr: {}",
            checked.stdout, checked.stderr
        );
        checked
    }

    pub fn fails(mut self) -> Checked {
        let output = self.cmd.output().unwrap();
        let checked = Checked::from(output);
        assert!(
            !checked.success,
            "expected failure, got success\nstdout: {}",
            checked.stdout
        );
        checked
    }
}

pub struct Checked {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Checked {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Checked {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout: {}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly contains {:?}\nstdout: {}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr: {}",
            needle,
            self.stderr
        );
        self
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}

pub fn tomorrow() -> NaiveDate {
    today() + Duration::days(1)
}

pub fn last_week() -> NaiveDate {
    today() - Duration::days(7)
}

pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

pub fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
