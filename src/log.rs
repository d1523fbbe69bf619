//! Tagged diagnostic lines on stderr, optionally mirrored to a file.
//!
//! stdout stays reserved for terminal drawing and JSON observations.

use std::fs::{File, OpenOptions};
use std::io::Write;

use anyhow::{Context, Result};

const TAG: &str = "[blockfall]";

#[derive(Debug)]
pub struct Logger {
    file: Option<File>,
    /// Off while the terminal UI owns the screen
    stderr: bool,
}

impl Logger {
    /// Log to stderr and append to `path` when given.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("opening log file {path}"))?,
            ),
            None => None,
        };
        Ok(Self { file, stderr: true })
    }

    pub fn set_stderr(&mut self, enabled: bool) {
        self.stderr = enabled;
    }

    pub fn log(&mut self, msg: impl AsRef<str>) {
        let line = format!("{TAG} {}", msg.as_ref());
        if self.stderr {
            eprintln!("{line}");
        }
        if let Some(file) = self.file.as_mut() {
            // A broken log file must not take the game down.
            if writeln!(file, "{line}").is_err() {
                self.file = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn appends_tagged_lines_to_the_file() {
        let path = std::env::temp_dir().join(format!("blockfall-log-{}.log", std::process::id()));
        let _ = fs::remove_file(&path);
        let path_str = path.to_string_lossy().to_string();

        {
            let mut logger = Logger::open(Some(&path_str)).unwrap();
            logger.set_stderr(false);
            logger.log("first");
            logger.log(format!("score {}", 40));
        }
        {
            let mut logger = Logger::open(Some(&path_str)).unwrap();
            logger.set_stderr(false);
            logger.log("again");
        }

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[blockfall] first\n[blockfall] score 40\n[blockfall] again\n");
        let _ = fs::remove_file(&path);
    }
}
