#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

pub const ROSTER_HEADER: &str = "Player,Fortress,Command Post,Gate,Help,Mount,Placed Object,Guild Master,Officer,Member,Deaths,Siege Weapons";

/// Builds a war CSV from (player, 11 counters) rows.
pub fn roster_csv(rows: &[(&str, [i64; 11])]) -> String {
    let mut text = String::from(ROSTER_HEADER);
    text.push('\n');
    for (player, stats) in rows {
        text.push_str(player);
        for value in stats {
            text.push(',');
            text.push_str(&value.to_string());
        }
        text.push('\n');
    }
    text
}

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}
