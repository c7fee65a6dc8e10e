use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;
use tempfile::TempDir;

/// A temporary project directory, optionally holding `.beads/issues.jsonl`.
pub struct ReaderWorkspace {
    _dir: TempDir,
    pub root: PathBuf,
}

impl ReaderWorkspace {
    /// Empty project without a `.beads/` directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = dir.path().to_path_buf();
        Self { _dir: dir, root }
    }

    /// Project whose issue log has exactly `contents`.
    pub fn with_log(contents: &str) -> Self {
        let workspace = Self::new();
        workspace.write_log(contents);
        workspace
    }

    /// Project whose issue log has one line per record.
    pub fn with_records(records: &[&str]) -> Self {
        let mut contents = records.join("\n");
        contents.push('\n');
        Self::with_log(&contents)
    }

    pub fn write_log(&self, contents: &str) {
        let beads_dir = self.root.join(".beads");
        fs::create_dir_all(&beads_dir).expect("create .beads");
        fs::write(beads_dir.join("issues.jsonl"), contents).expect("write issues.jsonl");
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `bdr` with `args` from inside `workspace`.
pub fn run_bdr<I, S>(workspace: &ReaderWorkspace, args: I) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::cargo_bin("bdr")
        .expect("bdr binary")
        .current_dir(&workspace.root)
        .args(args)
        .output()
        .expect("run bdr");
    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
