//! Path computation over a task root and over a tool store.
//!
//! None of these types touch the filesystem; every path is recomputed
//! from the root on access.

use std::path::{
    Path,
    PathBuf,
};

pub const STDOUT: &str = "stdout.txt";
pub const STDERR: &str = "stderr.txt";
pub const STATUS: &str = "status.txt";
pub const TASK_FILE: &str = "task.json";
pub const DATA_DIR: &str = "Data";
pub const OUTPUT_DIR: &str = "Output";
pub const BIN_DIR: &str = "bin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleStructure {
    root: PathBuf,
}

impl SimpleStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A file directly under the root.
    pub fn at(&self, name: impl AsRef<Path>) -> PathBuf {
        self.root.join(name)
    }

    pub fn stdout(&self) -> PathBuf {
        self.at(STDOUT)
    }

    pub fn stderr(&self) -> PathBuf {
        self.at(STDERR)
    }

    pub fn status(&self) -> PathBuf {
        self.at(STATUS)
    }

    pub fn task_file(&self) -> PathBuf {
        self.at(TASK_FILE)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn data(&self, name: impl AsRef<Path>) -> PathBuf {
        self.data_dir().join(name)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn output(&self, name: impl AsRef<Path>) -> PathBuf {
        self.output_dir().join(name)
    }
}

/// A store of tool executables laid out as `<root>/bin/<name>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleCellar {
    root: PathBuf,
}

impl SimpleCellar {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    pub fn bin(&self, name: impl AsRef<Path>) -> PathBuf {
        self.bin_dir().join(name)
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;
    use tempfile::TempDir;
    use super::*;

    #[test]
    fn test_simple_structure() -> anyhow::Result<()> {
        let tempdir = TempDir::new()?;
        let root = tempdir.path();
        let ss = SimpleStructure::new(root);
        assert_eq!(ss.at("stdout.txt"), root.join("stdout.txt"));
        assert_eq!(ss.at("stderr.txt"), root.join("stderr.txt"));
        assert_eq!(ss.at("status.txt"), root.join("status.txt"));
        assert_eq!(ss.stdout(), root.join("stdout.txt"));
        assert_eq!(ss.stderr(), root.join("stderr.txt"));
        assert_eq!(ss.status(), root.join("status.txt"));
        assert_eq!(ss.task_file(), root.join("task.json"));
        assert_eq!(ss.data_dir(), root.join("Data"));
        assert_eq!(ss.data("expression.txt"), root.join("Data").join("expression.txt"));
        assert_eq!(ss.output_dir(), root.join("Output"));
        assert_eq!(ss.output("diff-genes.txt"), root.join("Output").join("diff-genes.txt"));
        // nothing gets created as a side effect.
        assert!(!ss.data_dir().exists());
        assert!(!ss.output_dir().exists());
        Ok(())
    }

    #[test]
    fn test_simple_structure_nonexistent_root() {
        let root = Path::new("/nonexistent/simples/root");
        let ss = SimpleStructure::new(root);
        assert_eq!(ss.root(), root);
        assert_eq!(ss.data("x"), Path::new("/nonexistent/simples/root/Data/x"));
        assert_eq!(ss.output("y"), Path::new("/nonexistent/simples/root/Output/y"));
    }

    #[test]
    fn test_simple_cellar() -> anyhow::Result<()> {
        let tempdir = TempDir::new()?;
        let root = tempdir.path();
        let sc = SimpleCellar::new(root);
        assert_eq!(sc.bin_dir(), root.join("bin"));
        assert_eq!(sc.bin("blastn"), root.join("bin").join("blastn"));
        assert!(!sc.bin_dir().exists());
        Ok(())
    }
}
