use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::parameter::Parameter;

/// A command and its ordered parameters, scoped to a root directory that
/// holds the persisted definition and the artifacts of each run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleTask {
    root: PathBuf,
    command: String,
    parameters: Vec<Parameter>,
}

/// The on-disk form of a `SimpleTask`.
///
/// `root` is informational only; a loaded task takes its root from the
/// location the file was read from.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TaskFile {
    pub root: PathBuf,
    pub command: String,
    pub parameters: Vec<Value>,
}

/// What a finished process left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captured {
    /// Exit code, or `-1` if the process was ended without one.
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Launches programs through `std::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLauncher;

mod display;
mod impls;
pub mod traits;
