use std::{
    io,
    path::Path,
};

use crate::task::Captured;

pub trait Launcher {
    /// Run `command_line` (program followed by its arguments) inside
    /// `cwd`, blocking until it exits.  An `Err` means the program never
    /// ran; a program that ran and failed is reported through the
    /// returned exit code.
    fn launch(
        &self,
        command_line: &[String],
        cwd: &Path,
    ) -> io::Result<Captured>;
}
