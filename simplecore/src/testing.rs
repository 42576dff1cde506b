use mockall::mock;
use std::{
    io,
    path::Path,
};

use crate::task::{
    Captured,
    traits::Launcher,
};

mock! {
    pub Launcher {}
    impl Launcher for Launcher {
        fn launch(
            &self,
            command_line: &[String],
            cwd: &Path,
        ) -> io::Result<Captured>;
    }
}

pub fn captured(code: i32, stdout: &str, stderr: &str) -> Captured {
    Captured {
        code,
        stdout: stdout.into(),
        stderr: stderr.into(),
    }
}
