use std::{
    fs,
    io,
    iter,
    path::{
        Path,
        PathBuf,
    },
    process,
};

use crate::{
    error::{
        Error,
        PersistenceError,
        ValidationError,
    },
    parameter::{
        Parameter,
        ParameterCreator,
        traits::Shape,
    },
    structure::SimpleStructure,
    task::{
        traits::Launcher,
        *,
    },
};

fn write(path: PathBuf, contents: impl AsRef<[u8]>) -> Result<(), PersistenceError> {
    fs::write(&path, contents)
        .map_err(|source| PersistenceError::Write { path, source })
}

fn create_dir(path: PathBuf) -> Result<(), PersistenceError> {
    fs::create_dir_all(&path)
        .map_err(|source| PersistenceError::Write { path, source })
}

impl SimpleTask {
    pub fn new(root: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            command: command.into(),
            parameters: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Appends a parameter; duplicates and repeated keys are kept as is.
    pub fn add_param(&mut self, parameter: impl Into<Parameter>) -> &mut Self {
        self.parameters.push(parameter.into());
        self
    }

    pub fn structure(&self) -> SimpleStructure {
        SimpleStructure::new(&self.root)
    }

    /// The command followed by every parameter's tokens, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        iter::once(self.command.as_str())
            .chain(self.parameters.iter().flat_map(Shape::tokens))
    }

    pub fn command_line(&self) -> Vec<String> {
        self.tokens()
            .map(str::to_string)
            .collect()
    }

    /// Writes the task to `task.json` under the root, creating the root
    /// if needed, and returns the path written.
    pub fn save(&self) -> Result<PathBuf, PersistenceError> {
        let path = self.structure().task_file();
        create_dir(self.root.clone())?;
        let contents = serde_json::to_string_pretty(&TaskFile::from(self))
            .map_err(|source| PersistenceError::Encode {
                path: path.clone(),
                source,
            })?;
        write(path.clone(), contents)?;
        log::debug!("saved task to {path:?}");
        Ok(path)
    }

    /// Reads a task from the file at `path`; the directory containing that
    /// file becomes the root of the task.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let root = match path.parent() {
            Some(root) if root.as_os_str().is_empty() => Path::new("."),
            Some(root) => root,
            None => return Err(PersistenceError::NoRoot(path.to_path_buf()).into()),
        };
        let contents = fs::read_to_string(path)
            .map_err(|source| PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let task_file: TaskFile = serde_json::from_str(&contents)
            .map_err(|source| PersistenceError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        if task_file.root != root {
            log::debug!(
                "task file {path:?} records root {:?}, using {root:?}",
                task_file.root,
            );
        }
        Ok(Self::from_task_file(root, task_file)?)
    }

    /// Reads the `task.json` under `root`.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, Error> {
        Self::load_file(SimpleStructure::new(root.as_ref()).task_file())
    }

    pub fn from_task_file(
        root: impl Into<PathBuf>,
        task_file: TaskFile,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            root: root.into(),
            command: task_file.command,
            parameters: task_file.parameters
                .iter()
                .map(ParameterCreator::create)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Runs the task with the program found through the system.
    pub fn run(&self) -> Result<bool, Error> {
        self.run_with(&SystemLauncher)
    }

    /// Runs the command line inside the root and records its output to
    /// `stdout.txt`, `stderr.txt` and `status.txt`, replacing any from a
    /// previous run.  Returns whether the program exited with zero; a
    /// non-zero exit is not an error.
    pub fn run_with<L: Launcher + ?Sized>(&self, launcher: &L) -> Result<bool, Error> {
        let structure = self.prepare()?;
        let command_line = self.command_line();
        log::info!("running in {:?}: {}", self.root, self);
        let captured = launcher.launch(&command_line, &self.root)
            .map_err(|source| Error::Launch {
                program: self.command.clone(),
                source,
            })?;
        Ok(self.record(&structure, captured)?)
    }

    // Data and Output are created ahead of every run so the tool may
    // write into them.
    fn prepare(&self) -> Result<SimpleStructure, PersistenceError> {
        let structure = self.structure();
        create_dir(structure.data_dir())?;
        create_dir(structure.output_dir())?;
        Ok(structure)
    }

    fn record(
        &self,
        structure: &SimpleStructure,
        captured: Captured,
    ) -> Result<bool, PersistenceError> {
        write(structure.stdout(), &captured.stdout)?;
        write(structure.stderr(), &captured.stderr)?;
        write(structure.status(), captured.code.to_string())?;
        if captured.success() {
            log::debug!("{} in {:?} exited successfully", self.command, self.root);
        } else {
            log::warn!(
                "{} in {:?} exited with status {}",
                self.command,
                self.root,
                captured.code,
            );
        }
        Ok(captured.success())
    }
}

impl From<&SimpleTask> for TaskFile {
    fn from(task: &SimpleTask) -> Self {
        Self {
            root: task.root.clone(),
            command: task.command.clone(),
            parameters: task.parameters
                .iter()
                .map(Shape::to_record)
                .collect(),
        }
    }
}

// Shared by the task conversion and by `SystemLauncher`.
fn command<'a>(
    program: &str,
    args: impl IntoIterator<Item = &'a str>,
    cwd: &Path,
) -> process::Command {
    let mut cmd = process::Command::new(program);
    cmd.args(args)
        .current_dir(cwd);
    cmd
}

impl From<&SimpleTask> for process::Command {
    fn from(task: &SimpleTask) -> Self {
        command(
            &task.command,
            task.parameters.iter().flat_map(Shape::tokens),
            &task.root,
        )
    }
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

impl From<process::Output> for Captured {
    fn from(output: process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

impl Launcher for SystemLauncher {
    fn launch(
        &self,
        command_line: &[String],
        cwd: &Path,
    ) -> io::Result<Captured> {
        let (program, args) = command_line.split_first()
            .ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty command line",
            ))?;
        let output = command(program, args.iter().map(String::as_str), cwd)
            .output()?;
        Ok(output.into())
    }
}


#[cfg(feature = "tokio")]
mod tokio_impls {
    use tokio::process::Command;
    use super::*;

    impl From<&SimpleTask> for Command {
        fn from(task: &SimpleTask) -> Self {
            let mut cmd = Command::new(&task.command);
            cmd.args(task.parameters.iter().flat_map(Shape::tokens))
                .current_dir(&task.root);
            cmd
        }
    }

    impl SimpleTask {
        /// Same as `run`, awaiting the process instead of blocking on it.
        pub async fn run_async(&self) -> Result<bool, Error> {
            let structure = self.prepare()?;
            log::info!("running in {:?}: {}", self.root, self);
            let output = Command::from(self)
                .output()
                .await
                .map_err(|source| Error::Launch {
                    program: self.command.clone(),
                    source,
                })?;
            Ok(self.record(&structure, output.into())?)
        }
    }

}
