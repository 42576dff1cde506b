use serde_json::json;
use simplecore::{
    error::{
        Error,
        PersistenceError,
        ValidationError,
    },
    parameter::{
        Argument,
        MultiArguments,
        MultiOptions,
        Opt,
        ParameterCreator,
    },
    task::SimpleTask,
};
use std::fs;
use tempfile::TempDir;
use test_binary::build_test_binary_once;

#[cfg(unix)]
#[test]
fn test_create_simple_task() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    let root = tempdir.path();
    let mut task = SimpleTask::new(root, "ls");
    task.add_param(Opt::new("-l"));

    assert!(!root.join("task.json").exists());
    let file = task.save()?;
    assert!(root.join("task.json").exists());

    let new_task = SimpleTask::load_file(&file)?;
    assert_eq!(task.root(), new_task.root());
    assert_eq!(task.command(), new_task.command());
    assert_eq!(task.parameters(), new_task.parameters());

    assert!(!root.join("status.txt").exists());
    assert!(task.run()?);
    assert!(root.join("status.txt").exists());
    assert_eq!(fs::read_to_string(root.join("status.txt"))?, "0");
    // the listing of the root includes what the run set up.
    let listing = fs::read_to_string(root.join("stdout.txt"))?;
    assert!(listing.contains("task.json"));
    assert!(listing.contains("Data"));
    assert!(listing.contains("Output"));
    Ok(())
}

#[test]
fn test_run_passes_command_line_in_order() -> anyhow::Result<()> {
    build_test_binary_once!(echoargs, "../testing");
    let echoargs = path_to_echoargs().into_string().expect("a valid string");
    let tempdir = TempDir::new()?;
    let root = tempdir.path();
    let mut task = SimpleTask::new(root, echoargs);
    task.add_param(Argument::new("-m", "90"))
        .add_param(MultiArguments::new("-i", ["foo.txt", "bar baz.txt"]))
        .add_param(Opt::new("--fast"))
        .add_param(MultiOptions::new(["one", "two"]))
        .add_param(ParameterCreator::create(&json!({"key": "-m", "value": "80"}))?);

    assert!(task.run()?);
    let structure = task.structure();
    assert_eq!(
        fs::read_to_string(structure.stdout())?,
        "-m\n90\n-i\nfoo.txt\n-i\nbar baz.txt\n--fast\none\ntwo\n-m\n80\n",
    );
    assert_eq!(
        fs::canonicalize(fs::read_to_string(structure.stderr())?)?,
        fs::canonicalize(root)?,
    );
    assert_eq!(fs::read_to_string(structure.status())?, "0");
    Ok(())
}

#[test]
fn test_run_reload_run() -> anyhow::Result<()> {
    build_test_binary_once!(echoargs, "../testing");
    let echoargs = path_to_echoargs().into_string().expect("a valid string");
    let tempdir = TempDir::new()?;
    let mut task = SimpleTask::new(tempdir.path(), echoargs);
    task.add_param(MultiOptions::new(["a", "b"]));
    let file = task.save()?;
    assert!(task.run()?);
    let first = fs::read_to_string(task.structure().stdout())?;

    let reloaded = SimpleTask::load_file(file)?;
    assert_eq!(reloaded, task);
    assert!(reloaded.run()?);
    assert_eq!(fs::read_to_string(reloaded.structure().stdout())?, first);
    Ok(())
}

#[test]
fn test_run_failing_tool() -> anyhow::Result<()> {
    build_test_binary_once!(exit_code, "../testing");
    let exit_code = path_to_exit_code().into_string().expect("a valid string");
    let tempdir = TempDir::new()?;
    let mut task = SimpleTask::new(tempdir.path(), exit_code);
    task.add_param(Opt::new("3"));

    assert!(!task.run()?);
    let structure = task.structure();
    assert_eq!(fs::read_to_string(structure.status())?, "3");
    assert_eq!(fs::read_to_string(structure.stderr())?, "exiting with 3");
    assert_eq!(fs::read_to_string(structure.stdout())?, "");

    // a fresh task under the same root replaces the previous artifacts
    let mut task = SimpleTask::new(task.root(), task.command());
    task.add_param(Opt::new("0"));
    assert!(task.run()?);
    assert_eq!(fs::read_to_string(structure.status())?, "0");
    assert_eq!(fs::read_to_string(structure.stderr())?, "exiting with 0");
    Ok(())
}

#[test]
fn test_failures() -> anyhow::Result<()> {
    let tempdir = TempDir::new()?;
    assert!(matches!(
        SimpleTask::load_file(tempdir.path().join("task.json")),
        Err(Error::Persistence(PersistenceError::Read { .. })),
    ));
    assert!(matches!(
        ParameterCreator::create(&json!({
            "key": "-m",
            "values": ["90", "80"],
            "value": "x",
        })),
        Err(ValidationError::UnknownShape(_)),
    ));
    Ok(())
}
