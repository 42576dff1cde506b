use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("1")
        .parse::<u8>()
        .unwrap_or(255);
    eprint!("exiting with {code}");
    ExitCode::from(code)
}
