use std::env;

// Arguments one per line on stdout, working directory on stderr.
fn main() -> std::io::Result<()> {
    for arg in env::args().skip(1) {
        println!("{arg}");
    }
    eprint!("{}", env::current_dir()?.display());
    Ok(())
}
