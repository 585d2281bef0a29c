mod cli;
mod logging;

fn main() {
    // Diagnostics go to a file; the TUI owns the terminal.
    let _guard = logging::init();

    if let Err(e) = cli::run() {
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
