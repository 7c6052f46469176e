// src/main.rs

use taskgate::{cli, exit_status, logging, run};

fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("taskgate: {err:?}");
    }

    let result = run(args);
    if let Err(err) = &result {
        eprintln!("taskgate error: {err}");
    }
    std::process::exit(exit_status(&result));
}
