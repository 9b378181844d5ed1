//! Month grid CLI application.
//!
//! # Usage
//! ```ignore
//! calgrid            // Current month
//! calgrid 2 2024     // February 2024
//! calgrid -f day     // Day numbers only
//! calgrid -n 1 -H    // Next month, with header
//! ```

use calgrid::args::{Args, build_grid};
use calgrid::error::GridError;
use calgrid::formatter::print_grid;
use calgrid::logging;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("calgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GridError> {
    let grid = build_grid(args)?;
    print_grid(&grid, args.header);
    Ok(())
}
