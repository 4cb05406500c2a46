/* 📖 # What does ridge-example do?

It is the example consumer of the ridge library. It takes no arguments and reads no
files; it prints the greeting through the printer, then prints the retrieved message:

    Hello, World!
    Retrieved message: Hello, World!

Logging is controlled by `RUST_LOG` and goes to stderr.

Exit codes:
- 0: Success
- 1: Error (tracing could not be set up, or standard output could not be written)
*/

use std::process;

use ridge::run_example;
use ridge_base::tracing::init_tracing;
use ridge_base::{PalHandle, RealPal};
use tracing::debug;

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: Failed to initialize tracing: {}", e);
        process::exit(1);
    }

    let pal = PalHandle::new(RealPal::new());

    if let Err(e) = run_example(&pal) {
        eprintln!("Error: {}", e);
        debug!(error = ?e, "example failed");
        process::exit(1);
    }
}
