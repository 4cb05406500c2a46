use ridge_base::{PalHandle, RealPal, ResultExt, RidgeResult};
use tracing::{debug, instrument};

use crate::message::get_message;

/// Prints the greeting, followed by a line terminator, to standard output.
///
/// ```
/// ridge::print_message().unwrap();
/// ```
pub fn print_message() -> RidgeResult<()> {
    print_message_with(&PalHandle::new(RealPal::new()))
}

/// Prints the greeting through the given PAL.
#[instrument(skip(pal))]
pub fn print_message_with(pal: &PalHandle) -> RidgeResult<()> {
    let message = get_message();
    debug!(greeting = message, "printing message");
    pal.write_stdout_line(message).context("printing message")?;
    pal.flush_stdout().context("printing message")
}
