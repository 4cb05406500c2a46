use ridge_base::{PalHandle, ResultExt, RidgeResult};
use tracing::{debug, instrument};

use crate::message::get_message;
use crate::printer::print_message_with;

/// Label written in front of the retrieved message.
pub const RETRIEVED_LABEL: &str = "Retrieved message: ";

/// Runs the example consumer: prints the greeting, then retrieves it and prints it
/// again behind [`RETRIEVED_LABEL`].
#[instrument(skip(pal))]
pub fn run_example(pal: &PalHandle) -> RidgeResult<()> {
    print_message_with(pal)?;

    let message = get_message();
    debug!(greeting = message, "retrieved message");
    pal.write_stdout_line(&format!("{}{}", RETRIEVED_LABEL, message))
        .context("printing retrieved message")?;
    pal.flush_stdout().context("printing retrieved message")
}
