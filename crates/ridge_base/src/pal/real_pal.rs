use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::{RidgeError, RidgeResult};

use super::traits::Pal;

/* 📖 # Why lock stdout for every call?

`Stdout::lock` gives exclusive access for the duration of one write, so a line handed to
`write_stdout` in one call is never interleaved with output from other threads.
*/

/// Concrete PAL implementation writing to the process's standard output.
#[derive(Debug, Default)]
pub struct RealPal;

impl RealPal {
    pub fn new() -> Self {
        Self
    }
}

fn output_error(source: io::Error) -> Box<RidgeError> {
    debug!(error = %source, "standard output failed");
    Box::new(source.into())
}

impl Pal for RealPal {
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    fn write_stdout(&self, bytes: &[u8]) -> RidgeResult<()> {
        io::stdout().lock().write_all(bytes).map_err(output_error)
    }

    #[instrument(skip(self))]
    fn flush_stdout(&self) -> RidgeResult<()> {
        io::stdout().lock().flush().map_err(output_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_write_empty_and_flush() {
        let pal = RealPal::new();
        pal.write_stdout(b"").unwrap();
        pal.flush_stdout().unwrap();
    }

    #[test]
    fn test_output_error_wraps_io_error() {
        let err = output_error(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err.kind(), ErrorKind::OutputError { .. }));
        assert_eq!(err.root_cause().to_string(), "closed");
    }
}
