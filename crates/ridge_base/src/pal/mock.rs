use std::io;
use std::sync::{Arc, Mutex};

use crate::RidgeResult;
use crate::error::{ErrorKind, RidgeError};

use super::traits::Pal;

/// In-memory PAL implementation for testing.
///
/// Everything written to standard output is appended to a shared buffer. Clones share
/// the buffer, so a test can hand one clone to the code under test and read the
/// output back from another.
///
/// # Examples
///
/// ```
/// use ridge_base::{MockPal, Pal};
///
/// let mock = MockPal::new();
/// mock.write_stdout_line("content").unwrap();
/// assert_eq!(mock.stdout(), "content\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPal {
    stdout: Arc<Mutex<Vec<u8>>>,
    fail_writes: bool,
}

impl MockPal {
    /// Create a new MockPal with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockPal whose writes and flushes fail with a broken pipe.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Captured standard output as text.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.stdout.lock().unwrap()).into_owned()
    }

    /// Captured standard output as raw bytes.
    pub fn stdout_bytes(&self) -> Vec<u8> {
        self.stdout.lock().unwrap().clone()
    }

    /// Discard captured output.
    pub fn clear(&self) {
        self.stdout.lock().unwrap().clear();
    }

    fn check_writable(&self) -> RidgeResult<()> {
        if self.fail_writes {
            let kind = ErrorKind::OutputError {
                source: io::Error::new(io::ErrorKind::BrokenPipe, "mock stdout is closed"),
            };
            return Err(Box::new(RidgeError::from(kind)));
        }
        Ok(())
    }
}

impl Pal for MockPal {
    fn write_stdout(&self, bytes: &[u8]) -> RidgeResult<()> {
        self.check_writable()?;
        self.stdout.lock().unwrap().extend_from_slice(bytes);
        Ok(())
    }

    fn flush_stdout(&self) -> RidgeResult<()> {
        self.check_writable()
    }
}
