use std::sync::Arc;

use crate::RidgeResult;

/// Platform Abstraction Layer (PAL) trait providing the process I/O ridge needs.
///
/// Two implementations are provided:
/// - `RealPal`: writes to the process's standard output
/// - `MockPal`: in-memory capture for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Write all of `bytes` to standard output.
    fn write_stdout(&self, bytes: &[u8]) -> RidgeResult<()>;

    /// Flush standard output.
    fn flush_stdout(&self) -> RidgeResult<()>;

    /// Write `line` followed by a line terminator to standard output.
    ///
    /// Line and terminator are handed to `write_stdout` in one call, so a line is
    /// never split across writes.
    fn write_stdout_line(&self, line: &str) -> RidgeResult<()> {
        let mut buffer = Vec::with_capacity(line.len() + 1);
        buffer.extend_from_slice(line.as_bytes());
        buffer.push(b'\n');
        self.write_stdout(&buffer)
    }
}

/// Handle to a PAL implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn Pal>` for cheap cloning.
///
/// # Examples
///
/// ```
/// use ridge_base::{MockPal, Pal, PalHandle};
///
/// let mock = MockPal::new();
/// let pal = PalHandle::new(mock.clone());
/// pal.write_stdout_line("hi").unwrap();
/// assert_eq!(mock.stdout(), "hi\n");
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
