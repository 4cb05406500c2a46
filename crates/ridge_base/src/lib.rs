/* 📖 # Why have ridge_base as a separate crate?

ridge_base holds the pieces every other crate needs: the error type, tracing setup and the
platform abstraction layer. The library crate and the CLI both build on it without
depending on each other.
*/

pub mod error;
mod error_tests;
pub mod pal;
pub mod tracing;

pub use error::{ErrorKind, ResultExt, RidgeError, RidgeResult};
pub use pal::{MockPal, Pal, PalHandle, RealPal};
