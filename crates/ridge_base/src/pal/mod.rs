/* 📖 # What is the Platform Abstraction Layer?

The PAL is the trait through which ridge performs I/O. Library code writes to standard
output only through a `Pal`, never through `std::io::stdout` directly:
- `RealPal` writes to the process's standard output
- `MockPal` captures the bytes in memory so tests can assert on exact output
*/

pub mod mock;
pub mod real_pal;
mod traits;

pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle};
