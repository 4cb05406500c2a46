/* 📖 # How is ridge laid out?

- `message` provides the greeting
- `printer` writes the greeting to standard output
- `driver` is the example consumer that exercises both

Output goes through a `ridge_base::Pal`, so the printer and driver can be tested
against captured output.
*/

pub mod driver;
pub mod message;
pub mod printer;

pub use driver::{RETRIEVED_LABEL, run_example};
pub use message::{MESSAGE, get_message};
pub use printer::{print_message, print_message_with};
