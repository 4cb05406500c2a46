/// The greeting returned by [`get_message`].
pub const MESSAGE: &str = "Hello, World!";

/// Returns the classic hello world message.
#[inline]
pub const fn get_message() -> &'static str {
    MESSAGE
}
