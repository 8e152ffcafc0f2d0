pub mod error;
pub mod ipv4;
pub mod pool;

pub use error::FilterError;
pub use ipv4::Address;
pub use pool::Pool;

/// Splits `text` on every occurrence of `delim`.
///
/// Adjacent delimiters are not merged, so the result always has one more
/// element than there are delimiters in `text`.
pub fn split(text: &str, delim: char) -> Vec<&str> {
    text.split(delim).collect()
}
