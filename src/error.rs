use thiserror::Error;

/// Maximum number of leading octets a prefix filter may match on.
pub const MAX_PREFIX: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Prefix has {0} octets, an IPv4 address has only {}.", MAX_PREFIX)]
    TooManyOctets(usize),
    #[error("Octet index {index} is out of range for an address of {len} octets.")]
    OutOfBounds { index: usize, len: usize },
}
