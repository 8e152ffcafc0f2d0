use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::io::{self, BufRead};
use std::iter::FromIterator;

use crate::error::{FilterError, MAX_PREFIX};
use crate::ipv4::Address;

/// An ordered collection of addresses. Duplicates are kept.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Pool {
    inner: Vec<Address>,
}

impl Pool {
    pub fn new() -> Self {
        Pool { inner: Vec::new() }
    }

    /// Reads one address per line, taking the first `sep` separated field.
    /// Blank lines are skipped. Bytes that are not valid UTF-8 are replaced,
    /// so only a failing reader is an error.
    pub fn read_from<R: BufRead>(reader: R, sep: &str) -> io::Result<Self> {
        let mut pool = Pool::new();
        for line in reader.split(b'\n') {
            let bytes = line?;
            let l = String::from_utf8_lossy(&bytes);
            if l.trim().is_empty() {
                continue;
            }
            pool.push(Address::from_record(&l, sep));
        }
        tracing::debug!(addresses = pool.len(), "pool loaded");
        Ok(pool)
    }

    pub fn push(&mut self, addr: Address) {
        self.inner.push(addr);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.inner.iter()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.inner
    }

    /// Sorts in place, greatest address first. Equal addresses may swap.
    pub fn sort(&mut self) {
        self.inner.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Keeps the addresses whose leading octets equal `prefix`, position by
    /// position. At most four octets may be given.
    ///
    /// Fails with [`FilterError::OutOfBounds`] if an address is too short to
    /// be compared against the whole prefix.
    pub fn filter_prefix(&self, prefix: &[u8]) -> Result<Pool, FilterError> {
        if prefix.len() > MAX_PREFIX {
            return Err(FilterError::TooManyOctets(prefix.len()));
        }
        let mut out = Pool::new();
        for addr in self.iter() {
            let mut keep = true;
            for (index, &want) in prefix.iter().enumerate() {
                let got = addr.get(index).ok_or(FilterError::OutOfBounds {
                    index,
                    len: addr.len(),
                })?;
                if got != want {
                    keep = false;
                    break;
                }
            }
            if keep {
                out.push(addr.clone());
            }
        }
        Ok(out)
    }

    /// Keeps the addresses holding `octet` at any position.
    pub fn filter_any(&self, octet: u8) -> Pool {
        self.iter().filter(|a| a.contains(octet)).cloned().collect()
    }
}

impl FromIterator<Address> for Pool {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        Pool {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pool {
    type Item = Address;
    type IntoIter = std::vec::IntoIter<Address>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl Display for Pool {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        for v in self {
            writeln!(f, "{}", v)?;
        }
        Ok(())
    }
}
