use lazy_static::lazy_static;
use regex::Regex;
use std::convert::Infallible;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::split;

/// Textual decimal octet. Anything else decodes to 0.
pub fn decode_octet(s: &str) -> u8 {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[0-9]+$").expect("Not possible");
    }
    if !RE.is_match(s) {
        tracing::debug!(octet = s, "non-numeric octet, using 0");
        return 0;
    }
    match s.parse::<u8>() {
        Ok(v) => v,
        Err(_) => {
            tracing::debug!(octet = s, "octet out of range, using 0");
            0
        }
    }
}

/// An IPv4 address as its octets, most significant first.
///
/// Addresses decoded from irregular input may carry more or fewer than four
/// octets. Ordering is lexicographic over the octets, and an address that is
/// a strict prefix of another one is the lesser of the two.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Address {
    octets: Vec<u8>,
}

impl Address {
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Address {
            octets: vec![a, b, c, d],
        }
    }

    /// Decodes already split octets, keeping however many were given.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Address {
            octets: tokens.into_iter().map(decode_octet).collect(),
        }
    }

    /// Decodes a dotted decimal string such as `"10.0.0.1"`.
    pub fn parse(s: &str) -> Self {
        Self::from_tokens(split(s, '.'))
    }

    /// Decodes the first `sep` separated field of an input record.
    pub fn from_record(line: &str, sep: &str) -> Self {
        let field = line.split(sep).next().unwrap_or("");
        Self::parse(field.trim())
    }

    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    pub fn len(&self) -> usize {
        self.octets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.octets.get(index).copied()
    }

    pub fn contains(&self, octet: u8) -> bool {
        self.octets.iter().any(|&o| o == octet)
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Address {
            octets: octets.to_vec(),
        }
    }
}

impl FromStr for Address {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Address::parse(s))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        for (i, o) in self.octets.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", o)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::net::Ipv4Addr;

    #[test]
    fn decode_tests() {
        assert_eq!(Address::new(1, 2, 3, 4), Address::parse("1.2.3.4"));
        assert_eq!(Some(0), Address::parse("abc.1.1.1").get(0));
        assert_eq!(Some(0), Address::parse("256.1.1.1").get(0));
        assert_eq!(Some(0), Address::parse("-1.1.1.1").get(0));
        assert_eq!(Some(0), Address::parse("12x.1.1.1").get(0));
        assert_eq!(Some(0), Address::parse(" 1.1.1.1").get(0));
        assert_eq!(Some(255), Address::parse("255.1.1.1").get(0));
        assert_eq!(Some(7), Address::parse("007.1.1.1").get(0));
        assert_eq!(Address::new(0, 0, 1, 1), "..1.1".parse::<Address>().unwrap());
    }

    #[test]
    fn irregular_lengths() {
        assert_eq!(1, Address::parse("").len());
        assert!(!Address::parse("").is_empty());
        assert!(Address::from_tokens(Vec::new()).is_empty());
        assert_eq!(2, Address::parse("10.20").len());
        assert_eq!(5, Address::from_tokens(vec!["1", "2", "3", "4", "5"]).len());
        assert_eq!(
            Address::from_tokens(vec!["1", "2"]).octets(),
            &[1u8, 2][..]
        );
    }

    #[test]
    fn record_tests() {
        assert_eq!(
            Address::new(113, 162, 145, 156),
            Address::from_record("113.162.145.156\t111\t0", "\t")
        );
        assert_eq!(
            Address::new(1, 1, 234, 8),
            Address::from_record("1.1.234.8", "\t")
        );
        assert_eq!(
            Address::new(1, 1, 234, 8),
            Address::from_record("1.1.234.8;5;6", ";")
        );
    }

    #[test]
    fn ordering_tests() {
        assert!(Address::new(222, 173, 235, 246) > Address::new(1, 1, 234, 8));
        assert!(Address::new(1, 2, 3, 4) < Address::new(1, 2, 3, 5));
        assert!(Address::new(1, 2, 3, 4) > Address::new(1, 2, 2, 255));
        assert!(Address::parse("1.2.3") < Address::parse("1.2.3.0"));
        assert!(Address::parse("1.2.4") > Address::parse("1.2.3.0"));
    }

    #[test]
    fn display_tests() {
        assert_eq!("1.1.234.8", Address::new(1, 1, 234, 8).to_string());
        assert_eq!("0.0.0.0", Address::parse("x.y.z.w").to_string());
        assert_eq!("10.20", Address::parse("10.20").to_string());
    }

    #[quickcheck]
    fn same_as_std(ip: u32) -> bool {
        let std_ip = Ipv4Addr::from(ip);
        let ip = Address::parse(&std_ip.to_string());
        ip.octets() == &std_ip.octets()[..] && ip.to_string() == std_ip.to_string()
    }

    #[quickcheck]
    fn order_as_u32(a: u32, b: u32) -> bool {
        let x = Address::from(Ipv4Addr::from(a).octets());
        let y = Address::from(Ipv4Addr::from(b).octets());
        x.cmp(&y) == a.cmp(&b)
    }
}
