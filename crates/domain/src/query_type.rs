use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Mnemonic → wire format number (RFC 1035 and successors).
///
/// These are the record types a policy may name. Anything else can still be
/// expressed with the generic `TYPEnnn` form (RFC 3597).
const QTYPE_CODES: &[(&str, u16)] = &[
    ("A", 1),
    ("NS", 2),
    ("CNAME", 5),
    ("SOA", 6),
    ("PTR", 12),
    ("MX", 15),
    ("TXT", 16),
    ("RP", 17),
    ("AFSDB", 18),
    ("SIG", 24),
    ("KEY", 25),
    ("AAAA", 28),
    ("LOC", 29),
    ("SRV", 33),
    ("NAPTR", 35),
    ("KX", 36),
    ("CERT", 37),
    ("DNAME", 39),
    ("DS", 43),
    ("SSHFP", 44),
    ("RRSIG", 46),
    ("NSEC", 47),
    ("DNSKEY", 48),
    ("DHCID", 49),
    ("NSEC3", 50),
    ("NSEC3PARAM", 51),
    ("TLSA", 52),
    ("SMIMEA", 53),
    ("HIP", 55),
    ("CDS", 59),
    ("CDNSKEY", 60),
    ("OPENPGPKEY", 61),
    ("SVCB", 64),
    ("HTTPS", 65),
    ("TKEY", 249),
    ("TSIG", 250),
    ("URI", 256),
    ("CAA", 257),
    ("TA", 32768),
    ("DLV", 32769),
];

/// Returns the wire code for a record type mnemonic (case-insensitive).
pub fn code_for_mnemonic(name: &str) -> Option<u16> {
    QTYPE_CODES
        .iter()
        .find(|(mnemonic, _)| mnemonic.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}

/// Returns the mnemonic for a wire code, if it is one of the known types.
pub fn mnemonic_for_code(code: u16) -> Option<&'static str> {
    QTYPE_CODES
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(mnemonic, _)| mnemonic)
}

/// Parse a concrete query type: a mnemonic, `TYPEnnn`, or a bare number.
///
/// `ANY` is rejected here; it is only meaningful on the policy side.
pub fn parse_query_code(raw: &str) -> Result<u16, DomainError> {
    let raw = raw.trim();
    if let Some(code) = code_for_mnemonic(raw) {
        return Ok(code);
    }
    let digits = match raw.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("TYPE") => &raw[4..],
        _ => raw,
    };
    digits
        .parse::<u16>()
        .map_err(|_| DomainError::InvalidQueryType(raw.to_string()))
}

/// The query type a policy accepts.
///
/// `Any` is its own variant rather than a reserved code, so it can never
/// collide with a real record type (not even the wire `ANY` = 255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QtypeMatch {
    Any,
    Exact(u16),
}

impl QtypeMatch {
    #[inline]
    pub fn matches(&self, qtype: u16) -> bool {
        match self {
            QtypeMatch::Any => true,
            QtypeMatch::Exact(code) => *code == qtype,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, QtypeMatch::Any)
    }
}

impl fmt::Display for QtypeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QtypeMatch::Any => write!(f, "ANY"),
            QtypeMatch::Exact(code) => match mnemonic_for_code(*code) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "TYPE{}", code),
            },
        }
    }
}

impl FromStr for QtypeMatch {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" || s.eq_ignore_ascii_case("ANY") {
            return Ok(QtypeMatch::Any);
        }
        parse_query_code(s).map(QtypeMatch::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_and_wildcard_parse_to_sentinel() {
        assert_eq!("ANY".parse::<QtypeMatch>().unwrap(), QtypeMatch::Any);
        assert_eq!("*".parse::<QtypeMatch>().unwrap(), QtypeMatch::Any);
        assert_eq!("any".parse::<QtypeMatch>().unwrap(), QtypeMatch::Any);
    }

    #[test]
    fn test_mnemonics_resolve_to_wire_codes() {
        assert_eq!("A".parse::<QtypeMatch>().unwrap(), QtypeMatch::Exact(1));
        assert_eq!("aaaa".parse::<QtypeMatch>().unwrap(), QtypeMatch::Exact(28));
        assert_eq!("DLV".parse::<QtypeMatch>().unwrap(), QtypeMatch::Exact(32769));
        assert_eq!("TYPE65".parse::<QtypeMatch>().unwrap(), QtypeMatch::Exact(65));
    }

    #[test]
    fn test_unknown_mnemonic_is_rejected() {
        let err = "BOGUS".parse::<QtypeMatch>().unwrap_err();
        assert_eq!(err, DomainError::InvalidQueryType("BOGUS".to_string()));
        assert!(parse_query_code("ANY").is_err());
    }

    #[test]
    fn test_any_matches_every_code() {
        for code in [1u16, 28, 255, 65535] {
            assert!(QtypeMatch::Any.matches(code));
        }
        assert!(QtypeMatch::Exact(1).matches(1));
        assert!(!QtypeMatch::Exact(1).matches(28));
    }

    #[test]
    fn test_display_round_trips_known_and_generic() {
        assert_eq!(QtypeMatch::Exact(28).to_string(), "AAAA");
        assert_eq!(QtypeMatch::Exact(999).to_string(), "TYPE999");
        assert_eq!(QtypeMatch::Any.to_string(), "ANY");
    }
}
