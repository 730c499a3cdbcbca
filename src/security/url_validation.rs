//! SSRF protection: classifies candidate links against loopback, private,
//! link-local and carrier-grade NAT hosts.
//!
//! The check is purely syntactic: hosts are never resolved, so a public name
//! pointing at a private address is not caught here.

use std::ops::RangeInclusive;
use url::Url;

/// Why a candidate link was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    Malformed,
    UnsupportedScheme,
    MissingHost,
    BlockedHostname,
    Ipv6Loopback,
    Unspecified,
    InvalidIpv4,
    Loopback,
    Private,
    LinkLocal,
    SharedAddressSpace,
}

/// Outcome of classifying one candidate link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlVerdict {
    Allowed,
    Rejected(RejectReason),
}

impl UrlVerdict {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    #[must_use]
    pub fn reason(self) -> Option<RejectReason> {
        match self {
            Self::Allowed => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Hosts refused by exact (lowercased) match.
const BLOCKED_HOSTS: &[(&str, RejectReason)] = &[
    ("localhost", RejectReason::BlockedHostname),
    ("localhost.localdomain", RejectReason::BlockedHostname),
    ("::1", RejectReason::Ipv6Loopback),
    ("0:0:0:0:0:0:0:1", RejectReason::Ipv6Loopback),
    ("0.0.0.0", RejectReason::Unspecified),
];

/// An IPv4 block expressed on its first two octets.
struct Ipv4Block {
    first: u8,
    second: RangeInclusive<u8>,
    reason: RejectReason,
}

impl Ipv4Block {
    fn contains(&self, [a, b, _, _]: [u8; 4]) -> bool {
        a == self.first && self.second.contains(&b)
    }
}

/// Checked in order; the first hit wins.
const BLOCKED_IPV4: &[Ipv4Block] = &[
    // 127.0.0.0/8
    Ipv4Block {
        first: 127,
        second: 0..=255,
        reason: RejectReason::Loopback,
    },
    // 10.0.0.0/8
    Ipv4Block {
        first: 10,
        second: 0..=255,
        reason: RejectReason::Private,
    },
    // 172.16.0.0/12
    Ipv4Block {
        first: 172,
        second: 16..=31,
        reason: RejectReason::Private,
    },
    // 192.168.0.0/16
    Ipv4Block {
        first: 192,
        second: 168..=168,
        reason: RejectReason::Private,
    },
    // 169.254.0.0/16, includes 169.254.169.254 cloud metadata
    Ipv4Block {
        first: 169,
        second: 254..=254,
        reason: RejectReason::LinkLocal,
    },
    // 100.64.0.0/10
    Ipv4Block {
        first: 100,
        second: 64..=127,
        reason: RejectReason::SharedAddressSpace,
    },
];

enum DottedQuad {
    Octets([u8; 4]),
    OutOfRange,
}

/// Parse `a.b.c.d` where every group is 1-3 ASCII digits. Returns `None` when
/// the host does not have that shape at all.
fn parse_dotted_quad(host: &str) -> Option<DottedQuad> {
    let mut groups = [0u16; 4];
    let mut count = 0;

    for part in host.split('.') {
        if count == groups.len()
            || part.is_empty()
            || part.len() > 3
            || !part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        groups[count] = part.parse().ok()?;
        count += 1;
    }

    if count != groups.len() {
        return None;
    }

    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(groups) {
        match u8::try_from(group) {
            Ok(value) => *octet = value,
            Err(_) => return Some(DottedQuad::OutOfRange),
        }
    }
    Some(DottedQuad::Octets(octets))
}

/// Check a bare or bracketed host against the blocklist.
///
/// Only the listed names and IPv4 ranges are refused; every other hostname and
/// IPv6 literal passes.
pub fn is_blocked_host(host: &str) -> Option<RejectReason> {
    let bare = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    let lower = bare.to_ascii_lowercase();

    if let Some((_, reason)) = BLOCKED_HOSTS.iter().find(|(name, _)| *name == lower) {
        return Some(*reason);
    }

    match parse_dotted_quad(&lower)? {
        DottedQuad::OutOfRange => Some(RejectReason::InvalidIpv4),
        DottedQuad::Octets(octets) => BLOCKED_IPV4
            .iter()
            .find(|block| block.contains(octets))
            .map(|block| block.reason),
    }
}

/// Decide whether a raw candidate is safe to hand to an outbound link pipeline.
///
/// Never fails: malformed input is a [`RejectReason::Malformed`] verdict.
pub fn classify_url(raw: &str) -> UrlVerdict {
    let verdict = classify_parsed(raw);
    if let UrlVerdict::Rejected(reason) = verdict {
        tracing::debug!(url = raw, %reason, "link rejected");
    }
    verdict
}

fn classify_parsed(raw: &str) -> UrlVerdict {
    let Ok(parsed) = Url::parse(raw) else {
        return UrlVerdict::Rejected(RejectReason::Malformed);
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return UrlVerdict::Rejected(RejectReason::UnsupportedScheme);
    }

    let Some(host) = parsed.host_str() else {
        return UrlVerdict::Rejected(RejectReason::MissingHost);
    };

    match is_blocked_host(host) {
        Some(reason) => UrlVerdict::Rejected(reason),
        None => UrlVerdict::Allowed,
    }
}

pub fn is_allowed_url(raw: &str) -> bool {
    classify_url(raw).is_allowed()
}
