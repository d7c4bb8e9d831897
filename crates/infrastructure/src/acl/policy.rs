use super::filter::{AddressFilter, FilterBackend};
use dnsacl_domain::{
    parse_ipv4_network, AclQuery, DomainError, PolicyAction, QtypeMatch, ZoneList,
};
use std::net::IpAddr;
use std::sync::Arc;

/// One `ACTION type QTYPE net ...` clause. Owns its filter exclusively and is
/// never mutated after construction.
#[derive(Debug)]
pub struct PolicyRule {
    action: PolicyAction,
    qtype: QtypeMatch,
    filter: AddressFilter,
}

impl PolicyRule {
    pub fn new(action: PolicyAction, qtype: QtypeMatch, filter: AddressFilter) -> Self {
        Self {
            action,
            qtype,
            filter,
        }
    }

    /// Parse `networks` (CIDRs or bare addresses, keywords already expanded)
    /// and load them into a fresh filter of kind `backend`.
    pub fn build<S: AsRef<str>>(
        action: PolicyAction,
        qtype: QtypeMatch,
        backend: FilterBackend,
        networks: &[S],
    ) -> Result<Self, DomainError> {
        if networks.is_empty() {
            return Err(DomainError::EmptyNetworkList);
        }
        let parsed = networks
            .iter()
            .map(|raw| parse_ipv4_network(raw.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let filter = AddressFilter::build(backend, &parsed)?;
        Ok(Self::new(action, qtype, filter))
    }

    pub fn action(&self) -> PolicyAction {
        self.action
    }

    pub fn qtype(&self) -> QtypeMatch {
        self.qtype
    }

    pub fn filter(&self) -> &AddressFilter {
        &self.filter
    }

    /// Source inside the filter and query type accepted.
    #[inline]
    pub fn matches(&self, source: IpAddr, qtype: u16) -> bool {
        self.filter.contains_ip(source) && self.qtype.matches(qtype)
    }
}

/// A group of zones plus the ordered policies protecting them.
#[derive(Debug)]
pub struct ZoneRuleSet {
    zones: ZoneList,
    policies: Vec<PolicyRule>,
}

impl ZoneRuleSet {
    /// `zones` empty means "use the enclosing block's zones" (`inherited`).
    pub fn build<S: AsRef<str>, T: AsRef<str>>(
        zones: &[S],
        inherited: &[T],
        policies: Vec<PolicyRule>,
    ) -> Result<Self, DomainError> {
        let zones = if zones.is_empty() {
            ZoneList::new(inherited)
        } else {
            ZoneList::new(zones)
        };
        if zones.is_empty() {
            return Err(DomainError::NoZones);
        }
        Ok(Self { zones, policies })
    }

    pub fn zones(&self) -> &ZoneList {
        &self.zones
    }

    pub fn policies(&self) -> &[PolicyRule] {
        &self.policies
    }

    /// Most specific zone of this set covering `name` (normalised).
    #[inline]
    pub fn matching_zone(&self, name: &str) -> Option<&Arc<str>> {
        self.zones.longest_match(name)
    }

    /// Walk the policies in order and return the index of the one that
    /// blocks, or `None` if the query may proceed.
    ///
    /// - unparsable source → `InvalidSourceAddress`
    /// - anything but exactly one question → not blocked, no policy consulted
    /// - first policy whose filter contains the source and whose type
    ///   accepts the query decides; `allow` stops the walk without blocking
    pub fn should_block(&self, query: &AclQuery<'_>) -> Result<Option<usize>, DomainError> {
        let source: IpAddr = query
            .source
            .parse()
            .map_err(|_| DomainError::InvalidSourceAddress(query.source.to_string()))?;

        if query.question_count != 1 {
            return Ok(None);
        }

        for (idx, policy) in self.policies.iter().enumerate() {
            if !policy.matches(source, query.qtype) {
                continue;
            }
            return Ok(match policy.action {
                PolicyAction::Allow => None,
                PolicyAction::Block => Some(idx),
            });
        }

        Ok(None)
    }
}
