use std::sync::Arc;

/// Normalise a configured zone the way a server block key is normalised:
/// scheme and port are stripped, the name is lowercased and made fully
/// qualified.
///
/// `dns://Example.ORG:1053` → `example.org.`
pub fn normalize_zone(raw: &str) -> String {
    let mut host = raw.trim();

    if let Some(idx) = host.find("://") {
        host = &host[idx + 3..];
    }

    if let Some((name, port)) = host.rsplit_once(':') {
        if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
            host = name;
        }
    }

    normalize_name(host)
}

/// Lowercase a query name and make it fully qualified.
pub fn normalize_name(name: &str) -> String {
    let name = name.trim().trim_end_matches('.');
    if name.is_empty() {
        return ".".to_string();
    }
    let mut fqdn = name.to_ascii_lowercase();
    fqdn.push('.');
    fqdn
}

/// Returns true if `name` is `zone` or lies below it. Both must be normalised.
#[inline]
pub fn is_subdomain(zone: &str, name: &str) -> bool {
    if zone == "." {
        return true;
    }
    match name.strip_suffix(zone) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

/// An ordered set of normalised zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneList {
    zones: Vec<Arc<str>>,
}

impl ZoneList {
    /// Build from raw zone strings; duplicates after normalisation are dropped.
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut zones: Vec<Arc<str>> = Vec::with_capacity(raw.len());
        for zone in raw {
            let normalized = normalize_zone(zone.as_ref());
            if !zones.iter().any(|z| z.as_ref() == normalized) {
                zones.push(Arc::from(normalized));
            }
        }
        Self { zones }
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> {
        self.zones.iter()
    }

    /// Longest zone in the list that `name` falls under, if any.
    ///
    /// `name` must already be normalised (see [`normalize_name`]).
    pub fn longest_match(&self, name: &str) -> Option<&Arc<str>> {
        self.zones
            .iter()
            .filter(|zone| is_subdomain(zone, name))
            .max_by_key(|zone| zone.len())
    }
}
