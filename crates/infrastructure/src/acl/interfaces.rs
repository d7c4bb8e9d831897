use ipnetwork::IpNetwork;
use tracing::{debug, warn};

/// IPv4 networks bound to local interfaces, as `addr/prefix` strings.
///
/// Backs the `LOCAL` keyword. Interfaces are read once, at load time; later
/// address changes need a reload. IPv6 addresses are skipped.
pub fn local_ipv4_networks() -> Vec<String> {
    let interfaces = pnet_datalink::interfaces();
    if interfaces.is_empty() {
        warn!("No network interfaces found; LOCAL expands to nothing");
    }

    let mut nets = Vec::new();
    for interface in interfaces {
        for ip in &interface.ips {
            if let IpNetwork::V4(v4) = ip {
                nets.push(format!("{}/{}", v4.ip(), v4.prefix()));
            }
        }
        debug!(interface = %interface.name, "Collected local interface addresses");
    }
    nets
}
