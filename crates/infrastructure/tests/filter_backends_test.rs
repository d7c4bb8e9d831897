use dnsacl_infrastructure::acl::{AddressFilter, FilterBackend};
use std::net::Ipv4Addr;

const BACKENDS: [FilterBackend; 3] = [FilterBackend::Linear, FilterBackend::Trie, FilterBackend::Bloom];

fn filter_with(backend: FilterBackend, nets: &[(Ipv4Addr, u8)]) -> AddressFilter {
    let mut filter = AddressFilter::new(backend, nets.len());
    for (addr, prefix) in nets {
        filter.add(*addr, *prefix).unwrap();
    }
    filter
}

#[test]
fn test_cidr_containment_for_every_backend() {
    let nets = [
        (Ipv4Addr::new(10, 0, 0, 0), 8),
        (Ipv4Addr::new(192, 168, 1, 0), 24),
        (Ipv4Addr::new(8, 8, 8, 8), 32),
    ];

    for backend in BACKENDS {
        let filter = filter_with(backend, &nets);

        assert!(filter.contains(Ipv4Addr::new(10, 255, 0, 1)), "{}", backend);
        assert!(filter.contains(Ipv4Addr::new(192, 168, 1, 200)), "{}", backend);
        assert!(filter.contains(Ipv4Addr::new(8, 8, 8, 8)), "{}", backend);
    }
}

#[test]
fn test_exact_backends_have_no_false_positives() {
    let nets = [
        (Ipv4Addr::new(10, 0, 0, 0), 8),
        (Ipv4Addr::new(192, 168, 1, 0), 24),
        (Ipv4Addr::new(8, 8, 8, 8), 32),
    ];
    let outside = [
        Ipv4Addr::new(11, 0, 0, 0),
        Ipv4Addr::new(9, 255, 255, 255),
        Ipv4Addr::new(192, 168, 2, 1),
        Ipv4Addr::new(192, 167, 1, 1),
        Ipv4Addr::new(8, 8, 8, 9),
        Ipv4Addr::new(8, 8, 4, 4),
    ];

    for backend in [FilterBackend::Linear, FilterBackend::Trie] {
        let filter = filter_with(backend, &nets);
        for addr in outside {
            assert!(!filter.contains(addr), "{} contains {}", backend, addr);
        }
    }
}

#[test]
fn test_adding_twice_is_idempotent() {
    let probes = [
        Ipv4Addr::new(172, 16, 5, 5),
        Ipv4Addr::new(172, 32, 0, 1),
        Ipv4Addr::new(1, 1, 1, 1),
        Ipv4Addr::new(1, 1, 1, 2),
    ];

    for backend in BACKENDS {
        let once = filter_with(
            backend,
            &[(Ipv4Addr::new(172, 16, 0, 0), 12), (Ipv4Addr::new(1, 1, 1, 1), 32)],
        );
        let twice = filter_with(
            backend,
            &[
                (Ipv4Addr::new(172, 16, 0, 0), 12),
                (Ipv4Addr::new(1, 1, 1, 1), 32),
                (Ipv4Addr::new(172, 16, 0, 0), 12),
                (Ipv4Addr::new(1, 1, 1, 1), 32),
            ],
        );

        for addr in probes {
            assert_eq!(once.contains(addr), twice.contains(addr), "{} {}", backend, addr);
        }
    }
}

#[test]
fn test_zero_prefix_matches_everything() {
    for backend in BACKENDS {
        let filter = filter_with(backend, &[(Ipv4Addr::UNSPECIFIED, 0)]);

        assert!(filter.contains(Ipv4Addr::new(0, 0, 0, 0)), "{}", backend);
        assert!(filter.contains(Ipv4Addr::new(255, 255, 255, 255)), "{}", backend);
        assert!(filter.contains(Ipv4Addr::new(93, 184, 216, 34)), "{}", backend);
    }
}

#[test]
fn test_empty_filter_contains_nothing() {
    for backend in BACKENDS {
        let filter = AddressFilter::new(backend, 0);
        assert!(filter.is_empty());
        assert!(!filter.contains(Ipv4Addr::new(10, 0, 0, 1)), "{}", backend);
    }
}

#[test]
fn test_trie_stops_at_first_covering_prefix() {
    // Overlapping entries in one filter: the /8 already covers the /24, so
    // membership is "any covering prefix", not longest match.
    let filter = filter_with(
        FilterBackend::Trie,
        &[(Ipv4Addr::new(10, 0, 0, 0), 8), (Ipv4Addr::new(10, 1, 1, 0), 24)],
    );

    assert!(filter.contains(Ipv4Addr::new(10, 1, 1, 1)));
    assert!(filter.contains(Ipv4Addr::new(10, 2, 0, 0)));
}

#[test]
fn test_build_reports_backend() {
    let nets = ["10.0.0.0/8".parse().unwrap()];
    for backend in BACKENDS {
        let filter = AddressFilter::build(backend, &nets).unwrap();
        assert_eq!(filter.backend(), backend);
        assert_eq!(filter.len(), 1);
    }
}
