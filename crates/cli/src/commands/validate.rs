use crate::di::AclServices;
use dnsacl_application::ports::AclEnginePort;
use std::process::ExitCode;

/// Print what the loaded configuration compiled into.
pub fn run_validate(services: &AclServices) -> anyhow::Result<ExitCode> {
    let rule_sets = services.engine.snapshot();

    for (set_idx, set) in rule_sets.iter().enumerate() {
        let zones: Vec<&str> = set.zones().iter().map(|z| &**z).collect();
        println!("rule set {} zones={}", set_idx, zones.join(","));

        for (policy_idx, policy) in set.policies().iter().enumerate() {
            println!(
                "  {}/{} {} type {} backend={} networks={}",
                set_idx,
                policy_idx,
                policy.action(),
                policy.qtype(),
                policy.filter().backend(),
                policy.filter().len()
            );
        }
    }

    println!(
        "OK: {} rule sets, {} policies",
        services.engine.rule_set_count(),
        services.engine.policy_count()
    );
    Ok(ExitCode::SUCCESS)
}
