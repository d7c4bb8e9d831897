use super::refused;
use crate::di::AclServices;
use dnsacl_domain::{parse_query_code, AclQuery};
use std::process::ExitCode;

pub struct CheckArgs<'a> {
    pub source: &'a str,
    pub name: &'a str,
    pub qtype: &'a str,
    pub questions: usize,
}

/// Evaluate one query and print the decision.
pub fn run_check(services: &AclServices, args: &CheckArgs<'_>) -> anyhow::Result<ExitCode> {
    let qtype = parse_query_code(args.qtype)?;
    let query = AclQuery::new(args.source, args.name, qtype).with_question_count(args.questions);

    match services.evaluate.execute(&query) {
        Ok(decision) => {
            println!("{}", decision);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("REFUSED: {}", e);
            Ok(refused())
        }
    }
}
