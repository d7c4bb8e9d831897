use crate::di::AclServices;
use anyhow::{bail, Context};
use dnsacl_domain::{parse_query_code, strip_comment, AclQuery};
use std::process::ExitCode;
use tracing::info;

/// One line of a query batch: `source name type [questions]`.
#[derive(Debug, PartialEq, Eq)]
pub struct BatchQuery {
    pub source: String,
    pub name: String,
    pub qtype: u16,
    pub questions: usize,
}

pub fn parse_batch(text: &str) -> anyhow::Result<Vec<BatchQuery>> {
    let mut queries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = strip_comment(line);
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (source, name, qtype, questions) = match fields.as_slice() {
            [source, name, qtype] => (source, name, qtype, 1),
            [source, name, qtype, count] => {
                let count = count
                    .parse::<usize>()
                    .with_context(|| format!("line {}: bad question count '{}'", idx + 1, count))?;
                (source, name, qtype, count)
            }
            _ => bail!("line {}: expected 'source name type [questions]'", idx + 1),
        };
        let qtype = parse_query_code(qtype).with_context(|| format!("line {}", idx + 1))?;
        queries.push(BatchQuery {
            source: source.to_string(),
            name: name.to_string(),
            qtype,
            questions,
        });
    }
    Ok(queries)
}

/// Evaluate every query in `path` and print the resulting counters.
pub async fn run_stats(services: &AclServices, path: &str, json: bool) -> anyhow::Result<ExitCode> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read query batch '{}'", path))?;
    let batch = parse_batch(&text)?;

    for q in &batch {
        let query = AclQuery::new(&q.source, &q.name, q.qtype).with_question_count(q.questions);
        // Refusals are counted by the sink.
        let _ = services.evaluate.execute(&query);
    }

    let stats = services.stats.execute();
    info!(queries = batch.len(), blocked = stats.blocked, "Batch evaluated");

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("queries  {}", batch.len());
        println!("allowed  {}", stats.allowed);
        println!("blocked  {}", stats.blocked);
        println!("refused  {}", stats.refused);
        for (zone, count) in &stats.blocked_by_zone {
            println!("  {} {}", zone, count);
        }
    }
    Ok(ExitCode::SUCCESS)
}
