use framedoc_classifier::{CategoryRule, RunReport};

pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();
    let verb = if report.written { "Wrote" } else { "Would write" };

    out.push_str(&format!(
        "Input: {} ({} blocks, {} records, {} excluded, {} incomplete)\n",
        report.input.display(),
        report.extract.blocks,
        report.extract.records,
        report.extract.excluded,
        report.extract.incomplete
    ));
    out.push_str(&format!(
        "Manual: {} | Auto: {} in {} groups | Unsorted: {}\n",
        report.manual_records, report.auto_records, report.auto_groups, report.unsorted_records
    ));
    out.push_str(&format!(
        "{verb} {} files to {}\n",
        report.artifacts.len(),
        report.output_dir.display()
    ));

    let width = report
        .artifacts
        .iter()
        .map(|a| a.file_name.len())
        .max()
        .unwrap_or(0);
    for artifact in &report.artifacts {
        out.push_str(&format!(
            "  {:<width$}  {:>5}\n",
            artifact.file_name, artifact.entries
        ));
    }
    out
}

pub fn render_rules(rules: &[CategoryRule]) -> String {
    let mut out = String::new();
    for (idx, rule) in rules.iter().enumerate() {
        out.push_str(&format!("{:>2}. {} - {}\n", idx + 1, rule.name, rule.description));
        out.push_str(&format!("    {}\n", rule.patterns.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use framedoc_classifier::{ArtifactSummary, ExtractStats};
    use std::path::PathBuf;

    #[test]
    fn report_lists_every_artifact() {
        let report = RunReport {
            input: PathBuf::from("dump.txt"),
            output_dir: PathBuf::from("out"),
            extract: ExtractStats {
                blocks: 3,
                excluded: 1,
                incomplete: 0,
                records: 2,
            },
            manual_records: 1,
            auto_records: 0,
            auto_groups: 0,
            unsorted_records: 1,
            written: false,
            artifacts: vec![
                ArtifactSummary {
                    file_name: "chat.yaml".to_string(),
                    category: "chat".to_string(),
                    entries: 1,
                    part: None,
                },
                ArtifactSummary {
                    file_name: "unsorted.yaml".to_string(),
                    category: "unsorted".to_string(),
                    entries: 1,
                    part: None,
                },
            ],
        };

        let text = render_report(&report);
        assert!(text.contains("Would write 2 files to out"));
        assert!(text.contains("  chat.yaml          1\n"));
        assert!(text.contains("  unsorted.yaml      1\n"));
    }

    #[test]
    fn rules_are_numbered_from_one() {
        let rules = [CategoryRule {
            name: "mail",
            patterns: &["Mail", "Inbox"],
            description: "Mailbox.",
        }];
        assert_eq!(render_rules(&rules), " 1. mail - Mailbox.\n    Mail, Inbox\n");
    }
}
