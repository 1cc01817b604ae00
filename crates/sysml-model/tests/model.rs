//! Tests for sysml-model types.

use sysml_model::{
    Category, Element, Issue, Model, ModelIndex, Rule, RuleCategory, Severity, ValidationReport,
};

fn issue(rule: Rule, id: &str) -> Issue {
    Issue::new(rule, id, "", "message")
}

#[test]
fn partition_keeps_emission_order_within_severity() {
    let report = ValidationReport {
        issues: vec![
            issue(Rule::RequirementName, "REQ1"),
            issue(Rule::RequirementTrace, "REQ1"),
            issue(Rule::RequirementName, "REQ2"),
            issue(Rule::ActorName, "A1"),
        ],
    };

    let groups = report.partition();
    assert_eq!(groups.len(), 2);

    let (severity, errors) = &groups[0];
    assert_eq!(*severity, Severity::Error);
    let error_ids: Vec<&str> = errors.iter().map(|i| i.element_id.as_str()).collect();
    assert_eq!(error_ids, vec!["REQ1", "A1"]);

    let (severity, infos) = &groups[1];
    assert_eq!(*severity, Severity::Info);
    let info_ids: Vec<&str> = infos.iter().map(|i| i.element_id.as_str()).collect();
    assert_eq!(info_ids, vec!["REQ1", "REQ2"]);
}

#[test]
fn warnings_are_supported_but_not_blocking() {
    let mut warning = issue(Rule::UseCaseTrace, "UC1");
    warning.severity = Severity::Warning;
    let report = ValidationReport {
        issues: vec![warning],
    };
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());
    assert_eq!(report.partition()[0].0, Severity::Warning);
}

#[test]
fn empty_report_is_clean() {
    let report = ValidationReport::new();
    assert!(report.is_empty());
    assert!(report.partition().is_empty());
    assert!(!report.has_errors());
    assert!(report.is_clean());
}

#[test]
fn info_findings_keep_report_clean() {
    let mut report = ValidationReport::new();
    report.add(issue(Rule::RequirementName, "REQ1"));
    assert!(!report.is_empty());
    assert!(report.is_clean());

    report.add(issue(Rule::RequirementTrace, "REQ1"));
    assert!(!report.is_clean());
}

#[test]
fn category_counts_group_rules() {
    let report = ValidationReport {
        issues: vec![
            issue(Rule::UniqueId, "X"),
            issue(Rule::ReferenceIntegrity, "Y"),
            issue(Rule::FlowDirection, "FP1"),
        ],
    };
    let counts = report.category_counts();
    assert_eq!(counts.get(&RuleCategory::Integrity), Some(&2));
    assert_eq!(counts.get(&RuleCategory::Interface), Some(&1));
    assert_eq!(report.with_rule(Rule::UniqueId).count(), 1);
    assert_eq!(report.for_element("FP1").count(), 1);
}

#[test]
fn index_exposes_nested_collections_read_only() {
    let mut block = Element::new("BLK1").named("Pump");
    block.parts.push(Element::new("P1").typed("BLK2"));
    let model = Model::new()
        .with(Category::Block, block)
        .with(Category::Block, Element::new("BLK2").named("Motor"));
    let index = ModelIndex::build(&model);

    let owner = index.element("BLK1").expect("block indexed");
    assert_eq!(owner.parts().len(), 1);
    let part_type = owner.parts()[0].type_ref().expect("typed part");
    assert_eq!(index.display_name(part_type), "Motor");
}
