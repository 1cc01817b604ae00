//! Ordered collection of issues produced by one validation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Rule, RuleCategory, Severity};

/// Validation report for a whole model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue to the report.
    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Issues of one severity, in emission order.
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity == severity)
    }

    /// Non-empty severity groups in severity order; order within a group is
    /// emission order.
    pub fn partition(&self) -> Vec<(Severity, Vec<&Issue>)> {
        Severity::all()
            .iter()
            .map(|severity| (*severity, self.by_severity(*severity).collect::<Vec<_>>()))
            .filter(|(_, issues)| !issues.is_empty())
            .collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity(severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    /// Check if report has any errors.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.severity.is_blocking())
    }

    /// No error-severity issues; info and warnings do not count.
    pub fn is_clean(&self) -> bool {
        !self.has_errors()
    }

    /// Issues emitted by one rule.
    pub fn with_rule(&self, rule: Rule) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.rule == rule)
    }

    /// Issues attributed to one element.
    pub fn for_element<'a>(&'a self, element_id: &'a str) -> impl Iterator<Item = &'a Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.element_id == element_id)
    }

    /// Issue counts per rule category.
    pub fn category_counts(&self) -> BTreeMap<RuleCategory, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.rule.category()).or_insert(0) += 1;
        }
        counts
    }
}
