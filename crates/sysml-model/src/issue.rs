//! Validation issue types.
//!
//! Every rule in the battery has a fixed code, category and default
//! severity. Rules are a closed set; there is no runtime rule registration.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Issue severity level.
///
/// Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violates a required structural or semantic invariant.
    Error,
    /// Should review. No current rule emits warnings.
    Warning,
    /// Advisory only.
    Info,
}

impl Severity {
    pub const fn all() -> &'static [Self] {
        &[Self::Error, Self::Warning, Self::Info]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    /// Whether issues of this severity fail a validation run.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grouping of rules for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Naming,
    Documentation,
    Traceability,
    Architecture,
    Interface,
    Integrity,
}

impl RuleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Naming => "Naming",
            Self::Documentation => "Documentation",
            Self::Traceability => "Traceability",
            Self::Architecture => "Architecture",
            Self::Interface => "Interface",
            Self::Integrity => "Integrity",
        }
    }
}

/// A rule of the fixed validation battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    PackageName,
    ArtifactName,
    SourceContent,
    RequirementText,
    RequirementName,
    RequirementTrace,
    PerformanceRefine,
    ActorName,
    ActorDocumentation,
    ActorUseCase,
    UseCaseName,
    UseCaseDocumentation,
    UseCaseActor,
    UseCaseTrace,
    BlockName,
    ContextPorts,
    ContextParts,
    PartType,
    LogicalArchitecture,
    PhysicalArchitecture,
    ProxyPortType,
    LogicalPort,
    PhysicalPort,
    ContextBlockDocumentation,
    InterfaceBlockFlow,
    FlowDirection,
    FlowType,
    SignalName,
    SignalDocumentation,
    UniqueId,
    ReferenceIntegrity,
}

impl Rule {
    pub const ALL: [Rule; 31] = [
        Rule::PackageName,
        Rule::ArtifactName,
        Rule::SourceContent,
        Rule::RequirementText,
        Rule::RequirementName,
        Rule::RequirementTrace,
        Rule::PerformanceRefine,
        Rule::ActorName,
        Rule::ActorDocumentation,
        Rule::ActorUseCase,
        Rule::UseCaseName,
        Rule::UseCaseDocumentation,
        Rule::UseCaseActor,
        Rule::UseCaseTrace,
        Rule::BlockName,
        Rule::ContextPorts,
        Rule::ContextParts,
        Rule::PartType,
        Rule::LogicalArchitecture,
        Rule::PhysicalArchitecture,
        Rule::ProxyPortType,
        Rule::LogicalPort,
        Rule::PhysicalPort,
        Rule::ContextBlockDocumentation,
        Rule::InterfaceBlockFlow,
        Rule::FlowDirection,
        Rule::FlowType,
        Rule::SignalName,
        Rule::SignalDocumentation,
        Rule::UniqueId,
        Rule::ReferenceIntegrity,
    ];

    /// Rule code as printed in reports.
    pub fn code(&self) -> &'static str {
        match self {
            Rule::PackageName => "PACKAGENAME",
            Rule::ArtifactName => "ARTIFACTNAME",
            Rule::SourceContent => "SRCCNT",
            Rule::RequirementText => "REQTEXT",
            Rule::RequirementName => "REQNAME",
            Rule::RequirementTrace => "REQTRACE",
            Rule::PerformanceRefine => "PERFORMANCEFUNCTIONREFINE",
            Rule::ActorName => "ACTORNAME",
            Rule::ActorDocumentation => "ACTORDOCUMENTATION",
            Rule::ActorUseCase => "ACTORUSECASE",
            Rule::UseCaseName => "USECASENAME",
            Rule::UseCaseDocumentation => "UCDOCUMENTATION",
            Rule::UseCaseActor => "UCACTOR",
            Rule::UseCaseTrace => "UCTRACE",
            Rule::BlockName => "BLOCKNAME",
            Rule::ContextPorts => "CONTEXTPORTS",
            Rule::ContextParts => "CONTEXTPARTS",
            Rule::PartType => "PARTTYPE",
            Rule::LogicalArchitecture => "LOGICALARCH",
            Rule::PhysicalArchitecture => "PHYSICALARCH",
            Rule::ProxyPortType => "PROXYPORTTYPE",
            Rule::LogicalPort => "LOGICALPORT",
            Rule::PhysicalPort => "PHYSICALPORT",
            Rule::ContextBlockDocumentation => "CONBLOCKDOCUMENTATION",
            Rule::InterfaceBlockFlow => "INTBLOCKFLOW",
            Rule::FlowDirection => "FLOWDIRECTION",
            Rule::FlowType => "FLOWTYPE",
            Rule::SignalName => "SIGNALNAME",
            Rule::SignalDocumentation => "SIGNALDOCUMENTATION",
            Rule::UniqueId => "UNIQUE_ID",
            Rule::ReferenceIntegrity => "REF_INTEGRITY",
        }
    }

    /// Look up a rule by its report code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.code() == code)
    }

    pub fn category(&self) -> RuleCategory {
        match self {
            Rule::PackageName
            | Rule::ArtifactName
            | Rule::RequirementName
            | Rule::ActorName
            | Rule::UseCaseName
            | Rule::BlockName
            | Rule::SignalName => RuleCategory::Naming,
            Rule::SourceContent
            | Rule::RequirementText
            | Rule::ActorDocumentation
            | Rule::UseCaseDocumentation
            | Rule::ContextBlockDocumentation
            | Rule::SignalDocumentation => RuleCategory::Documentation,
            Rule::RequirementTrace
            | Rule::PerformanceRefine
            | Rule::ActorUseCase
            | Rule::UseCaseActor
            | Rule::UseCaseTrace => RuleCategory::Traceability,
            Rule::ContextPorts
            | Rule::ContextParts
            | Rule::PartType
            | Rule::LogicalArchitecture
            | Rule::PhysicalArchitecture => RuleCategory::Architecture,
            Rule::ProxyPortType
            | Rule::LogicalPort
            | Rule::PhysicalPort
            | Rule::InterfaceBlockFlow
            | Rule::FlowDirection
            | Rule::FlowType => RuleCategory::Interface,
            Rule::UniqueId | Rule::ReferenceIntegrity => RuleCategory::Integrity,
        }
    }

    /// Severity every emission of this rule carries.
    pub fn default_severity(&self) -> Severity {
        match self {
            Rule::RequirementName => Severity::Info,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Rule::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown rule code: {code}")))
    }
}

/// A single finding against one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub rule: Rule,
    pub element_id: String,
    pub element_name: String,
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    /// Create an issue at the rule's default severity.
    pub fn new(
        rule: Rule,
        element_id: impl Into<String>,
        element_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            element_id: element_id.into(),
            element_name: element_name.into(),
            severity: rule.default_severity(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.rule, self.element_name, self.element_id, self.message
        )
    }
}
