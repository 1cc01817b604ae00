//! Rule battery tests over small hand-built and loaded models.

use proptest::prelude::*;
use tempfile::TempDir;

use sysml_ingest::load_model;
use sysml_model::{
    Category, CategoryPolicy, Element, FlowDirection, Issue, Model, RequirementKind, Rule,
    Severity, Stereotype, UniquenessScope, ValidationOptions, ValidationReport,
};
use sysml_validate::{RuleEngine, validate_model};

fn validate(model: &Model) -> ValidationReport {
    validate_model(model, ValidationOptions::default())
}

fn rules_for<'a>(report: &'a ValidationReport, id: &'a str) -> Vec<Rule> {
    report.for_element(id).map(|issue| issue.rule).collect()
}

fn with_refs(mut element: Element, f: impl FnOnce(&mut Element)) -> Element {
    f(&mut element);
    element
}

fn requirement(id: &str) -> Element {
    let mut requirement = Element::new(id).named(format!("{id} summary"));
    requirement.text = Some("The system shall respond.".to_string());
    requirement
}

fn signal(id: &str) -> Element {
    Element::new(id).named("Pressure").documented("Line pressure")
}

#[test]
fn scenario_actor_use_case_requirement() {
    let actor = with_refs(
        Element::new("A1").named("Operator").documented("Runs the plant"),
        |a| a.use_case_refs = vec!["UC1".into()],
    );
    let use_case = with_refs(
        Element::new("UC1").named("Start pump").documented("Starts the pump"),
        |uc| {
            uc.actor_refs = vec!["A1".into()];
            uc.trace_refs = vec!["REQ1".into()];
        },
    );
    let model = Model::new()
        .with(Category::Actor, actor)
        .with(Category::UseCase, use_case)
        .with(Category::Requirement, requirement("REQ1"));

    let report = validate(&model);
    assert!(rules_for(&report, "A1").is_empty());
    assert!(rules_for(&report, "UC1").is_empty());
    assert_eq!(rules_for(&report, "REQ1"), vec![Rule::RequirementTrace]);
    assert_eq!(report.len(), 1);
}

#[test]
fn scenario_flow_direction_reports_found_value() {
    let mut interface = Element::new("IB1").named("Hydraulic");
    let mut flow = Element::new("FP1").named("pressure").typed("SIG1");
    flow.direction = Some(FlowDirection::In);
    interface.flow_properties.push(flow);
    let model = Model::new()
        .with(Category::InterfaceBlock, interface)
        .with(Category::Signal, signal("SIG1"));

    let report = validate(&model);
    let issues: Vec<&Issue> = report.with_rule(Rule::FlowDirection).collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].element_id, "FP1");
    assert_eq!(issues[0].severity, Severity::Error);
    assert!(issues[0].message.contains("(found: in)"));
    assert_eq!(report.len(), 1);
}

#[test]
fn scenario_physical_block_with_logical_part() {
    let mut physical = Element::new("BLK1")
        .named("Pump skid")
        .stereotyped(Stereotype::Physical);
    physical
        .parts
        .push(Element::new("PRT1").named("controller").typed("BLK2"));
    let model = Model::new()
        .with(Category::Block, physical)
        .with(
            Category::Block,
            Element::new("BLK2")
                .named("Controller")
                .stereotyped(Stereotype::Logical),
        );

    let report = validate(&model);
    let issues: Vec<&Issue> = report.with_rule(Rule::PhysicalArchitecture).collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].element_id, "PRT1");
    assert_eq!(
        issues[0].message,
        "Part in physical block must be typed by physical block (found: logical)"
    );
    assert_eq!(report.len(), 1);
}

#[test]
fn requirement_trace_fires_only_without_any_relationship() {
    let derived = with_refs(requirement("REQ2"), |r| r.derive_refs = vec!["REQ1".into()]);
    let refined = with_refs(requirement("REQ3"), |r| r.refine_refs = vec!["REQ1".into()]);
    let traced = with_refs(requirement("REQ4"), |r| r.trace_refs = vec!["REQ1".into()]);
    let model = Model::new()
        .with(Category::Requirement, requirement("REQ1"))
        .with(Category::Requirement, derived)
        .with(Category::Requirement, refined)
        .with(Category::Requirement, traced);

    let report = validate(&model);
    let ids: Vec<&str> = report
        .with_rule(Rule::RequirementTrace)
        .map(|issue| issue.element_id.as_str())
        .collect();
    assert_eq!(ids, vec!["REQ1"]);
}

#[test]
fn performance_requirement_needs_refine() {
    let performance = with_refs(requirement("REQ2"), |r| {
        r.requirement_kind = Some(RequirementKind::Performance);
        r.trace_refs = vec!["REQ1".into()];
    });
    let model = Model::new()
        .with(Category::Requirement, with_refs(requirement("REQ1"), |r| {
            r.trace_refs = vec!["REQ2".into()];
        }))
        .with(Category::Requirement, performance);

    let report = validate(&model);
    assert_eq!(rules_for(&report, "REQ2"), vec![Rule::PerformanceRefine]);
}

#[test]
fn unnamed_requirement_is_info_named_by_id() {
    let mut unnamed = Element::new("REQ9");
    unnamed.text = Some("   ".to_string());
    unnamed.trace_refs = vec!["UC1".into()];
    let model = Model::new().with(Category::Requirement, unnamed);

    let report = validate(&model);
    let rules = rules_for(&report, "REQ9");
    assert_eq!(
        rules,
        vec![
            Rule::RequirementText,
            Rule::RequirementName,
            Rule::ReferenceIntegrity
        ]
    );
    let info: Vec<&Issue> = report.by_severity(Severity::Info).collect();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].element_name, "REQ9");
    assert!(report.has_errors());
}

#[test]
fn context_block_without_parts_but_with_ports() {
    let mut context = Element::new("CTX")
        .named("System context")
        .stereotyped(Stereotype::Context);
    context.ports.push(Element::new("PORT1").typed("IB1"));
    let model = Model::new()
        .with(Category::Block, context)
        .with(
            Category::InterfaceBlock,
            Element::new("IB1").named("Power"),
        );

    let report = validate(&model);
    let rules = rules_for(&report, "CTX");
    assert_eq!(rules, vec![Rule::ContextPorts, Rule::ContextParts]);
}

#[test]
fn context_parts_cascade_documentation_to_typing_block() {
    let mut context = Element::new("CTX")
        .named("System context")
        .stereotyped(Stereotype::Context);
    context.parts.push(Element::new("P1").typed("BLK1"));
    context.parts.push(Element::new("P2").typed("BLK2"));
    context.parts.push(Element::new("P3").typed("SIG1"));
    let model = Model::new()
        .with(Category::Block, context)
        .with(Category::Block, Element::new("BLK1").named("Plant"))
        .with(
            Category::Block,
            Element::new("BLK2").named("Grid").documented("Utility grid"),
        )
        .with(Category::Signal, signal("SIG1"));

    let report = validate(&model);
    let issues: Vec<&Issue> = report.with_rule(Rule::ContextBlockDocumentation).collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].element_id, "BLK1");
    assert_eq!(issues[0].element_name, "Plant");
}

#[test]
fn ports_follow_owner_stereotype() {
    let mut logical = Element::new("BLK1")
        .named("Controller")
        .stereotyped(Stereotype::Logical);
    logical.ports.push(Element::new("PORT1").typed("IB1"));
    logical.ports.push(Element::new("PORT2").typed("IB2"));
    logical.ports.push(Element::new("PORT3").typed("IBX"));
    logical.ports.push(Element::new("PORT4").typed("SIG1"));
    logical.ports.push(Element::new("PORT5"));
    let model = Model::new()
        .with(Category::Block, logical)
        .with(
            Category::InterfaceBlock,
            Element::new("IB1").stereotyped(Stereotype::Physical),
        )
        .with(
            Category::InterfaceBlock,
            Element::new("IBX").stereotyped(Stereotype::External),
        )
        .with(Category::Signal, signal("SIG1"));

    let report = validate(&model);
    assert_eq!(rules_for(&report, "PORT1"), vec![Rule::LogicalPort]);
    assert_eq!(rules_for(&report, "PORT2"), vec![Rule::ReferenceIntegrity]);
    assert!(rules_for(&report, "PORT3").is_empty());
    assert_eq!(
        rules_for(&report, "PORT4"),
        vec![Rule::ProxyPortType, Rule::LogicalPort]
    );
    assert_eq!(rules_for(&report, "PORT5"), vec![Rule::ProxyPortType]);

    let mismatch = report
        .for_element("PORT4")
        .next()
        .expect("proxy port issue");
    assert!(mismatch.message.ends_with("(found: Signal)"));
}

#[test]
fn external_part_types_are_always_accepted() {
    let mut logical = Element::new("BLK1")
        .named("Controller")
        .stereotyped(Stereotype::Logical);
    logical.parts.push(Element::new("P1").typed("EXT"));
    logical.parts.push(Element::new("P2").typed("UNTAGGED"));
    let model = Model::new()
        .with(Category::Block, logical)
        .with(
            Category::Block,
            Element::new("EXT").named("Sensor").stereotyped(Stereotype::External),
        )
        .with(Category::Block, Element::new("UNTAGGED").named("Thing"));

    let report = validate(&model);
    assert!(rules_for(&report, "P1").is_empty());
    let issue = report.for_element("P2").next().expect("arch issue");
    assert_eq!(issue.rule, Rule::LogicalArchitecture);
    assert!(issue.message.ends_with("(found: none)"));
}

#[test]
fn flow_type_must_be_a_signal() {
    let mut interface = Element::new("IB1").named("Data");
    let flows = [
        ("FP1", Some("SIG1")),
        ("FP2", Some("BLK1")),
        ("FP3", Some("NOPE")),
        ("FP4", None),
    ];
    for (id, type_ref) in flows {
        let mut flow = Element::new(id);
        flow.direction = Some(FlowDirection::InOut);
        flow.type_ref = type_ref.map(str::to_string);
        interface.flow_properties.push(flow);
    }
    let model = Model::new()
        .with(Category::InterfaceBlock, interface)
        .with(Category::Signal, signal("SIG1"))
        .with(Category::Block, Element::new("BLK1").named("Tank"));

    let report = validate(&model);
    assert!(rules_for(&report, "FP1").is_empty());
    assert_eq!(rules_for(&report, "FP2"), vec![Rule::FlowType]);
    assert_eq!(rules_for(&report, "FP3"), vec![Rule::ReferenceIntegrity]);
    assert_eq!(rules_for(&report, "FP4"), vec![Rule::FlowType]);
}

#[test]
fn included_use_case_needs_no_actor_or_trace() {
    let base = with_refs(
        Element::new("UC1").named("Operate").documented("Operate the plant"),
        |uc| {
            uc.actor_refs = vec!["A1".into()];
            uc.trace_refs = vec!["REQ1".into()];
            uc.include_refs = vec!["UC2".into()];
        },
    );
    let included = Element::new("UC2").named("Log in").documented("Authenticate");
    let extending = with_refs(
        Element::new("UC3").named("Override").documented("Manual override"),
        |uc| uc.extend_refs = vec!["UC1".into()],
    );
    let orphan = Element::new("UC4").named("Orphan").documented("Nothing");
    let model = Model::new()
        .with(Category::UseCase, base)
        .with(Category::UseCase, included)
        .with(Category::UseCase, extending)
        .with(Category::UseCase, orphan);

    let report = validate(&model);
    // UC1 refers to A1 and REQ1, neither of which exist.
    assert_eq!(
        rules_for(&report, "UC1"),
        vec![Rule::ReferenceIntegrity, Rule::ReferenceIntegrity]
    );
    assert!(rules_for(&report, "UC2").is_empty());
    assert!(rules_for(&report, "UC3").is_empty());
    assert_eq!(
        rules_for(&report, "UC4"),
        vec![Rule::UseCaseActor, Rule::UseCaseTrace]
    );
}

#[test]
fn source_content_needs_name_and_location() {
    let mut located = Element::new("SRC1").named("Pump datasheet");
    located.file_or_url = Some("docs/pump.pdf".to_string());
    let mut blank_location = Element::new("SRC3").named("Wiring notes");
    blank_location.file_or_url = Some(String::new());
    let model = Model::new()
        .with(Category::SourceContent, located)
        .with(Category::SourceContent, Element::new("SRC2"))
        .with(Category::SourceContent, blank_location);

    let report = validate(&model);
    assert!(rules_for(&report, "SRC1").is_empty());
    assert_eq!(
        rules_for(&report, "SRC2"),
        vec![Rule::ArtifactName, Rule::SourceContent]
    );
    assert_eq!(rules_for(&report, "SRC3"), vec![Rule::SourceContent]);
    assert_eq!(report.len(), 3);
}

#[test]
fn actor_needs_name_documentation_and_association() {
    let specialized = with_refs(
        Element::new("A2").named("Shift lead").documented("Supervises operators"),
        |a| a.generalization_refs = vec!["A1".into()],
    );
    let dangling = with_refs(
        Element::new("A3").named("Auditor").documented("Reviews logs"),
        |a| a.use_case_refs = vec!["UC9".into()],
    );
    let model = Model::new()
        .with(Category::Actor, Element::new("A1"))
        .with(Category::Actor, specialized)
        .with(Category::Actor, dangling);

    let report = validate(&model);
    assert_eq!(
        rules_for(&report, "A1"),
        vec![Rule::ActorName, Rule::ActorDocumentation, Rule::ActorUseCase]
    );
    assert!(rules_for(&report, "A2").is_empty());
    assert_eq!(rules_for(&report, "A3"), vec![Rule::ReferenceIntegrity]);

    let missing = report.for_element("A3").next().expect("reference issue");
    assert_eq!(missing.message, "Unresolved reference: UC9");
    assert_eq!(missing.element_name, "Auditor");
}

#[test]
fn use_case_needs_name_and_documentation() {
    let actor = with_refs(
        Element::new("A1").named("Operator").documented("Runs the plant"),
        |a| a.use_case_refs = vec!["UC1".into()],
    );
    let use_case = with_refs(Element::new("UC1"), |uc| {
        uc.actor_refs = vec!["A1".into()];
        uc.trace_refs = vec!["REQ1".into()];
    });
    let model = Model::new()
        .with(Category::Actor, actor)
        .with(Category::UseCase, use_case)
        .with(
            Category::Requirement,
            with_refs(requirement("REQ1"), |r| r.trace_refs = vec!["UC1".into()]),
        );

    let report = validate(&model);
    assert_eq!(
        rules_for(&report, "UC1"),
        vec![Rule::UseCaseName, Rule::UseCaseDocumentation]
    );
    assert_eq!(report.len(), 2);
}

#[test]
fn block_name_and_part_typing() {
    let mut block = Element::new("BLK1");
    block.parts.push(Element::new("P1").named("housing"));
    let model = Model::new().with(Category::Block, block);

    let report = validate(&model);
    assert_eq!(rules_for(&report, "BLK1"), vec![Rule::BlockName]);
    assert_eq!(rules_for(&report, "P1"), vec![Rule::PartType]);
    assert_eq!(report.len(), 2);
}

#[test]
fn physical_block_ports_need_physical_interfaces() {
    let mut physical = Element::new("BLK1")
        .named("Pump skid")
        .stereotyped(Stereotype::Physical);
    physical.ports.push(Element::new("PORT1").typed("IBL"));
    physical.ports.push(Element::new("PORT2").typed("IBP"));
    physical.ports.push(Element::new("PORT3").typed("IBX"));
    let interface = |id: &str, stereotype: Stereotype| {
        let mut interface = Element::new(id).named(id).stereotyped(stereotype);
        let mut flow = Element::new(format!("{id}_FP")).typed("SIG1");
        flow.direction = Some(FlowDirection::Out);
        interface.flow_properties.push(flow);
        interface
    };
    let model = Model::new()
        .with(Category::Block, physical)
        .with(Category::InterfaceBlock, interface("IBL", Stereotype::Logical))
        .with(Category::InterfaceBlock, interface("IBP", Stereotype::Physical))
        .with(Category::InterfaceBlock, interface("IBX", Stereotype::External))
        .with(Category::Signal, signal("SIG1"));

    let report = validate(&model);
    assert_eq!(rules_for(&report, "PORT1"), vec![Rule::PhysicalPort]);
    assert!(rules_for(&report, "PORT2").is_empty());
    assert!(rules_for(&report, "PORT3").is_empty());
    let issue = report.for_element("PORT1").next().expect("port issue");
    assert_eq!(
        issue.message,
        "Port on physical block must be typed by physical interface block"
    );
    assert_eq!(report.len(), 1);
}

#[test]
fn interface_block_needs_flow_or_port() {
    let mut with_port = Element::new("IB2").named("Bus");
    with_port.ports.push(Element::new("IB2_PORT").typed("IB3"));
    let mut with_flow = Element::new("IB3").named("Link");
    let mut flow = Element::new("FP1").named("level").typed("SIG1");
    flow.direction = Some(FlowDirection::Out);
    with_flow.flow_properties.push(flow);
    let model = Model::new()
        .with(Category::InterfaceBlock, Element::new("IB1").named("Empty"))
        .with(Category::InterfaceBlock, with_port)
        .with(Category::InterfaceBlock, with_flow)
        .with(Category::Signal, signal("SIG1"));

    let report = validate(&model);
    assert_eq!(rules_for(&report, "IB1"), vec![Rule::InterfaceBlockFlow]);
    assert!(rules_for(&report, "IB2").is_empty());
    assert!(rules_for(&report, "IB3").is_empty());
    assert_eq!(report.len(), 1);
}

#[test]
fn missing_flow_direction_reads_none() {
    let mut interface = Element::new("IB1").named("Link");
    interface
        .flow_properties
        .push(Element::new("FP1").named("level").typed("SIG1"));
    let model = Model::new()
        .with(Category::InterfaceBlock, interface)
        .with(Category::Signal, signal("SIG1"));

    let report = validate(&model);
    let issue = report.for_element("FP1").next().expect("direction issue");
    assert_eq!(issue.rule, Rule::FlowDirection);
    assert_eq!(
        issue.message,
        "Flow property direction must be 'out' or 'inout' (found: none)"
    );
    assert_eq!(report.len(), 1);
}

#[test]
fn signal_needs_name_and_documentation() {
    let model = Model::new()
        .with(Category::Signal, Element::new("SIG1").named("Flow rate"))
        .with(Category::Signal, Element::new("SIG2"))
        .with(Category::Signal, signal("SIG3"));

    let report = validate(&model);
    assert_eq!(rules_for(&report, "SIG1"), vec![Rule::SignalDocumentation]);
    assert_eq!(
        rules_for(&report, "SIG2"),
        vec![Rule::SignalName, Rule::SignalDocumentation]
    );
    assert!(rules_for(&report, "SIG3").is_empty());
    let undocumented = report.for_element("SIG1").next().expect("doc issue");
    assert_eq!(undocumented.element_name, "Flow rate");
}

#[test]
fn cross_category_duplicate_yields_one_issue() {
    let model = Model::new()
        .with(Category::Signal, signal("DUP"))
        .with(Category::Term, Element::new("DUP").named("Glossary entry"));

    let report = validate(&model);
    let issues: Vec<&Issue> = report.with_rule(Rule::UniqueId).collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Duplicate ID (also in signals)");
}

#[test]
fn nested_duplicates_depend_on_scope() {
    let mut first = Element::new("BLK1").named("A").documented("a");
    first.parts.push(Element::new("P1").typed("BLK2"));
    let mut second = Element::new("BLK2").named("B").documented("b");
    second.parts.push(Element::new("P1").typed("BLK1"));
    let model = Model::new()
        .with(Category::Block, first)
        .with(Category::Block, second);

    assert!(validate(&model).with_rule(Rule::UniqueId).next().is_none());

    let full = ValidationOptions::new().with_uniqueness(UniquenessScope::Full);
    let report = RuleEngine::new(full).run(&model);
    let issues: Vec<&Issue> = report.with_rule(Rule::UniqueId).collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].element_id, "P1");
}

#[test]
fn uniqueness_runs_first() {
    let model = Model::new()
        .with(Category::Package, Element::new("PKG1"))
        .with(Category::Package, Element::new("PKG1"));

    let report = validate(&model);
    let rules: Vec<Rule> = report.issues.iter().map(|issue| issue.rule).collect();
    assert_eq!(
        rules,
        vec![Rule::UniqueId, Rule::PackageName, Rule::PackageName]
    );
}

#[test]
fn validation_is_idempotent_over_a_directory() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("10-requirements.yaml"),
        "requirements:\n  - id: REQ1\n    text: Shall pump\n    kind: performance\n    traceRefs: [UC9]\n",
    )
    .expect("write requirements");
    std::fs::write(
        dir.path().join("20-blocks.yaml"),
        "blocks:\n  - id: CTX\n    stereotype: context\n    parts:\n      - id: P1\n        typeRef: BLK1\n  - id: BLK1\n    name: Pump\n",
    )
    .expect("write blocks");

    let run = || {
        let model = load_model(dir.path(), CategoryPolicy::Strict).expect("load");
        validate(&model)
    };
    let first = run();
    let second = run();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn every_missing_reference_is_reported_once(
        known in proptest::collection::btree_set("[A-Z]{2}[0-9]", 1..6),
        missing in proptest::collection::btree_set("[a-z]{3}", 0..6),
    ) {
        let mut model = Model::new();
        for id in &known {
            model.push(Category::Signal, signal(id));
        }
        let refs: Vec<String> = known.iter().chain(missing.iter()).cloned().collect();
        let actor = with_refs(
            Element::new("ACTOR").named("Operator").documented("Runs things"),
            |a| a.use_case_refs = refs,
        );
        model.push(Category::Actor, actor);

        let report = validate(&model);
        let reported: Vec<String> = report
            .with_rule(Rule::ReferenceIntegrity)
            .map(|issue| issue.message.trim_start_matches("Unresolved reference: ").to_string())
            .collect();
        let expected: Vec<String> = missing.iter().cloned().collect();
        prop_assert_eq!(reported, expected);
    }
}
