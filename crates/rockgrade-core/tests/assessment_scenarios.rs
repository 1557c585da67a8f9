//! End-to-end assessment scenarios through the public API.

use std::path::Path;

use rockgrade_core::parser::{default_catalog, parse_catalog_str};
use rockgrade_core::rock_types::{parse_rock_records_json, rock_groups_from_records};
use rockgrade_core::{
    Assessment, AssessmentError, Catalog, EvaluationEngine, GroupSelector, ScoreMapping,
};

const ONE_CRITERION: &str = r#"
[catalog]
id = "over-break"
name = "Over-break only"

[[criteria]]
name = "superExcavation"
title = "Over-break value"
options = [
    { value = "value1", label = "1" },
    { value = "value2", label = "2" },
    { value = "value3", label = "3" },
    { value = "value4", label = "4" },
    { value = "value5", label = "5" },
]

[[groups]]
id = "igneous"
options = [{ value = "basalt", label = "Basalt" }]

[[groups]]
id = "sedimentary"
options = [{ value = "limestone", label = "Limestone" }]

[[groups]]
id = "metamorphic"
options = [{ value = "marble", label = "Marble" }]
"#;

fn one_criterion() -> Catalog {
    parse_catalog_str(ONE_CRITERION, Path::new("scenario.toml")).unwrap()
}

#[test]
fn over_break_rank_three_scores_75() {
    let mut assessment = Assessment::new(&one_criterion());
    assessment
        .set_selection("superExcavation", "value3")
        .unwrap();

    let result = assessment.evaluate();
    assert_eq!(result.score("superExcavation"), Some(75.0));
    assert_eq!(result.aggregate_score, 75.0);
    assert_eq!(result.radar_vector, vec![75.0]);
}

#[test]
fn rock_classification_switches_groups() {
    let mut assessment = Assessment::new(&one_criterion());
    assessment.select("igneous", "basalt").unwrap();
    assessment.select("sedimentary", "limestone").unwrap();

    let current = assessment.current_selection().unwrap();
    assert_eq!(current.group_id, "sedimentary");
    assert_eq!(current.value, "limestone");
    assert_eq!(assessment.selector().selection_for("igneous"), None);
}

#[test]
fn defaults_after_initialize() {
    let catalog = default_catalog().unwrap();
    let mut engine = EvaluationEngine::new();
    engine.initialize(&catalog).unwrap();

    let result = engine.evaluate();
    let best = ScoreMapping::default().best().clone();
    assert_eq!(result.aggregate_score, best.score);
    assert_eq!(result.radar_vector.len(), catalog.criteria().len());
    for (outcome, criterion) in result.criteria.iter().zip(catalog.criteria()) {
        assert_eq!(outcome.name, criterion.name());
        assert_eq!(outcome.label, best.label);
    }
}

#[test]
fn rejected_update_preserves_snapshot() {
    let catalog = default_catalog().unwrap();
    let mut assessment = Assessment::new(&catalog);
    assessment.set_selection("flatness", "value2").unwrap();
    let before = serde_json::to_string(assessment.engine().selection()).unwrap();

    let err = assessment
        .set_selection("nonexistent", "value1")
        .unwrap_err();
    assert_eq!(err, AssessmentError::UnknownCriterion("nonexistent".into()));

    let after = serde_json::to_string(assessment.engine().selection()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn radar_vector_tracks_every_selection() {
    let catalog = default_catalog().unwrap();
    let mut assessment = Assessment::new(&catalog);
    let names: Vec<String> = catalog
        .criteria()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    for (i, name) in names.iter().enumerate() {
        let value = format!("value{}", i % 5 + 1);
        assessment.set_selection(name, &value).unwrap();
        let result = assessment.evaluate();
        assert_eq!(result.radar_vector.len(), names.len());
        for (pos, outcome) in result.criteria.iter().enumerate() {
            assert_eq!(&outcome.name, &names[pos]);
            assert_eq!(result.radar_vector[pos], outcome.score);
        }
    }
}

#[test]
fn service_records_drive_the_selector() {
    let json = r#"{"code": 1, "data": [
        {"id": 3, "name": "玄武岩", "foreign_name": "Basalt", "type_code": "002002"},
        {"id": 4, "name": "石灰岩", "foreign_name": "Limestone", "type_code": "002001"}
    ]}"#;
    let records = parse_rock_records_json(json).unwrap();
    let mut selector = GroupSelector::new(rock_groups_from_records(&records).unwrap()).unwrap();

    selector.select("igneous", "3").unwrap();
    selector.select("sedimentary", "4").unwrap();
    assert_eq!(selector.current_label(), Some("石灰岩 (Limestone)"));
    assert!(selector.select("metamorphic", "3").is_err());
}
