//! Validation Integration Tests
//!
//! Untyped input through `validate_entry`, lint and the validation report.

use medcorpus::domain::{ComplexityLevel, Language};
use medcorpus::schema::LintKind;
use medcorpus::{content, lint_entry, validate_entry, ValidationReport, ViolationKind};
use serde_json::{json, Value};

fn valid_raw() -> Value {
    json!({
        "id": "condition-hypertension",
        "type": "condition",
        "category": "primary-care",
        "name": { "en": "Hypertension", "es": "Hipertensión" },
        "alternateNames": ["HTN", "High blood pressure"],
        "levels": {
            "1": {
                "level": 1,
                "summary": { "en": "Blood pushes too hard on the arteries.", "es": "La sangre empuja demasiado fuerte en las arterias." },
                "explanation": { "en": "The heart works harder than it should.", "es": "El corazón trabaja más de lo que debería." },
                "keyTerms": [
                    {
                        "term": { "en": "Blood pressure", "es": "Presión arterial" },
                        "definition": { "en": "Force of blood on vessel walls", "es": "Fuerza de la sangre sobre los vasos" }
                    }
                ]
            },
            "4": {
                "level": 4,
                "summary": { "en": "Sustained elevation above 130/80 mmHg.", "es": "Elevación sostenida por encima de 130/80 mmHg." },
                "explanation": { "en": "Staged by office and ambulatory readings.", "es": "Se clasifica con mediciones en consulta y ambulatorias." },
                "clinicalNotes": { "en": "Confirm with home readings.", "es": "Confirmar con mediciones domiciliarias." }
            }
        },
        "citations": [
            { "id": "c1", "type": "guideline", "title": "ACC/AHA Guideline", "license": "Proprietary" }
        ],
        "crossReferences": [
            { "targetId": "condition-stroke", "targetType": "condition", "relationship": "related", "label": "Stroke" }
        ],
        "tags": {
            "systems": ["cardiovascular"],
            "topics": ["cardiology"],
            "clinicalRelevance": "critical",
            "examRelevance": { "usmle": true, "nbme": true, "shelf": ["medicine"] }
        },
        "createdAt": "2026-01-05",
        "updatedAt": "2026-02-01T09:30:00Z",
        "version": 2,
        "status": "review"
    })
}

#[test]
fn test_valid_input_becomes_typed_entry() {
    let entry = validate_entry(&valid_raw()).unwrap();

    assert_eq!(entry.id, "condition-hypertension");
    assert_eq!(entry.name.text(Language::Es), "Hipertensión");
    assert_eq!(entry.version, 2);
    assert_eq!(
        entry.authored_levels().collect::<Vec<_>>(),
        vec![ComplexityLevel::L1, ComplexityLevel::L4]
    );
    assert!(entry.level(ComplexityLevel::L2).is_none());
    assert_eq!(entry.updated_at.to_string(), "2026-02-01");
}

#[test]
fn test_all_violations_reported_together() {
    let mut raw = valid_raw();
    raw["type"] = json!("disease");
    raw["version"] = json!(0);
    raw["tags"]["clinicalRelevance"] = json!("urgent");
    raw["levels"]["4"]["level"] = json!(3);
    raw["crossReferences"][0]["relationship"] = json!("cousin");
    raw.as_object_mut().unwrap().remove("status");

    let error = validate_entry(&raw).unwrap_err();

    assert_eq!(error.id.as_deref(), Some("condition-hypertension"));
    for path in [
        "type",
        "version",
        "tags.clinicalRelevance",
        "levels.4.level",
        "crossReferences[0].relationship",
        "status",
    ] {
        assert!(error.has_violation_at(path), "no violation at {}", path);
    }
}

#[test]
fn test_level_mismatch_names_both_numbers() {
    let mut raw = valid_raw();
    raw["levels"]["1"]["level"] = json!(2);

    let error = validate_entry(&raw).unwrap_err();
    let violation = &error.violations[0];

    assert_eq!(violation.path, "levels.1.level");
    assert!(matches!(
        violation.kind,
        ViolationKind::LevelMismatch {
            key: 1,
            declared: 2
        }
    ));
}

#[test]
fn test_enum_values_are_case_sensitive() {
    let mut raw = valid_raw();
    raw["status"] = json!("Published");

    let error = validate_entry(&raw).unwrap_err();
    assert_eq!(error.paths(), vec!["status"]);
}

#[test]
fn test_legacy_strings_are_accepted() {
    let mut raw = valid_raw();
    raw["name"] = json!("Hypertension");
    raw["nameEs"] = json!("Hipertensión");
    raw["levels"]["1"]["summary"] = json!("Presión alta | High pressure");

    let entry = validate_entry(&raw).unwrap();

    assert_eq!(entry.name.en, "Hypertension");
    assert_eq!(entry.name.es.as_deref(), Some("Hipertensión"));

    let summary = &entry.level(ComplexityLevel::L1).unwrap().summary;
    assert_eq!(summary.en, "High pressure");
    assert_eq!(summary.es.as_deref(), Some("Presión alta"));
}

#[test]
fn test_dangling_reference_still_validates() {
    let mut raw = valid_raw();
    raw["crossReferences"][0]["targetId"] = json!("ghost-id");
    assert!(validate_entry(&raw).is_ok());
}

#[test]
fn test_authored_entries_round_trip_through_json() {
    for entry in content::entries() {
        let raw = serde_json::to_value(&entry).unwrap();
        assert_eq!(validate_entry(&raw).unwrap(), entry);
    }
}

#[test]
fn test_lint_reports_missing_spanish() {
    let mut raw = valid_raw();
    raw["levels"]["4"]["summary"] = json!({ "en": "Sustained elevation." });

    let entry = validate_entry(&raw).unwrap();
    let warnings = lint_entry(&entry);

    assert!(warnings
        .iter()
        .any(|w| w.path == "levels.4.summary" && matches!(w.kind, LintKind::MissingSpanish)));
}

#[test]
fn test_report_fails_on_errors_and_strict_warnings() {
    let mut report = ValidationReport::new();
    report.record_entry(&validate_entry(&valid_raw()).unwrap());

    assert!(report.passed(false));
    // hypertension only authors levels 1 and 4
    assert!(!report.warnings.is_empty());
    assert!(!report.passed(true));

    report.record_error("broken.json", "missing field");
    assert!(report.has_errors());
    assert!(!report.passed(false));
}
