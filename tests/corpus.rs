//! Corpus Integration Tests
//!
//! Lookup, filtering, search and reference checks over built corpora.

use medcorpus::content;
use medcorpus::domain::{ContentType, SurgicalCategory};
use medcorpus::{
    CategoryField, ComplexityLevel, Corpus, DuplicateIdError, EducationalContent, SharedCorpus,
};
use serde_json::json;

fn entry(id: &str, content_type: &str, summary: &str) -> EducationalContent {
    let raw = json!({
        "id": id,
        "type": content_type,
        "name": { "en": id.to_uppercase(), "es": id.to_uppercase() },
        "levels": {
            "1": {
                "level": 1,
                "summary": { "en": summary, "es": summary },
                "explanation": { "en": "Explanation", "es": "Explicación" }
            }
        },
        "tags": {
            "systems": ["general"],
            "topics": ["basics"],
            "clinicalRelevance": "medium"
        },
        "createdAt": "2026-01-10",
        "updatedAt": "2026-01-10",
        "version": 1,
        "status": "published"
    });

    medcorpus::validate_entry(&raw).unwrap()
}

fn with_reference(mut entry: EducationalContent, target: &str) -> EducationalContent {
    let reference = json!({
        "targetId": target,
        "targetType": "condition",
        "relationship": "related",
        "label": "Related"
    });
    entry.cross_references.push(serde_json::from_value(reference).unwrap());
    entry
}

#[test]
fn test_three_entry_scenario() {
    let corpus = Corpus::build(vec![
        entry("a", "condition", "Causes fever and chills"),
        entry("b", "condition", "A chronic disease"),
        entry("c", "procedure", "An operation"),
    ])
    .unwrap();

    let conditions: Vec<_> = corpus
        .list_by_category(CategoryField::Any, "condition")
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(conditions, vec!["a", "b"]);

    let hits = corpus.search("FEVER");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "a");

    assert!(corpus.get("missing").is_none());
    assert_eq!(corpus.count(), 3);

    let duplicate = Corpus::build(vec![
        entry("a", "condition", "first"),
        entry("b", "condition", "second"),
        entry("a", "procedure", "third"),
    ]);
    assert_eq!(
        duplicate.unwrap_err(),
        DuplicateIdError {
            id: "a".to_string()
        }
    );
}

#[test]
fn test_get_returns_the_entry_with_that_id() {
    let corpus = content::corpus().unwrap();

    for id in corpus.ids() {
        assert_eq!(corpus.get(id).unwrap().id, id);
    }
    assert!(corpus.get("nonexistent-id").is_none());
}

#[test]
fn test_search_by_name_and_key_term() {
    let corpus = content::corpus().unwrap();

    let by_name = corpus.search("Skin Cancer");
    assert!(by_name.iter().any(|e| e.id == "condition-skin-cancer"));

    let by_term = corpus.search("MELANOCYTES");
    assert!(by_term.iter().any(|e| e.id == "condition-skin-cancer"));

    assert!(corpus.search("xyz-not-present").is_empty());
}

#[test]
fn test_search_results_are_a_subset_in_order() {
    let corpus = content::corpus().unwrap();
    let order: Vec<_> = corpus.ids().collect();

    let hits: Vec<_> = corpus.search("kidney").iter().map(|e| e.id.as_str()).collect();
    assert!(!hits.is_empty());

    let positions: Vec<_> = hits
        .iter()
        .map(|id| order.iter().position(|o| o == id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_spanish_name_is_searchable() {
    let corpus = content::corpus().unwrap();
    let hits = corpus.search("lesión renal aguda");
    assert!(hits.iter().any(|e| e.id == "condition-acute-kidney-injury"));
}

#[test]
fn test_every_listed_entry_has_the_value() {
    let corpus = content::corpus().unwrap();

    for entry in corpus.list_by_category(CategoryField::System, "renal") {
        assert!(entry.tags.systems.iter().any(|s| s == "renal"));
    }

    let conditions = corpus.list_by_category(CategoryField::Type, "condition");
    assert!(conditions
        .iter()
        .all(|e| e.content_type == ContentType::Condition));

    assert!(corpus.list_by_category(CategoryField::Any, "no-such-value").is_empty());
}

#[test]
fn test_dangling_reference_is_reported() {
    let corpus = Corpus::build(vec![
        with_reference(entry("a", "condition", "x"), "b"),
        with_reference(entry("b", "condition", "y"), "ghost-id"),
    ])
    .unwrap();

    let dangling = corpus.find_dangling_references();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].from_id, "b");
    assert_eq!(dangling[0].target_id, "ghost-id");
}

#[test]
fn test_authored_corpus_dangling_references() {
    let corpus = content::corpus().unwrap();
    let targets: Vec<_> = corpus
        .find_dangling_references()
        .into_iter()
        .map(|d| d.target_id)
        .collect();

    assert!(targets.contains(&"procedure-dialysis".to_string()));
    assert!(!targets.contains(&"condition-chronic-kidney-disease".to_string()));
}

#[test]
fn test_missing_level_is_none() {
    let corpus = content::corpus().unwrap();
    let ckd = corpus.get("condition-chronic-kidney-disease").unwrap();

    assert!(ckd.level(ComplexityLevel::L3).is_some());
    assert!(ckd.level(ComplexityLevel::L5).is_none());

    let nearest = ckd.nearest_level_at_or_below(ComplexityLevel::L5).unwrap();
    assert_eq!(nearest.level, ComplexityLevel::L3);
}

#[test]
fn test_reconstructive_procedures() {
    let procedures = content::procedure_corpus().unwrap();
    let reconstructive = procedures.filter(|p| p.category == SurgicalCategory::Reconstructive);

    assert!(reconstructive.len() >= 2);
    assert!(reconstructive
        .iter()
        .all(|p| p.category == SurgicalCategory::Reconstructive));
}

#[test]
fn test_shared_corpus_swaps_whole_snapshots() {
    let shared = SharedCorpus::new(Corpus::build(vec![entry("a", "condition", "x")]).unwrap());
    let before = shared.load();

    shared.replace(
        Corpus::build(vec![entry("a", "condition", "x"), entry("b", "topic", "y")]).unwrap(),
    );

    assert_eq!(before.count(), 1);
    assert_eq!(shared.load().count(), 2);
}
