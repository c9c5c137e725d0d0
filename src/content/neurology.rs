//! Neurology: stroke.

use super::{citation, date, level, levels, related, strings, term, text, texts, CONTENT_TEAM};
use crate::domain::{
    CitationKind, ClinicalRelevance, ComplexityLevel, ContentCategory, ContentTags, ContentType,
    EducationalContent, LevelContent, Relationship, Status,
};

pub fn entries() -> Vec<EducationalContent> {
    vec![stroke()]
}

pub fn stroke() -> EducationalContent {
    EducationalContent {
        id: "condition-stroke".to_string(),
        content_type: ContentType::Condition,
        category: Some(ContentCategory::Medical),
        name: text("Accidente Cerebrovascular", "Stroke"),
        alternate_names: strings(&["ACV", "Ictus", "Cerebrovascular accident", "CVA"]),
        levels: levels([
            LevelContent {
                key_terms: vec![term(
                    ("coágulo", "clot"),
                    (
                        "Sangre espesa que tapa un vaso sanguíneo.",
                        "Thickened blood that plugs a blood vessel.",
                    ),
                )],
                patient_counseling_points: texts(&[(
                    "Si nota cara caída, brazo débil o habla extraña, llame a emergencias de inmediato.",
                    "If you notice a drooping face, a weak arm or strange speech, call emergency services right away.",
                )]),
                ..level(
                    ComplexityLevel::L1,
                    (
                        "Un accidente cerebrovascular ocurre cuando una parte del cerebro deja de recibir sangre.",
                        "A stroke happens when part of the brain stops getting blood.",
                    ),
                    (
                        "La mayoría se deben a un coágulo que tapa una arteria; otros a un vaso que se rompe. Cada minuto cuenta porque las células del cerebro mueren sin oxígeno.",
                        "Most are caused by a clot blocking an artery; others by a vessel that bursts. Every minute counts because brain cells die without oxygen.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("ataque isquémico transitorio", "transient ischemic attack"),
                    (
                        "Síntomas de ACV que desaparecen sin daño en la imagen.",
                        "Stroke symptoms that resolve without damage on imaging.",
                    ),
                )],
                ..level(
                    ComplexityLevel::L2,
                    (
                        "Los ACV son isquémicos o hemorrágicos; la tomografía sin contraste los distingue.",
                        "Strokes are ischemic or hemorrhagic; a non-contrast CT tells them apart.",
                    ),
                    (
                        "Los factores de riesgo incluyen hipertensión, fibrilación auricular, diabetes, tabaquismo y colesterol alto.",
                        "Risk factors include hypertension, atrial fibrillation, diabetes, smoking and high cholesterol.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("trombólisis", "thrombolysis"),
                    (
                        "Medicamento que disuelve el coágulo, como la alteplasa.",
                        "Medication that dissolves the clot, such as alteplase.",
                    ),
                )],
                ..level(
                    ComplexityLevel::L3,
                    (
                        "La trombólisis intravenosa dentro de 4.5 horas y la trombectomía mecánica mejoran el resultado del ACV isquémico.",
                        "Intravenous thrombolysis within 4.5 hours and mechanical thrombectomy improve ischemic stroke outcomes.",
                    ),
                    (
                        "Antes de trombolizar se descarta hemorragia y se controla la presión por debajo de 185/110.",
                        "Before thrombolysis, hemorrhage is excluded and blood pressure is brought below 185/110.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("escala NIHSS", "NIH Stroke Scale"),
                    (
                        "Puntuación de 0 a 42 que mide el déficit neurológico.",
                        "A 0 to 42 score measuring neurological deficit.",
                    ),
                )],
                clinical_notes: Some(text(
                    "La trombectomía es eficaz hasta 24 horas en pacientes seleccionados por imagen de perfusión.",
                    "Thrombectomy is effective up to 24 hours in patients selected by perfusion imaging.",
                )),
                ..level(
                    ComplexityLevel::L4,
                    (
                        "La localización del déficit identifica el territorio vascular y la escala NIHSS cuantifica la gravedad.",
                        "The deficit pattern localizes the vascular territory and the NIHSS quantifies severity.",
                    ),
                    (
                        "Oclusión de la arteria cerebral media: hemiparesia y pérdida sensitiva contralateral de cara y brazo, con afasia si es hemisferio dominante.",
                        "Middle cerebral artery occlusion: contralateral face and arm weakness and sensory loss, with aphasia when the dominant hemisphere is involved.",
                    ),
                )
            },
        ]),
        media: Vec::new(),
        citations: vec![citation(
            "ref-1",
            CitationKind::Guideline,
            "Guidelines for the Early Management of Patients With Acute Ischemic Stroke",
            &["Powers WJ", "Rabinstein AA", "et al."],
            "Stroke 2019; 50:e344-e418",
        )],
        cross_references: vec![related(
            "topic-cerebral-circulation",
            ContentType::Topic,
            Relationship::Prerequisite,
            "Circulación cerebral / Cerebral circulation",
        )],
        tags: ContentTags {
            systems: strings(&["nervous", "cardiovascular"]),
            topics: strings(&["neurology", "emergency"]),
            keywords: strings(&["tPA", "alteplase", "thrombectomy", "FAST", "hemiparesis"]),
            clinical_relevance: ClinicalRelevance::Critical,
            exam_relevance: None,
        },
        created_at: date(2026, 1, 20),
        updated_at: date(2026, 2, 5),
        version: 1,
        status: Status::Review,
        contributors: strings(&[CONTENT_TEAM]),
    }
}
