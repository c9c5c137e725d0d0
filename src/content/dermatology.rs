//! Dermatology: skin cancer.

use super::{citation, date, level, levels, related, strings, term, text, texts, CONTENT_TEAM};
use crate::domain::{
    CitationKind, ClinicalRelevance, ComplexityLevel, ContentCategory, ContentTags, ContentType,
    EducationalContent, ExamRelevance, LevelContent, Media, MediaKind, Relationship, Status,
};

pub fn entries() -> Vec<EducationalContent> {
    vec![skin_cancer()]
}

pub fn skin_cancer() -> EducationalContent {
    EducationalContent {
        id: "condition-skin-cancer".to_string(),
        content_type: ContentType::Condition,
        category: Some(ContentCategory::PrimaryCare),
        name: text("Cáncer de Piel", "Skin Cancer"),
        alternate_names: strings(&["Cutaneous malignancy", "Melanoma", "Basal cell carcinoma", "Carcinoma basocelular"]),
        levels: levels([
            LevelContent {
                key_terms: vec![
                    term(
                        ("melanocitos", "Melanocytes"),
                        (
                            "Células de la piel que fabrican el pigmento que le da color.",
                            "Skin cells that make the pigment that gives skin its color.",
                        ),
                    ),
                    term(
                        ("lunar", "mole"),
                        (
                            "Mancha oscura formada por un grupo de melanocitos.",
                            "A dark spot made by a cluster of melanocytes.",
                        ),
                    ),
                ],
                analogies: texts(&[(
                    "El sol es como una lija: cada quemadura desgasta un poco más las defensas de la piel.",
                    "The sun is like sandpaper: every burn wears down the skin's defenses a little more.",
                )]),
                patient_counseling_points: texts(&[
                    (
                        "Use protector solar todos los días y evite el sol del mediodía.",
                        "Use sunscreen every day and avoid the midday sun.",
                    ),
                    (
                        "Consulte si un lunar cambia de tamaño, forma o color.",
                        "See a doctor if a mole changes size, shape or color.",
                    ),
                ]),
                ..level(
                    ComplexityLevel::L1,
                    (
                        "El cáncer de piel ocurre cuando células de la piel crecen sin control, casi siempre por daño del sol.",
                        "Skin cancer happens when skin cells grow out of control, usually because of sun damage.",
                    ),
                    (
                        "Hay tres tipos principales. El carcinoma basocelular y el espinocelular son los más comunes y casi siempre se curan. El melanoma es menos común pero más peligroso porque puede extenderse.",
                        "There are three main types. Basal cell and squamous cell carcinoma are the most common and are almost always curable. Melanoma is less common but more dangerous because it can spread.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("regla ABCDE", "ABCDE rule"),
                    (
                        "Asimetría, Bordes, Color, Diámetro y Evolución de un lunar.",
                        "Asymmetry, Border, Color, Diameter and Evolution of a mole.",
                    ),
                )],
                examples: texts(&[(
                    "Un lunar de bordes irregulares que creció en pocos meses debe revisarse.",
                    "A mole with irregular borders that grew over a few months should be checked.",
                )]),
                ..level(
                    ComplexityLevel::L2,
                    (
                        "La regla ABCDE ayuda a reconocer lunares sospechosos de melanoma.",
                        "The ABCDE rule helps recognize moles suspicious for melanoma.",
                    ),
                    (
                        "La radiación ultravioleta daña el ADN de las células de la piel. La piel clara, las quemaduras en la infancia y los antecedentes familiares aumentan el riesgo.",
                        "Ultraviolet radiation damages the DNA of skin cells. Fair skin, childhood sunburns and family history raise the risk.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("índice de Breslow", "Breslow depth"),
                    (
                        "Grosor del melanoma en milímetros; principal factor pronóstico.",
                        "Thickness of a melanoma in millimeters; the main prognostic factor.",
                    ),
                )],
                clinical_notes: Some(text(
                    "Ante sospecha de melanoma se prefiere la biopsia escisional con márgenes estrechos.",
                    "For suspected melanoma, excisional biopsy with narrow margins is preferred.",
                )),
                ..level(
                    ComplexityLevel::L3,
                    (
                        "El diagnóstico es por biopsia; el pronóstico del melanoma depende del índice de Breslow y la ulceración.",
                        "Diagnosis is by biopsy; melanoma prognosis depends on Breslow depth and ulceration.",
                    ),
                    (
                        "El carcinoma basocelular es perlado con telangiectasias. El espinocelular es una placa queratósica que puede ulcerarse. El melanoma cumple criterios ABCDE.",
                        "Basal cell carcinoma is pearly with telangiectasias. Squamous cell carcinoma is a keratotic plaque that may ulcerate. Melanoma meets ABCDE criteria.",
                    ),
                )
            },
        ]),
        media: vec![Media {
            id: "media-abcde".to_string(),
            kind: MediaKind::Diagram,
            filename: "abcde-melanoma.svg".to_string(),
            title: "ABCDE criteria".to_string(),
            description: Some("Side-by-side comparison of benign and suspicious moles".to_string()),
        }],
        citations: vec![citation(
            "ref-1",
            CitationKind::Guideline,
            "NCCN Guidelines: Melanoma: Cutaneous",
            &["National Comprehensive Cancer Network"],
            "NCCN 2025",
        )],
        cross_references: vec![related(
            "condition-melanoma",
            ContentType::Condition,
            Relationship::Child,
            "Melanoma",
        )],
        tags: ContentTags {
            systems: strings(&["integumentary"]),
            topics: strings(&["dermatology", "oncology"]),
            keywords: strings(&["sunscreen", "UV", "biopsy", "basal cell", "squamous cell"]),
            clinical_relevance: ClinicalRelevance::High,
            exam_relevance: Some(ExamRelevance {
                usmle: true,
                nbme: false,
                shelf: strings(&["family-medicine"]),
            }),
        },
        created_at: date(2026, 2, 5),
        updated_at: date(2026, 2, 12),
        version: 2,
        status: Status::Published,
        contributors: strings(&[CONTENT_TEAM]),
    }
}
