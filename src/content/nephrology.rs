//! Nephrology: acute kidney injury and chronic kidney disease.

use super::{citation, date, levels, level, related, strings, term, text, texts, CONTENT_TEAM};
use crate::domain::{
    CitationKind, ClinicalRelevance, ComplexityLevel, ContentCategory, ContentTags, ContentType,
    EducationalContent, ExamRelevance, LevelContent, Relationship, Status,
};

pub fn entries() -> Vec<EducationalContent> {
    vec![acute_kidney_injury(), chronic_kidney_disease()]
}

pub fn acute_kidney_injury() -> EducationalContent {
    EducationalContent {
        id: "condition-acute-kidney-injury".to_string(),
        content_type: ContentType::Condition,
        category: Some(ContentCategory::Medical),
        name: text("Lesión Renal Aguda", "Acute Kidney Injury"),
        alternate_names: strings(&["AKI", "LRA", "Acute Renal Failure", "Insuficiencia Renal Aguda"]),
        levels: levels([
            LevelContent {
                key_terms: vec![
                    term(
                        ("lesión renal aguda", "acute kidney injury"),
                        (
                            "Cuando los riñones dejan de funcionar bien de forma repentina.",
                            "When the kidneys suddenly stop working well.",
                        ),
                    ),
                    term(
                        ("deshidratación", "dehydration"),
                        (
                            "Falta de agua en el cuerpo que reduce la sangre que llega a los riñones.",
                            "Not enough water in the body, reducing blood flow to the kidneys.",
                        ),
                    ),
                ],
                analogies: texts(&[(
                    "Los riñones son como un filtro de café: la LRA es cuando el filtro se tapa o se rompe de repente.",
                    "The kidneys are like a coffee filter: AKI is when the filter suddenly clogs or breaks.",
                )]),
                examples: texts(&[(
                    "Una persona con vómitos y diarrea durante días sin beber agua puede desarrollar LRA.",
                    "A person with days of vomiting and diarrhea who cannot drink may develop AKI.",
                )]),
                patient_counseling_points: texts(&[
                    (
                        "Beba suficiente agua cuando esté enfermo con vómitos o diarrea.",
                        "Drink plenty of water when sick with vomiting or diarrhea.",
                    ),
                    (
                        "No tome ibuprofeno ni naproxeno sin consultar si tiene problemas renales.",
                        "Do not take ibuprofen or naproxen without asking if you have kidney problems.",
                    ),
                ]),
                ..level(
                    ComplexityLevel::L1,
                    (
                        "La lesión renal aguda ocurre cuando los riñones dejan de funcionar de forma repentina, en horas o días.",
                        "Acute kidney injury happens when the kidneys suddenly stop working properly, over hours or days.",
                    ),
                    (
                        "Los riñones filtran los desechos de la sangre. En la LRA algo reduce la sangre que llega, daña el filtro o bloquea la salida de orina, y los desechos se acumulan. Con tratamiento rápido los riñones suelen recuperarse.",
                        "The kidneys filter waste from the blood. In AKI something reduces the blood reaching them, damages the filter, or blocks urine outflow, and waste builds up. With quick treatment the kidneys often recover.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![
                    term(
                        ("creatinina", "creatinine"),
                        (
                            "Desecho del músculo que los riñones eliminan; sube cuando filtran menos.",
                            "A muscle waste product cleared by the kidneys; it rises when filtration falls.",
                        ),
                    ),
                    term(
                        ("oliguria", "oliguria"),
                        (
                            "Producción de muy poca orina.",
                            "Producing very little urine.",
                        ),
                    ),
                ],
                ..level(
                    ComplexityLevel::L2,
                    (
                        "La LRA se reconoce por el aumento de la creatinina en sangre o la disminución de la orina.",
                        "AKI is recognized by a rise in blood creatinine or a drop in urine output.",
                    ),
                    (
                        "Las causas se agrupan en tres: poca sangre a los riñones (pre-renal), daño del propio riñón (intrínseca) y bloqueo de la orina (post-renal).",
                        "Causes fall into three groups: too little blood reaching the kidneys (pre-renal), damage to the kidney itself (intrinsic), and blocked urine flow (post-renal).",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("necrosis tubular aguda", "acute tubular necrosis"),
                    (
                        "Muerte de las células de los túbulos renales por isquemia o tóxicos.",
                        "Death of renal tubular cells from ischemia or toxins.",
                    ),
                )],
                ..level(
                    ComplexityLevel::L3,
                    (
                        "El abordaje incluye análisis de orina, ecografía renal y electrolitos urinarios para separar causas pre-renales, intrínsecas y post-renales.",
                        "The workup includes urinalysis, renal ultrasound and urine electrolytes to separate pre-renal, intrinsic and post-renal causes.",
                    ),
                    (
                        "Una relación BUN/creatinina mayor de 20 sugiere causa pre-renal. Los cilindros granulosos pardos sugieren necrosis tubular aguda. La hidronefrosis en ecografía apunta a obstrucción.",
                        "A BUN/creatinine ratio above 20 suggests a pre-renal cause. Muddy brown granular casts suggest acute tubular necrosis. Hydronephrosis on ultrasound points to obstruction.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![
                    term(
                        ("FENa", "FENa"),
                        (
                            "Fracción excretada de sodio; menor de 1% sugiere causa pre-renal.",
                            "Fractional excretion of sodium; below 1% suggests a pre-renal cause.",
                        ),
                    ),
                    term(
                        ("estadificación KDIGO", "KDIGO staging"),
                        (
                            "Clasificación de la gravedad de la LRA por creatinina y gasto urinario.",
                            "Severity grading of AKI by creatinine and urine output.",
                        ),
                    ),
                ],
                clinical_notes: Some(text(
                    "La FENa no es confiable con diuréticos; use la fracción excretada de urea.",
                    "FENa is unreliable on diuretics; use fractional excretion of urea instead.",
                )),
                ..level(
                    ComplexityLevel::L4,
                    (
                        "La estadificación KDIGO estratifica la gravedad; la FENa y los estudios urinarios guían el diagnóstico diferencial.",
                        "KDIGO staging stratifies severity; FENa and urine studies guide the differential diagnosis.",
                    ),
                    (
                        "Etapa 1: creatinina 1.5 a 1.9 veces la basal o aumento de 0.3 mg/dL en 48 horas. Etapa 3: tres veces la basal, creatinina de 4 mg/dL o inicio de terapia de reemplazo renal.",
                        "Stage 1: creatinine 1.5 to 1.9 times baseline or a 0.3 mg/dL rise within 48 hours. Stage 3: three times baseline, creatinine of 4 mg/dL, or initiation of renal replacement therapy.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("biomarcadores de daño tubular", "tubular injury biomarkers"),
                    (
                        "Moléculas como NGAL y KIM-1 que se elevan antes que la creatinina.",
                        "Molecules such as NGAL and KIM-1 that rise before creatinine does.",
                    ),
                )],
                clinical_notes: Some(text(
                    "STARRT-AKI no mostró beneficio del inicio acelerado de la terapia de reemplazo renal.",
                    "STARRT-AKI showed no benefit from accelerated initiation of renal replacement therapy.",
                )),
                ..level(
                    ComplexityLevel::L5,
                    (
                        "La LRA involucra mecanismos de lesión y reparación tubular, biomarcadores más allá de la creatinina y la transición de LRA a ERC.",
                        "AKI involves tubular injury and repair mechanisms, biomarkers beyond creatinine, and the AKI-to-CKD transition.",
                    ),
                    (
                        "La reparación desadaptativa con arresto del ciclo celular en G2/M favorece la fibrosis. TIMP-2 por IGFBP7 mayor de 0.3 identifica riesgo de LRA moderada a grave en 12 horas.",
                        "Maladaptive repair with G2/M cell-cycle arrest drives fibrosis. TIMP-2 times IGFBP7 above 0.3 identifies risk of moderate to severe AKI within 12 hours.",
                    ),
                )
            },
        ]),
        media: Vec::new(),
        citations: vec![
            citation(
                "ref-1",
                CitationKind::Guideline,
                "KDIGO Clinical Practice Guideline for Acute Kidney Injury",
                &["KDIGO AKI Work Group"],
                "Kidney International Supplements 2012; 2:1-138",
            ),
            citation(
                "ref-2",
                CitationKind::Article,
                "Timing of Initiation of Renal-Replacement Therapy in Acute Kidney Injury",
                &["STARRT-AKI Investigators"],
                "New England Journal of Medicine 2020; 383:240-251",
            ),
        ],
        cross_references: vec![
            related(
                "condition-chronic-kidney-disease",
                ContentType::Condition,
                Relationship::Related,
                "Transición LRA a ERC / AKI-to-CKD transition",
            ),
            related(
                "procedure-dialysis",
                ContentType::Procedure,
                Relationship::SeeAlso,
                "Diálisis para LRA grave / Dialysis for severe AKI",
            ),
        ],
        tags: ContentTags {
            systems: strings(&["renal"]),
            topics: strings(&["nephrology"]),
            keywords: strings(&[
                "creatinine", "creatinina", "KDIGO", "ATN", "NTA", "nephrotoxins", "rhabdomyolysis",
            ]),
            clinical_relevance: ClinicalRelevance::High,
            exam_relevance: Some(ExamRelevance {
                usmle: true,
                nbme: true,
                shelf: strings(&["internal-medicine"]),
            }),
        },
        created_at: date(2026, 2, 5),
        updated_at: date(2026, 2, 5),
        version: 1,
        status: Status::Published,
        contributors: strings(&[CONTENT_TEAM]),
    }
}

pub fn chronic_kidney_disease() -> EducationalContent {
    EducationalContent {
        id: "condition-chronic-kidney-disease".to_string(),
        content_type: ContentType::Condition,
        category: Some(ContentCategory::Medical),
        name: text("Enfermedad Renal Crónica", "Chronic Kidney Disease"),
        alternate_names: strings(&["CKD", "ERC", "Chronic Renal Failure"]),
        levels: levels([
            LevelContent {
                key_terms: vec![term(
                    ("riñones", "kidneys"),
                    (
                        "Dos órganos que limpian la sangre y forman la orina.",
                        "Two organs that clean the blood and make urine.",
                    ),
                )],
                patient_counseling_points: texts(&[(
                    "Controlar la presión y el azúcar protege sus riñones.",
                    "Controlling blood pressure and blood sugar protects your kidneys.",
                )]),
                ..level(
                    ComplexityLevel::L1,
                    (
                        "La enfermedad renal crónica es un daño lento de los riñones que dura meses o años.",
                        "Chronic kidney disease is slow damage to the kidneys that lasts months or years.",
                    ),
                    (
                        "La diabetes y la presión alta son las causas más comunes. Al principio no da síntomas, por eso los análisis de sangre y orina son importantes.",
                        "Diabetes and high blood pressure are the most common causes. Early on it causes no symptoms, which is why blood and urine tests matter.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("tasa de filtración glomerular", "glomerular filtration rate"),
                    (
                        "Cuánta sangre filtran los riñones por minuto.",
                        "How much blood the kidneys filter each minute.",
                    ),
                )],
                ..level(
                    ComplexityLevel::L2,
                    (
                        "La ERC se define por una filtración glomerular menor de 60 o por daño renal durante más de tres meses.",
                        "CKD is defined by a glomerular filtration rate below 60 or kidney damage lasting more than three months.",
                    ),
                    (
                        "Se clasifica en cinco etapas según la filtración y por la cantidad de albúmina en la orina.",
                        "It is staged in five stages by filtration rate and graded by the amount of albumin in the urine.",
                    ),
                )
            },
            LevelContent {
                key_terms: vec![term(
                    ("albuminuria", "albuminuria"),
                    (
                        "Albúmina en la orina; marcador de daño glomerular.",
                        "Albumin in the urine; a marker of glomerular damage.",
                    ),
                )],
                clinical_notes: Some(text(
                    "Los inhibidores de SGLT2 reducen la progresión con o sin diabetes.",
                    "SGLT2 inhibitors slow progression with or without diabetes.",
                )),
                ..level(
                    ComplexityLevel::L3,
                    (
                        "El manejo busca frenar la progresión con control de presión, bloqueo del sistema renina-angiotensina e inhibidores de SGLT2.",
                        "Management aims to slow progression with blood pressure control, renin-angiotensin blockade and SGLT2 inhibitors.",
                    ),
                    (
                        "Las complicaciones incluyen anemia, acidosis metabólica, hiperpotasemia y alteraciones del metabolismo mineral y óseo.",
                        "Complications include anemia, metabolic acidosis, hyperkalemia and mineral and bone disorders.",
                    ),
                )
            },
        ]),
        media: Vec::new(),
        citations: vec![citation(
            "ref-1",
            CitationKind::Guideline,
            "KDIGO 2024 Clinical Practice Guideline for the Evaluation and Management of Chronic Kidney Disease",
            &["KDIGO CKD Work Group"],
            "Kidney International 2024; 105(4S):S117-S314",
        )],
        cross_references: vec![related(
            "condition-acute-kidney-injury",
            ContentType::Condition,
            Relationship::Related,
            "Lesión renal aguda / Acute kidney injury",
        )],
        tags: ContentTags {
            systems: strings(&["renal"]),
            topics: strings(&["nephrology"]),
            keywords: strings(&["eGFR", "TFG", "albuminuria", "SGLT2"]),
            clinical_relevance: ClinicalRelevance::High,
            exam_relevance: None,
        },
        created_at: date(2026, 2, 5),
        updated_at: date(2026, 2, 5),
        version: 1,
        status: Status::Published,
        contributors: strings(&[CONTENT_TEAM]),
    }
}
