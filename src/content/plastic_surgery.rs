//! Plastic surgery procedure database.

use super::{strings, text};
use crate::domain::{ProcedureSummary, SurgicalCategory};

#[allow(clippy::too_many_arguments)]
fn procedure(
    id: &str,
    name: (&str, &str),
    category: SurgicalCategory,
    description: &str,
    indications: &[&str],
    technique: &[&str],
    complications: &[&str],
    recovery: &str,
    key_pearl: &str,
) -> ProcedureSummary {
    ProcedureSummary {
        id: id.to_string(),
        name: text(name.0, name.1),
        category,
        description: description.to_string(),
        indications: strings(indications),
        technique: strings(technique),
        complications: strings(complications),
        recovery: recovery.to_string(),
        key_pearl: key_pearl.to_string(),
    }
}

pub fn procedures() -> Vec<ProcedureSummary> {
    vec![
        split_thickness_skin_graft(),
        full_thickness_skin_graft(),
        carpal_tunnel_release(),
        le_fort_fixation(),
        escharotomy(),
        microsurgery_principles(),
        abdominoplasty(),
        negative_pressure_wound_therapy(),
        cleft_lip_repair(),
    ]
}

pub fn split_thickness_skin_graft() -> ProcedureSummary {
    procedure(
        "split-thickness-skin-graft",
        ("Injerto de piel de espesor parcial", "Split-Thickness Skin Graft (STSG)"),
        SurgicalCategory::Reconstructive,
        "Harvesting epidermis and partial dermis from a donor site for wound coverage; meshing allows expansion up to 6:1.",
        &["Large surface area wounds", "Burn reconstruction", "Chronic wounds with adequate vascular bed"],
        &["Dermatome set to desired thickness", "Harvest from thigh, buttock, or scalp", "Mesh graft for larger defects", "Bolster or negative-pressure dressing to secure graft"],
        &["Graft loss from hematoma, seroma, shear, or infection", "Donor site pain", "Contracture"],
        "Donor site heals in 10-14 days; graft vascularization over 48-96 hours.",
        "Grafts survive by plasmatic imbibition for 24-48 hours, then inosculation; the wound bed must be vascular and free of hematoma.",
    )
}

pub fn full_thickness_skin_graft() -> ProcedureSummary {
    procedure(
        "full-thickness-skin-graft",
        ("Injerto de piel de espesor total", "Full-Thickness Skin Graft (FTSG)"),
        SurgicalCategory::Reconstructive,
        "Transfer of epidermis and entire dermis; better color match and less contracture than a split-thickness graft.",
        &["Facial defects after skin cancer excision", "Eyelid and nasal tip reconstruction", "Release of hand and finger contractures"],
        &["Template the defect", "Harvest from postauricular, supraclavicular, or groin skin", "Defat the graft completely", "Tie-over bolster dressing"],
        &["Partial graft loss", "Hyperpigmentation"],
        "Bolster removed at 5-7 days; avoid sun on the graft for a year.",
        "Primary contraction is greater and secondary contraction smaller than with split-thickness grafts.",
    )
}

pub fn carpal_tunnel_release() -> ProcedureSummary {
    procedure(
        "carpal-tunnel-release",
        ("Liberación del túnel carpiano", "Carpal Tunnel Release"),
        SurgicalCategory::HandSurgery,
        "Division of the transverse carpal ligament to decompress the median nerve.",
        &["Failed splinting and steroid injection", "Thenar atrophy", "Denervation on electromyography"],
        &["Open or endoscopic approach", "Incise in line with the radial border of the ring finger", "Release the ligament completely under direct vision"],
        &["Pillar pain", "Incomplete release", "Injury to the recurrent motor branch"],
        "Early finger motion; return to light activity in 2 weeks and heavy work in 6 weeks.",
        "Staying ulnar to the thenar crease protects the recurrent motor branch of the median nerve.",
    )
}

pub fn le_fort_fixation() -> ProcedureSummary {
    procedure(
        "le-fort-fixation",
        ("Fijación de fracturas Le Fort", "Le Fort Fracture Fixation"),
        SurgicalCategory::Craniofacial,
        "Open reduction and plate fixation of midface fractures along the vertical buttresses.",
        &["Malocclusion", "Midface mobility", "Displaced midface fractures on CT"],
        &["Restore occlusion with maxillomandibular fixation first", "Plate the nasomaxillary and zygomaticomaxillary buttresses", "Upper buccal sulcus incision"],
        &["Malocclusion", "Infraorbital nerve paresthesia", "Plate exposure"],
        "Soft diet for 6 weeks; oral hygiene with chlorhexidine rinses.",
        "Occlusion is the guide to reduction: set the teeth first and the bones follow.",
    )
}

pub fn escharotomy() -> ProcedureSummary {
    procedure(
        "escharotomy",
        ("Escarotomía", "Escharotomy"),
        SurgicalCategory::Burn,
        "Incision through full-thickness burn eschar to relieve constriction of a limb or the chest.",
        &["Circumferential full-thickness burn of an extremity", "Rising airway pressures with chest wall eschar", "Loss of distal pulses"],
        &["Midaxial incisions through eschar into subcutaneous fat", "Chest escharotomy along anterior axillary lines", "Bedside electrocautery"],
        &["Bleeding", "Incomplete release", "Infection of exposed tissue"],
        "Incisions are incorporated into later excision and grafting.",
        "Eschar is insensate so the procedure can be done at the bedside, but the incision must reach fat to release the constriction.",
    )
}

pub fn microsurgery_principles() -> ProcedureSummary {
    procedure(
        "microsurgery-principles",
        ("Principios de microcirugía", "Microsurgery Principles"),
        SurgicalCategory::Microsurgery,
        "Foundational technique of vessel anastomosis, flap physiology and monitoring that enables free tissue transfer and replantation.",
        &["Free flap reconstruction", "Digital replantation", "Lymphovenous bypass for lymphedema"],
        &["Operating microscope at 6-25x with 8-0 to 11-0 nylon", "Venous coupler for venous anastomosis", "Topical papaverine against vasospasm"],
        &["Venous thrombosis", "Arterial thrombosis", "Pedicle kink or torsion"],
        "Hourly flap checks for 48-72 hours; avoid nicotine and vasoconstrictors.",
        "Venous thrombosis is more common than arterial and presents as a purple, congested flap with brisk dark bleeding.",
    )
}

pub fn abdominoplasty() -> ProcedureSummary {
    procedure(
        "abdominoplasty",
        ("Abdominoplastia", "Abdominoplasty"),
        SurgicalCategory::Cosmetic,
        "Excision of excess lower abdominal skin and fat with plication of the rectus diastasis.",
        &["Skin excess after pregnancy or massive weight loss", "Rectus diastasis"],
        &["Low transverse incision", "Elevate the flap to the costal margins", "Plicate the rectus sheath", "Umbilical transposition"],
        &["Seroma", "Wound dehiscence at the T-junction", "Venous thromboembolism"],
        "Compression garment for 6 weeks; no heavy lifting for 6 weeks.",
        "Seroma is the most common complication; progressive tension sutures reduce dead space.",
    )
}

pub fn negative_pressure_wound_therapy() -> ProcedureSummary {
    procedure(
        "negative-pressure-wound-therapy",
        ("Terapia de presión negativa", "Negative-Pressure Wound Therapy"),
        SurgicalCategory::WoundManagement,
        "Sealed foam dressing connected to continuous or intermittent suction to promote granulation.",
        &["Open abdominal and sternal wounds", "Securing skin grafts", "Chronic wounds after debridement"],
        &["Debride to healthy tissue", "Fill the wound with foam", "Seal with adhesive drape", "Apply -125 mmHg"],
        &["Bleeding over exposed vessels", "Retained foam", "Periwound maceration"],
        "Dressing changes every 48-72 hours until the wound is ready for closure.",
        "Never place the foam directly over exposed vessels or anastomoses.",
    )
}

pub fn cleft_lip_repair() -> ProcedureSummary {
    procedure(
        "cleft-lip-repair",
        ("Reparación de labio leporino", "Cleft Lip Repair"),
        SurgicalCategory::PediatricPlastic,
        "Restoration of the orbicularis oris muscle and lip contour in an infant with a cleft lip.",
        &["Unilateral or bilateral cleft lip"],
        &["Rotation-advancement design", "Repair the orbicularis oris muscle", "Primary nasal correction"],
        &["Wound dehiscence", "Whistle deformity", "Hypertrophic scar"],
        "Arm restraints for 2 weeks; resume feeding right away.",
        "The rule of 10s guides timing: 10 weeks of age, 10 pounds, and hemoglobin of 10.",
    )
}
