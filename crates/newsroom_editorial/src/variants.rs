//! Variant catalogue shown to editors.

use newsroom_core::{Platform, Variant};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Presentation data for one variant on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    /// The variant
    variant: Variant,
    /// Short label ("V1 Estándar", ...)
    name: String,
    /// What the variant emphasises
    description: String,
    /// Whether this is the platform's recommended variant
    is_recommended: bool,
    /// A closing question the editor can swap in
    alternative_closing_question: String,
}

/// Recommended variant per platform.
pub fn recommended_variant(platform: Platform) -> Variant {
    match platform {
        Platform::LinkedIn => Variant::Standard,
        Platform::Twitter | Platform::Instagram | Platform::Facebook => Variant::Narrative,
    }
}

/// Closing questions an editor may use instead of the generated one.
pub fn alternative_closing_questions(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::LinkedIn => &[
            "¿Qué opináis desde vuestra experiencia profesional?",
            "¿Cómo lo veis desde vuestro sector?",
            "¿Qué aprendizaje extraéis de esto?",
        ],
        Platform::Twitter => &[
            "¿Vosotros qué pensáis?",
            "¿Lo veis igual?",
            "¿Qué momento os viene a la memoria?",
        ],
        Platform::Instagram => &[
            "¿Cuál es vuestro favorito?",
            "¿Qué recuerdos os trae?",
            "¿Con quién lo compartís?",
        ],
        Platform::Facebook => &[
            "¿Qué os parece?",
            "¿Con quién lo veríais?",
            "¿Cuál es vuestro recuerdo favorito?",
        ],
    }
}

fn label(variant: Variant) -> (&'static str, &'static str) {
    match variant {
        Variant::Standard => (
            "V1 Estándar",
            "Equilibrada: gancho + contexto + claves + cierre",
        ),
        Variant::Informative => (
            "V2 Informativa",
            "Más datos y contexto: cifras, fechas, hechos verificables",
        ),
        Variant::Narrative => (
            "V3 Humana",
            "Más storytelling y emoción contenida, sin perder rigor",
        ),
    }
}

/// Variant description for a platform.
///
/// The alternative closing question is picked by `seed`, so the same seed
/// always yields the same question.
///
/// # Examples
///
/// ```
/// use newsroom_core::{Platform, Variant};
/// use newsroom_editorial::variant_info;
///
/// let info = variant_info(Variant::Standard, Platform::LinkedIn, 7);
/// assert_eq!(info.name(), "V1 Estándar");
/// assert!(*info.is_recommended());
/// assert_eq!(info, variant_info(Variant::Standard, Platform::LinkedIn, 7));
/// ```
pub fn variant_info(variant: Variant, platform: Platform, seed: u64) -> VariantInfo {
    let (name, description) = label(variant);
    let questions = alternative_closing_questions(platform);
    let offset = u64::from(variant.number()) - 1;
    let index = (seed.wrapping_add(offset) % questions.len() as u64) as usize;
    VariantInfo {
        variant,
        name: name.to_string(),
        description: description.to_string(),
        is_recommended: variant == recommended_variant(platform),
        alternative_closing_question: questions[index].to_string(),
    }
}

/// All three variants for a platform.
pub fn variant_catalogue(platform: Platform, seed: u64) -> Vec<VariantInfo> {
    Variant::iter()
        .map(|variant| variant_info(variant, platform, seed))
        .collect()
}
