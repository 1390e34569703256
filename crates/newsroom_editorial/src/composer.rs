//! Prompt composition and the temperature schedule.

use crate::prompts::{
    EDITORIAL_PROFILE, GUIDELINES, PERSONA, STYLE_RULES, VARIANT_INFORMATIVE, VARIANT_NARRATIVE,
    VARIANT_STANDARD, WRITING_TEMPLATE,
};
use newsroom_config::GenerationConfig;
use newsroom_core::{GenerationRequest, PlatformPolicy, ValidationIssue, Variant};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// System and user prompt for one provider call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ComposedPrompt {
    /// Editorial instructions and hard constraints
    system_prompt: String,
    /// Sanitized news fields and the final instruction
    user_prompt: String,
}

/// Builds generation prompts from a request, its platform policy and the
/// failures of the previous attempt.
///
/// # Examples
///
/// ```
/// use newsroom_core::{GenerationRequest, Platform, PlatformPolicyTable, ValidationIssue};
/// use newsroom_editorial::PromptComposer;
///
/// let request = GenerationRequest::builder()
///     .news_title("El Mundial 2026 arranca en junio")
///     .platform(Platform::Twitter)
///     .build()
///     .unwrap();
/// let table = PlatformPolicyTable::editorial_defaults();
/// let policy = table.get(Platform::Twitter).unwrap();
///
/// let first = PromptComposer::default().compose(&request, policy, 1, &[]);
/// assert!(!first.system_prompt().contains("CORRECCIÓN"));
///
/// let retry = PromptComposer::default().compose(
///     &request,
///     policy,
///     2,
///     &[ValidationIssue::TooLong { count: 340, max: 280 }],
/// );
/// assert!(retry.system_prompt().contains("CORRECCIÓN"));
/// assert!(retry.system_prompt().contains("280"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptComposer {
    persona: String,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self {
            persona: PERSONA.to_string(),
        }
    }
}

impl PromptComposer {
    /// Composer with a different opening persona line.
    pub fn with_persona(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
        }
    }

    /// Compose prompts for `attempt_number` (1-based).
    ///
    /// From the second attempt on, `prior_errors` are turned into a correction
    /// block that restates the exact bounds.
    pub fn compose(
        &self,
        request: &GenerationRequest,
        policy: &PlatformPolicy,
        attempt_number: u32,
        prior_errors: &[ValidationIssue],
    ) -> ComposedPrompt {
        ComposedPrompt {
            system_prompt: self.system_prompt(request, policy, attempt_number, prior_errors),
            user_prompt: user_prompt(request),
        }
    }

    fn system_prompt(
        &self,
        request: &GenerationRequest,
        policy: &PlatformPolicy,
        attempt_number: u32,
        prior_errors: &[ValidationIssue],
    ) -> String {
        let platform = request.platform();
        let mut prompt = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(prompt, "{}\n", self.persona);
        let _ = writeln!(prompt, "{}\n", EDITORIAL_PROFILE);
        let _ = writeln!(prompt, "{}\n", STYLE_RULES);
        let _ = writeln!(prompt, "{}\n", WRITING_TEMPLATE);
        let _ = writeln!(prompt, "{}\n", GUIDELINES);

        let _ = writeln!(prompt, "RED: {}", platform.label());
        let _ = writeln!(prompt, "ESPECIFICACIONES:");
        let _ = writeln!(
            prompt,
            "- Longitud: entre {} y {} caracteres",
            policy.char_min(),
            policy.char_max()
        );
        let _ = writeln!(prompt, "- {}", hashtag_rule(policy));
        for directive in policy.tone_directives() {
            let _ = writeln!(prompt, "- {}", directive);
        }

        let _ = writeln!(prompt, "\nVARIANTE A GENERAR:\n{}", variant_instruction(*request.variant()));

        let _ = writeln!(prompt, "\nRESTRICCIONES OBLIGATORIAS:");
        let _ = writeln!(
            prompt,
            "- El post debe tener entre {} y {} caracteres, contando espacios y hashtags",
            policy.char_min(),
            policy.char_max()
        );
        let _ = writeln!(prompt, "- {}", hashtag_rule(policy));
        let _ = writeln!(
            prompt,
            "- Una de las tres últimas líneas debe ser una pregunta abierta o un \"qué observar a partir de ahora\""
        );
        let _ = writeln!(
            prompt,
            "- Sigue la plantilla: gancho → contexto → 3 claves → cierre con pregunta"
        );
        let _ = writeln!(
            prompt,
            "- Mantén \"opinión suave\": interpretación sin polarizar, con matices"
        );
        let _ = writeln!(prompt, "- NO uses fórmulas genéricas de community manager");
        let _ = write!(
            prompt,
            "- Responde solo con el texto del post, sin títulos ni comentarios"
        );

        if attempt_number > 1 {
            let _ = write!(
                prompt,
                "\n\n{}",
                correction_block(policy, attempt_number, prior_errors)
            );
        }
        prompt
    }
}

fn hashtag_rule(policy: &PlatformPolicy) -> String {
    if *policy.hashtag_max() == 0 {
        "Sin hashtags".to_string()
    } else if *policy.hashtag_min() == 0 {
        format!("Como máximo {} hashtags, al final", policy.hashtag_max())
    } else {
        format!(
            "Entre {} y {} hashtags, al final",
            policy.hashtag_min(),
            policy.hashtag_max()
        )
    }
}

fn variant_instruction(variant: Variant) -> &'static str {
    match variant {
        Variant::Standard => VARIANT_STANDARD,
        Variant::Informative => VARIANT_INFORMATIVE,
        Variant::Narrative => VARIANT_NARRATIVE,
    }
}

fn correction_block(policy: &PlatformPolicy, attempt_number: u32, prior_errors: &[ValidationIssue]) -> String {
    let mut block = format!(
        "CORRECCIÓN (intento {}):\nEl borrador anterior no cumplía las reglas. Corrige cada problema:",
        attempt_number
    );
    for issue in prior_errors {
        block.push_str("\n- ");
        block.push_str(&correction_directive(issue));
    }
    block.push_str(&format!(
        "\nLímites exactos: entre {} y {} caracteres; entre {} y {} hashtags.",
        policy.char_min(),
        policy.char_max(),
        policy.hashtag_min(),
        policy.hashtag_max()
    ));
    if attempt_number >= 3 {
        block.push_str(
            "\nÚLTIMO INTENTO: cuenta los caracteres antes de responder y respeta cada límite al pie de la letra.",
        );
    }
    block
}

/// Spanish instruction that fixes one validation issue.
///
/// # Examples
///
/// ```
/// use newsroom_core::ValidationIssue;
/// use newsroom_editorial::correction_directive;
///
/// let text = correction_directive(&ValidationIssue::TooManyHashtags { count: 5, max: 2 });
/// assert!(text.contains("como máximo 2"));
/// ```
pub fn correction_directive(issue: &ValidationIssue) -> String {
    match issue {
        ValidationIssue::TooShort { count, min } => format!(
            "Demasiado corto ({} caracteres): amplía el texto hasta al menos {} caracteres.",
            count, min
        ),
        ValidationIssue::TooLong { count, max } => format!(
            "Demasiado largo ({} caracteres): recorta el texto a un máximo de {} caracteres.",
            count, max
        ),
        ValidationIssue::TooManyHashtags { count, max } => format!(
            "Demasiados hashtags ({}): usa como máximo {}.",
            count, max
        ),
        ValidationIssue::TooFewHashtags { count, min } => format!(
            "Pocos hashtags ({}): incluye al menos {} al final.",
            count, min
        ),
        ValidationIssue::MissingClosing => {
            "Falta el cierre: termina con una pregunta abierta o con qué observar a partir de ahora."
                .to_string()
        }
        ValidationIssue::WeakStructure => {
            "Respeta la estructura: gancho, contexto, 3 claves y cierre.".to_string()
        }
    }
}

fn user_prompt(request: &GenerationRequest) -> String {
    let news = request.news();
    let or = |value: &str, fallback: &str| {
        if value.is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };
    let topics = if news.topics().is_empty() {
        "Ninguno".to_string()
    } else {
        news.topics().join(", ")
    };
    format!(
        "NOTICIA A TRANSFORMAR EN POST:\n\n\
         Titular: \"{}\"\n\n\
         Resumen: {}\n\n\
         Temas relacionados: {}\n\n\
         Fuente: {}\n\
         URL: {}\n\n\
         ---\n\n\
         Genera ahora el post para {} siguiendo todas las directrices editoriales.",
        news.title(),
        or(news.summary(), "No disponible"),
        topics,
        or(news.source(), "No especificada"),
        or(news.url(), "No disponible"),
        request.platform().to_string().to_uppercase(),
    )
}

/// Sampling temperature per attempt: exploratory first, tighter on retries.
///
/// # Examples
///
/// ```
/// use newsroom_editorial::TemperatureSchedule;
///
/// let schedule = TemperatureSchedule::default();
/// assert_eq!(schedule.for_attempt(1), 0.7);
/// assert_eq!(schedule.for_attempt(2), 0.5);
/// assert_eq!(schedule.for_attempt(3), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSchedule {
    initial: f32,
    retry: f32,
}

impl TemperatureSchedule {
    /// Create a schedule.
    pub fn new(initial: f32, retry: f32) -> Self {
        Self { initial, retry }
    }

    /// Temperature for a 1-based attempt number.
    pub fn for_attempt(&self, attempt_number: u32) -> f32 {
        if attempt_number <= 1 {
            self.initial
        } else {
            self.retry
        }
    }
}

impl Default for TemperatureSchedule {
    fn default() -> Self {
        Self::new(0.7, 0.5)
    }
}

impl From<&GenerationConfig> for TemperatureSchedule {
    fn from(config: &GenerationConfig) -> Self {
        Self::new(config.initial_temperature, config.retry_temperature)
    }
}
