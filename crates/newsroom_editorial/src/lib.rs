//! Editorial rules for newsroom post generation.
//!
//! Everything here is deterministic and synchronous:
//!
//! - [`ContentValidator`] judges a post against its platform policy
//! - [`KeywordSuitabilityGate`] refuses rumors and unconfirmed transfer or
//!   injury news before any generation attempt
//! - [`PromptComposer`] turns a request, a policy and the previous failures
//!   into system and user prompts; [`TemperatureSchedule`] sits next to it
//! - [`variant_info`] and [`evaluate_character_count`] feed the editor UI

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod char_count;
mod composer;
mod gate;
mod prompts;
mod validator;
mod variants;

pub use char_count::{CharCountStatus, CharacterCountEvaluation, evaluate_character_count};
pub use composer::{ComposedPrompt, PromptComposer, TemperatureSchedule, correction_directive};
pub use gate::KeywordSuitabilityGate;
pub use validator::{ContentValidator, DEFAULT_CLOSING_PHRASES};
pub use variants::{
    VariantInfo, alternative_closing_questions, recommended_variant, variant_catalogue,
    variant_info,
};
