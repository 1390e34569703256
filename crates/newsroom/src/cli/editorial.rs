//! Validate, check and variants commands.

use super::{CliResult, NewsArgs, OutputFormat, news_fields, parse_platform, print_json};
use newsroom::{
    InputError, InputErrorKind, Newsroom, SuitabilityPolicy, evaluate_character_count,
    variant_catalogue,
};
use serde_json::json;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Validate post text against a platform policy.
pub fn handle_validate(
    newsroom: &Newsroom,
    platform: &str,
    text: Option<String>,
    file: Option<&Path>,
    format: OutputFormat,
) -> CliResult {
    let platform = parse_platform(platform)?;
    let content = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    debug!(%platform, chars = content.chars().count(), "Validating content");

    let result = newsroom.validator().validate(&content, platform)?;
    let policy = newsroom
        .validator()
        .policies()
        .get(platform)
        .ok_or_else(|| InputError::new(InputErrorKind::UnknownPlatform(platform.to_string())))?;
    let badge = evaluate_character_count(&content, policy);

    match format {
        OutputFormat::Json => print_json(&json!({
            "platform": platform,
            "validation": result,
            "characterCount": badge,
        }))?,
        OutputFormat::Human => {
            println!("Platform: {}", platform.label());
            println!("{}", badge.message());
            println!("Hashtags: {}", result.hashtag_count());
            println!("{:-<80}", "");
            if result.is_valid() {
                println!("✓ Valid");
            } else {
                println!("✗ Invalid");
            }
            for error in result.errors() {
                println!("  error: {}", error);
            }
            for warning in result.warnings() {
                println!("  warning: {}", warning);
            }
        }
    }
    Ok(())
}

/// Run the suitability gate on a news item.
pub fn handle_check(newsroom: &Newsroom, news: &NewsArgs, format: OutputFormat) -> CliResult {
    let fields = news_fields(news)?;
    let verdict = newsroom.gate().check(&fields);

    match format {
        OutputFormat::Json => print_json(&verdict)?,
        OutputFormat::Human => {
            if verdict.is_suitable() {
                println!("✓ Suitable for publication");
            } else {
                println!("✗ Not suitable");
                if let Some(reason) = verdict.reason() {
                    println!("  Reason: {}", reason);
                }
                if let Some(suggestion) = verdict.suggestion() {
                    println!("  Suggestion: {}", suggestion);
                }
            }
        }
    }
    Ok(())
}

/// Describe the three tone variants for a platform.
pub fn handle_variants(platform: &str, seed: u64, format: OutputFormat) -> CliResult {
    let platform = parse_platform(platform)?;
    let catalogue = variant_catalogue(platform, seed);

    match format {
        OutputFormat::Json => print_json(&catalogue)?,
        OutputFormat::Human => {
            println!("Variants for {}", platform.label());
            println!("{:-<80}", "");
            for info in &catalogue {
                let marker = if *info.is_recommended() { " (recommended)" } else { "" };
                println!("{}{}", info.name(), marker);
                println!("  {}", info.description());
                println!("  Closing idea: {}", info.alternative_closing_question());
            }
        }
    }
    Ok(())
}
