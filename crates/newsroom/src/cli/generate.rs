//! Generate, batch and request commands.

use super::{
    CliResult, NewsArgs, OutputFormat, news_fields, parse_platform, parse_platforms, print_json,
};
use newsroom::{
    BatchOutcome, BatchResult, GeneratePostResponse, GenerationOutcome, GenerationReport,
    GenerationRequest, InMemoryDraftRepository, Newsroom, NotSuitableResponse, ResponseBody,
    SuitabilityVerdict, Variant,
};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Generate one post through the gateway.
pub async fn handle_generate(
    newsroom: &Newsroom,
    news: &NewsArgs,
    platform: &str,
    variant: i64,
    format: OutputFormat,
) -> CliResult {
    let request = GenerationRequest::new(
        news_fields(news)?,
        parse_platform(platform)?,
        Variant::try_from(variant)?,
    );
    let orchestrator = newsroom.orchestrator(newsroom.gateway()?);
    let outcome = orchestrator.generate(&request).await?;

    match (format, &outcome) {
        (OutputFormat::Json, GenerationOutcome::Drafted(report)) => {
            print_json(&GeneratePostResponse::new(&request, report))?
        }
        (OutputFormat::Json, GenerationOutcome::Rejected(verdict)) => {
            print_json(&NotSuitableResponse::from(verdict))?
        }
        (OutputFormat::Human, GenerationOutcome::Drafted(report)) => print_report(report),
        (OutputFormat::Human, GenerationOutcome::Rejected(verdict)) => print_rejection(verdict),
    }
    Ok(())
}

/// Generate every platform and variant combination for one news item.
pub async fn handle_batch(
    newsroom: &Newsroom,
    news: &NewsArgs,
    platforms: &[String],
    variants: &[i64],
    format: OutputFormat,
) -> CliResult {
    let fields = news_fields(news)?;
    let platforms = parse_platforms(platforms)?;
    let variants = variants
        .iter()
        .map(|&n| Variant::try_from(n))
        .collect::<Result<Vec<_>, _>>()?;
    let targets: Vec<_> = platforms
        .iter()
        .flat_map(|&platform| variants.iter().map(move |&variant| (platform, variant)))
        .collect();
    info!(targets = targets.len(), "Starting batch");

    let orchestrator = newsroom.orchestrator(newsroom.gateway()?);
    let outcome = orchestrator.generate_batch(&fields, &targets).await;

    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Human => match &outcome {
            BatchOutcome::Rejected(verdict) => print_rejection(verdict),
            BatchOutcome::Drafted { entries } => {
                for entry in entries {
                    println!("\n[{} / {}]", entry.platform().label(), entry.variant());
                    match entry.result() {
                        BatchResult::Drafted(report) => print_report(report),
                        BatchResult::Failed { code, message } => {
                            println!("✗ Failed ({}): {}", code, message)
                        }
                    }
                }
            }
        },
    }
    Ok(())
}

/// Run a raw request body through authentication, parsing and generation.
pub async fn handle_request(
    newsroom: &Newsroom,
    body: &Path,
    authorization: Option<&str>,
    format: OutputFormat,
) -> CliResult {
    let raw = if body == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(body)?
    };

    let service = newsroom
        .service(newsroom.gateway()?, newsroom.authenticator()?)
        .with_drafts(Arc::new(InMemoryDraftRepository::new()));
    let response = service.handle(authorization, &raw).await;

    match format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Human => {
            println!("Status: {}", response.status);
            println!("{:-<80}", "");
            match &response.body {
                ResponseBody::Post(post) => {
                    println!("{}", post.content);
                    println!("{:-<80}", "");
                    println!(
                        "{} chars, {} hashtags, {} attempt(s), valid: {}",
                        post.metadata.char_count,
                        post.metadata.hashtag_count,
                        post.metadata.attempts_needed,
                        post.metadata.is_valid
                    );
                }
                ResponseBody::NotSuitable(refusal) => {
                    println!("✗ {}", refusal.reason);
                    println!("  {}", refusal.suggestion);
                }
                ResponseBody::Error(error) => println!("✗ {} ({})", error.error, error.code),
            }
        }
    }
    Ok(())
}

fn print_report(report: &GenerationReport) {
    println!("{}", report.content());
    println!("{:-<80}", "");
    let validation = report.validation();
    println!(
        "{} chars, {} hashtags, {} attempt(s)",
        validation.char_count(),
        validation.hashtag_count(),
        report.attempts()
    );
    if *report.accepted() {
        println!("✓ Passed validation");
    } else {
        println!("✗ Best effort after {} attempts", report.attempts());
        for error in validation.errors() {
            println!("  error: {}", error);
        }
    }
    for warning in validation.warnings() {
        println!("  warning: {}", warning);
    }
}

fn print_rejection(verdict: &SuitabilityVerdict) {
    println!("✗ Not suitable");
    if let Some(reason) = verdict.reason() {
        println!("  Reason: {}", reason);
    }
    if let Some(suggestion) = verdict.suggestion() {
        println!("  Suggestion: {}", suggestion);
    }
}
