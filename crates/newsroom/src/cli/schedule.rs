//! Schedule and calendar commands.

use super::{CliResult, OutputFormat, parse_platforms, print_json, reference_time};
use newsroom::{
    InMemoryCalendarRepository, InputError, InputErrorKind, Newsroom, ScheduleSlot, Theme,
};
use std::sync::Arc;
use tracing::debug;

/// Suggest slots for one topic and put them on a calendar.
pub async fn handle_schedule(
    newsroom: &Newsroom,
    topic: &str,
    platforms: &[String],
    from: Option<&str>,
    format: OutputFormat,
) -> CliResult {
    let platforms = parse_platforms(platforms)?;
    let from = reference_time(from, newsroom)?;
    debug!(%from, "Scheduling from reference time");

    let planner = newsroom.planner(Arc::new(InMemoryCalendarRepository::new()));
    let events = planner.plan_topic(topic, &platforms, from).await?;

    match format {
        OutputFormat::Json => print_json(&events)?,
        OutputFormat::Human => {
            println!("Suggested slots for \"{}\"", topic);
            println!("{:-<80}", "");
            for event in &events {
                println!(
                    "{:<10} {}  {}",
                    event.platform().label(),
                    event.scheduled_at().format("%a %Y-%m-%d %H:%M %:z"),
                    event.notes()
                );
            }
        }
    }
    Ok(())
}

/// Lay out the weekly calendar for several themes.
pub fn handle_calendar(
    newsroom: &Newsroom,
    themes: &[String],
    from: Option<&str>,
    format: OutputFormat,
) -> CliResult {
    let themes = themes
        .iter()
        .map(|raw| parse_theme(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let from = reference_time(from, newsroom)?;
    let calendar = newsroom.schedule().weekly_calendar(&themes, from)?;

    match format {
        OutputFormat::Json => print_json(&calendar)?,
        OutputFormat::Human => {
            for entry in &calendar {
                println!("\n{} ({})", entry.theme().title(), entry.theme().id());
                println!("{:-<80}", "");
                for slot in entry.slots() {
                    print_slot(slot);
                }
            }
        }
    }
    Ok(())
}

fn print_slot(slot: &ScheduleSlot) {
    println!(
        "{:<10} {} {}  {}",
        slot.platform().label(),
        slot.date().format("%a %Y-%m-%d"),
        slot.time(),
        slot.justification()
    );
}

/// `id=title`, or a bare title that doubles as its id.
fn parse_theme(raw: &str) -> Result<Theme, InputError> {
    let (id, title) = raw.split_once('=').unwrap_or((raw, raw));
    let (id, title) = (id.trim(), title.trim());
    if title.is_empty() {
        return Err(InputError::new(InputErrorKind::Other(format!(
            "theme '{}' has no title",
            raw
        ))));
    }
    Ok(Theme::new(id, title))
}
