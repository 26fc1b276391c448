//! Console command parsing.
//!
//! One line of input becomes one [`AppCommand`]. Parsing is strict about
//! shape (missing arguments are errors) but the values themselves degrade
//! the way the query layer does: an unknown sort keyword simply means
//! "no reorder".

use crate::{AppCommand, AppError, AppResult, TimerAction};

use std::panic::Location;

use error_location::ErrorLocation;

/// Parse one console line into a command.
///
/// Grammar (whitespace-separated):
///
/// ```text
/// browse [sort=<keyword>] [limit=<n>] [<name>[,<name>...]]
/// categories
/// show <recipe-id>
/// cook <recipe-id>
/// step <n>            (steps are numbered from 1)
/// toggle <n>
/// timer start|pause|reset
/// rate <1-5>
/// sub <ingredient>
/// next
/// flip
/// help
/// quit
/// ```
///
/// # Errors
///
/// Returns [`AppError::InvalidCommand`] for unknown keywords, missing or
/// malformed arguments.
#[track_caller]
pub fn parse_command(line: &str) -> AppResult<AppCommand> {
    let mut tokens = line.split_whitespace();

    let Some(keyword) = tokens.next() else {
        return Err(invalid("Empty command"));
    };

    match keyword {
        "browse" | "list" => parse_browse(tokens),
        "categories" => Ok(AppCommand::Categories),
        "show" => Ok(AppCommand::Show {
            recipe_id: parse_u32(tokens.next(), "show needs a recipe id")?,
        }),
        "cook" => Ok(AppCommand::Cook {
            recipe_id: parse_u32(tokens.next(), "cook needs a recipe id")?,
        }),
        "step" => Ok(AppCommand::SelectStep {
            step: parse_step(tokens.next(), "step needs a step number")?,
        }),
        "toggle" | "done" => Ok(AppCommand::ToggleStep {
            step: parse_step(tokens.next(), "toggle needs a step number")?,
        }),
        "timer" => parse_timer(tokens.next()),
        "rate" => Ok(AppCommand::Rate {
            stars: parse_u8(tokens.next(), "rate needs a star count")?,
        }),
        "sub" | "substitute" => {
            let ingredient = tokens.collect::<Vec<_>>().join(" ");
            if ingredient.is_empty() {
                return Err(invalid("sub needs an ingredient name"));
            }
            Ok(AppCommand::Substitute { ingredient })
        }
        "next" => Ok(AppCommand::NextSubstitute),
        "flip" => Ok(AppCommand::FlipSubstitute),
        "help" | "?" => Ok(AppCommand::Help),
        "quit" | "exit" | "q" => Ok(AppCommand::Quit),
        other => Err(invalid(format!("Unknown command: {other}"))),
    }
}

fn parse_browse<'a>(tokens: impl Iterator<Item = &'a str>) -> AppResult<AppCommand> {
    let mut sort = None;
    let mut limit = None;
    let mut filter_words = Vec::new();

    for token in tokens {
        if let Some(keyword) = token.strip_prefix("sort=") {
            sort = Some(keyword.to_string());
        } else if let Some(number) = token.strip_prefix("limit=") {
            limit = Some(number.parse::<usize>().map_err(|e| {
                invalid(format!("Bad limit {number:?}: {e}"))
            })?);
        } else {
            filter_words.push(token);
        }
    }

    // Filter names may contain spaces ("Quick Meals"), so the remaining
    // words are re-joined and split on commas.
    let filters: Vec<String> = if filter_words.is_empty() {
        Vec::new()
    } else {
        filter_words
            .join(" ")
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    };

    Ok(AppCommand::Browse {
        filters,
        sort,
        limit,
    })
}

#[track_caller]
fn parse_timer(action: Option<&str>) -> AppResult<AppCommand> {
    match action {
        Some("start") => Ok(AppCommand::Timer(TimerAction::Start)),
        Some("pause") => Ok(AppCommand::Timer(TimerAction::Pause)),
        Some("reset") => Ok(AppCommand::Timer(TimerAction::Reset)),
        Some(other) => Err(invalid(format!("Unknown timer action: {other}"))),
        None => Err(invalid("timer needs start, pause or reset")),
    }
}

/// Convert a one-based console step number to a zero-based index.
#[track_caller]
fn parse_step(token: Option<&str>, missing: &str) -> AppResult<usize> {
    let number = parse_usize(token, missing)?;
    number
        .checked_sub(1)
        .ok_or_else(|| invalid("Steps are numbered from 1"))
}

#[track_caller]
fn parse_u32(token: Option<&str>, missing: &str) -> AppResult<u32> {
    let token = token.ok_or_else(|| invalid(missing))?;
    token
        .parse()
        .map_err(|e| invalid(format!("Bad number {token:?}: {e}")))
}

#[track_caller]
fn parse_u8(token: Option<&str>, missing: &str) -> AppResult<u8> {
    let token = token.ok_or_else(|| invalid(missing))?;
    token
        .parse()
        .map_err(|e| invalid(format!("Bad number {token:?}: {e}")))
}

#[track_caller]
fn parse_usize(token: Option<&str>, missing: &str) -> AppResult<usize> {
    let token = token.ok_or_else(|| invalid(missing))?;
    token
        .parse()
        .map_err(|e| invalid(format!("Bad number {token:?}: {e}")))
}

#[track_caller]
fn invalid(reason: impl Into<String>) -> AppError {
    AppError::InvalidCommand {
        reason: reason.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
