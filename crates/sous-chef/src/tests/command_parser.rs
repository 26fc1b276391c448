use crate::{AppCommand, AppError, TimerAction, command_parser::parse_command};

/// WHAT: A bare browse parses with no filters and no overrides
/// WHY: Defaults come from config, not the parser
#[test]
#[allow(clippy::unwrap_used)]
fn given_bare_browse_when_parsing_then_empty_filters_and_defaults() {
    // Given/When: Parsing "browse"
    let command = parse_command("browse").unwrap();

    // Then: No filters, sort or limit
    assert_eq!(
        command,
        AppCommand::Browse {
            filters: Vec::new(),
            sort: None,
            limit: None
        }
    );
}

/// WHAT: Browse accepts sort, limit and comma-separated filters with spaces
/// WHY: Category names like "Quick Meals" span console tokens
#[test]
#[allow(clippy::unwrap_used)]
fn given_full_browse_when_parsing_then_all_clauses_extracted() {
    // Given/When: Parsing a fully loaded browse line
    let command = parse_command("browse sort=time limit=3 Quick Meals,Italian").unwrap();

    // Then: Every clause lands in its slot
    assert_eq!(
        command,
        AppCommand::Browse {
            filters: vec!["Quick Meals".to_string(), "Italian".to_string()],
            sort: Some("time".to_string()),
            limit: Some(3)
        }
    );
}

/// WHAT: A malformed browse limit is rejected
/// WHY: Bad numbers should fail loudly instead of browsing everything
#[test]
fn given_bad_limit_when_parsing_browse_then_invalid_command_error() {
    // Given/When: Parsing a browse with a non-numeric limit
    let result = parse_command("browse limit=lots");

    // Then: The line is rejected
    assert!(matches!(result, Err(AppError::InvalidCommand { .. })));
}

/// WHAT: Step numbers are one-based on the console, zero-based inside
/// WHY: Cooks count steps from 1; the tracker indexes from 0
#[test]
#[allow(clippy::unwrap_used)]
fn given_step_commands_when_parsing_then_one_based_converted() {
    // Given/When: Parsing step and toggle commands
    let select = parse_command("step 2").unwrap();
    let toggle = parse_command("toggle 1").unwrap();

    // Then: Indices are shifted down by one, and step 0 is rejected
    assert_eq!(select, AppCommand::SelectStep { step: 1 });
    assert_eq!(toggle, AppCommand::ToggleStep { step: 0 });
    assert!(matches!(
        parse_command("step 0"),
        Err(AppError::InvalidCommand { .. })
    ));
}

/// WHAT: Timer subcommands map to their actions
/// WHY: Every countdown transition is reachable from the console
#[test]
#[allow(clippy::unwrap_used)]
fn given_timer_commands_when_parsing_then_actions_mapped() {
    // Given/When/Then: All three actions parse, unknown ones do not
    assert_eq!(
        parse_command("timer start").unwrap(),
        AppCommand::Timer(TimerAction::Start)
    );
    assert_eq!(
        parse_command("timer pause").unwrap(),
        AppCommand::Timer(TimerAction::Pause)
    );
    assert_eq!(
        parse_command("timer reset").unwrap(),
        AppCommand::Timer(TimerAction::Reset)
    );
    assert!(matches!(
        parse_command("timer faster"),
        Err(AppError::InvalidCommand { .. })
    ));
}

/// WHAT: Substitution lookups keep multi-word ingredient names intact
/// WHY: "sun-dried tomatoes" must arrive as one ingredient
#[test]
#[allow(clippy::unwrap_used)]
fn given_multi_word_ingredient_when_parsing_sub_then_name_joined() {
    // Given/When: Parsing a lookup for a two-word ingredient
    let command = parse_command("sub sun-dried tomatoes").unwrap();

    // Then: The words are joined back into one name
    assert_eq!(
        command,
        AppCommand::Substitute {
            ingredient: "sun-dried tomatoes".to_string()
        }
    );

    // And: A bare "sub" is rejected
    assert!(matches!(
        parse_command("sub"),
        Err(AppError::InvalidCommand { .. })
    ));
}

/// WHAT: Unknown keywords are rejected
/// WHY: Typos should produce a hint, not silence
#[test]
fn given_unknown_keyword_when_parsing_then_invalid_command_error() {
    // Given/When: Parsing an unknown keyword
    let result = parse_command("bake 3");

    // Then: The line is rejected
    assert!(matches!(result, Err(AppError::InvalidCommand { .. })));
}

/// WHAT: Quit has several console spellings
/// WHY: quit, exit and q all end the session
#[test]
#[allow(clippy::unwrap_used)]
fn given_quit_spellings_when_parsing_then_all_map_to_quit() {
    // Given/When/Then: All spellings parse to Quit
    assert_eq!(parse_command("quit").unwrap(), AppCommand::Quit);
    assert_eq!(parse_command("exit").unwrap(), AppCommand::Quit);
    assert_eq!(parse_command("q").unwrap(), AppCommand::Quit);
}
