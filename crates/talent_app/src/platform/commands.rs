//! Maps typed lines onto messages.

use talent_core::{FilterCriteria, Msg, Persona, ViewMode, WORK_MODE_OPTIONS};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Feed these messages to `update`, in order.
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    /// Blank line.
    Nothing,
    /// The line could not be understood; the text explains why.
    Invalid(String),
}

/// Parses one input line. Plain text replaces the query and searches;
/// lines starting with `:` are commands.
///
/// `filters` is needed to turn `:mode NAME` into a toggle.
pub fn parse(line: &str, filters: &FilterCriteria) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Nothing;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Command::Dispatch(vec![
            Msg::QueryChanged(line.to_string()),
            Msg::SearchSubmitted,
        ]);
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = words.collect();
    let single = |msg: Msg| Command::Dispatch(vec![msg]);

    match (name.as_str(), args.as_slice()) {
        ("jobs", []) => single(Msg::PersonaSelected(Persona::Jobseeker)),
        ("talent", []) => single(Msg::PersonaSelected(Persona::Employer)),
        ("map", []) => single(Msg::ViewModeSelected(ViewMode::Map)),
        ("list", []) => single(Msg::ViewModeSelected(ViewMode::List)),
        ("filters", []) => single(Msg::FiltersToggled),
        ("close", []) => single(Msg::SelectionCleared),
        ("ok", []) => single(Msg::NotificationDismissed),
        ("help", []) => Command::Help,
        ("quit" | "q", []) => Command::Quit,
        ("distance", [km]) => match km.parse::<i64>() {
            Ok(km) => single(Msg::MaxDistanceChanged(km)),
            Err(_) => invalid(format!("distance must be a whole number of km, got '{km}'")),
        },
        ("rating", [rating]) => match rating.parse::<f64>() {
            Ok(rating) if rating.is_finite() => single(Msg::MinRatingChanged(rating)),
            _ => invalid(format!("rating must be a number between 0 and 5, got '{rating}'")),
        },
        ("salary", [min, max]) => match (min.parse::<u64>(), max.parse::<u64>()) {
            (Ok(min), Ok(max)) => single(Msg::SalaryRangeChanged { min, max }),
            _ => invalid(format!("salary needs two whole numbers, got '{min} {max}'")),
        },
        ("mode", [mode]) => match work_mode_option(mode) {
            Some(option) => single(Msg::WorkModeToggled {
                mode: option.to_string(),
                enabled: !filters.work_modes().contains(option),
            }),
            None => invalid(format!(
                "unknown work mode '{mode}', choose one of {}",
                WORK_MODE_OPTIONS.join(", ")
            )),
        },
        ("select", [n]) => match n.parse::<usize>() {
            Ok(n) if n > 0 => single(Msg::ItemSelected { index: n - 1 }),
            _ => invalid(format!("select needs an item number from 1, got '{n}'")),
        },
        _ => invalid(format!("unknown command ':{command}', type :help")),
    }
}

/// Checks whether `msgs` may run against the current screen.
///
/// An open notification must be dismissed before anything else happens, and
/// a search cannot start while the previous one is still running.
pub fn admit(
    msgs: &[Msg],
    notification_open: bool,
    search_enabled: bool,
) -> Result<(), &'static str> {
    let dismisses = msgs.iter().all(|msg| *msg == Msg::NotificationDismissed);
    if notification_open && !dismisses {
        return Err("Dismiss the notification with :ok first.");
    }
    if !search_enabled && msgs.contains(&Msg::SearchSubmitted) {
        return Err("Still searching, please wait.");
    }
    Ok(())
}

fn work_mode_option(name: &str) -> Option<&'static str> {
    WORK_MODE_OPTIONS
        .iter()
        .copied()
        .find(|option| option.eq_ignore_ascii_case(name))
}

fn invalid(reason: String) -> Command {
    Command::Invalid(reason)
}
