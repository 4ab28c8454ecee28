use serde::{Deserialize, Serialize};

/// Bookable times of day, in display order.
pub const AVAILABLE_TIMES: [&str; 6] = ["17:00", "18:00", "19:00", "20:00", "21:00", "22:00"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TimesAction {
    #[serde(rename = "UPDATE_TIMES")]
    UpdateTimes {
        #[serde(default)]
        date: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl TimesAction {
    pub fn update(date: impl Into<String>) -> Self {
        TimesAction::UpdateTimes {
            date: Some(date.into()),
        }
    }
}

pub fn initialize_times() -> Vec<String> {
    AVAILABLE_TIMES.iter().map(|t| t.to_string()).collect()
}

/// Reducer for the time-slot list. The selected date does not narrow
/// availability: every update yields the full list.
pub fn update_times(state: &[String], action: &TimesAction) -> Vec<String> {
    match action {
        TimesAction::UpdateTimes { date } => {
            tracing::debug!(date = ?date, "refreshing available times");
            initialize_times()
        }
        TimesAction::Other => state.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initialize_times() {
        assert_eq!(
            initialize_times(),
            vec!["17:00", "18:00", "19:00", "20:00", "21:00", "22:00"]
        );
    }

    #[test]
    fn test_other_action_keeps_state() {
        let state = vec!["12:00".to_string()];
        assert_eq!(update_times(&state, &TimesAction::Other), state);
    }

    #[test]
    fn test_update_replaces_custom_state() {
        let state = vec!["12:00".to_string()];
        assert_eq!(
            update_times(&state, &TimesAction::update("2024-06-01")),
            initialize_times()
        );
    }

    #[test]
    fn test_update_without_date() {
        let action: TimesAction = serde_json::from_str(r#"{"type":"UPDATE_TIMES"}"#).unwrap();
        assert_eq!(action, TimesAction::UpdateTimes { date: None });
        assert_eq!(update_times(&[], &action), initialize_times());
    }

    #[test]
    fn test_unknown_action_type_decodes_as_other() {
        let action: TimesAction =
            serde_json::from_str(r#"{"type":"RESET","date":"2024-06-01"}"#).unwrap();
        assert_eq!(action, TimesAction::Other);
    }

    proptest! {
        #[test]
        fn update_ignores_date(date in ".*", state in proptest::collection::vec("[0-9]{2}:[0-9]{2}", 0..8)) {
            let action = TimesAction::update(date);
            let once = update_times(&state, &action);
            prop_assert_eq!(&once, &initialize_times());
            prop_assert_eq!(update_times(&once, &action), once);
        }
    }
}
