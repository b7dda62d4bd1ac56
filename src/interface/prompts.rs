use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{universe_labels, Category, Dimension, Emotion, FoodType, MealTime};
use crate::state::{Tab, ViewState};
use crate::trends::constants::{ALL_SENTINEL, SUGGESTION_THRESHOLD};
use crate::trends::Selection;

/// Closest known label for a value outside the universe of `C`.
///
/// Returns `None` for known labels, the `"all"` sentinel, or when nothing is
/// similar enough.
pub fn suggest_label<C: Category>(input: &str) -> Option<String> {
    if input == ALL_SENTINEL || C::from_label(input).is_known() {
        return None;
    }

    let needle = input.to_lowercase();
    let mut candidates: Vec<(String, f64)> = universe_labels::<C>()
        .into_iter()
        .map(|label| {
            let score = jaro_winkler(&label.to_lowercase(), &needle);
            (label, score)
        })
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().next().map(|(label, _)| label)
}

/// Prompt for a selection on one dimension, "all" first.
pub fn prompt_selection<C: Category>(current: &Selection<C>) -> Result<Selection<C>> {
    let universe = C::universe();
    let mut options = vec![ALL_SENTINEL.to_string()];
    options.extend(universe.iter().map(|c| c.display_name()));

    let default = match current {
        Selection::All => 0,
        Selection::Only(c) => universe.iter().position(|u| u == c).map_or(0, |i| i + 1),
    };

    let selection = Select::new()
        .with_prompt(C::DIMENSION.title())
        .items(&options)
        .default(default)
        .interact()?;

    Ok(match selection {
        0 => Selection::All,
        i => Selection::Only(universe[i - 1].clone()),
    })
}

/// Prompt for the tab to show.
pub fn prompt_tab(current: Tab) -> Result<Tab> {
    let options: Vec<&str> = Tab::ALL.iter().map(Tab::title).collect();
    let default = Tab::ALL.iter().position(|t| *t == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Show")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Tab::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask what to change next. Returns `None` when the user is done.
pub fn prompt_next_view(state: &ViewState) -> Result<Option<ViewState>> {
    let mut actions = vec![
        format!("Filter by {}", Dimension::Emotion.title()),
        format!("Filter by {}", Dimension::MealTime.title()),
        format!("Filter by {}", Dimension::FoodType.title()),
        "Switch view".to_string(),
    ];
    if state.has_active_filters() {
        actions.push("Clear filters".to_string());
    }
    actions.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&actions)
        .default(0)
        .interact()?;

    let next = match actions[selection].as_str() {
        "Quit" => return Ok(None),
        "Switch view" => state.with_tab(prompt_tab(state.tab())?),
        "Clear filters" => state.reset_filters(),
        _ => match selection {
            0 => state.with_emotion(prompt_selection::<Emotion>(&state.filter().emotion)?),
            1 => state.with_meal_time(prompt_selection::<MealTime>(&state.filter().meal_time)?),
            _ => state.with_food_type(prompt_selection::<FoodType>(&state.filter().food_type)?),
        },
    };

    Ok(Some(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_label_for_typo() {
        assert_eq!(suggest_label::<Emotion>("hapy"), Some("happy".to_string()));
        assert_eq!(suggest_label::<MealTime>("lunch"), Some("Lunch".to_string()));
    }

    #[test]
    fn test_no_suggestion_for_known_or_sentinel() {
        assert_eq!(suggest_label::<Emotion>("happy"), None);
        assert_eq!(suggest_label::<FoodType>("all"), None);
    }

    #[test]
    fn test_no_suggestion_for_unrelated_input() {
        assert_eq!(suggest_label::<FoodType>("xyzzy"), None);
    }
}
