use crate::models::{Emotion, FoodType, MealTime, RatingRecord};
use crate::trends::{self, Selection, TrendFilter};

/// Which view of the trends is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Charts,
    List,
    Insights,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Charts, Tab::List, Tab::Insights];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Charts => "Charts",
            Tab::List => "List View",
            Tab::Insights => "Insights",
        }
    }
}

/// Filter selection and active tab for one rendering of the trends screen.
///
/// Values are never changed in place; every `with_*` call returns a new state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    filter: TrendFilter,
    tab: Tab,
}

impl ViewState {
    pub fn new(filter: TrendFilter, tab: Tab) -> Self {
        Self { filter, tab }
    }

    pub fn filter(&self) -> &TrendFilter {
        &self.filter
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn with_emotion(&self, emotion: Selection<Emotion>) -> Self {
        Self {
            filter: TrendFilter {
                emotion,
                ..self.filter.clone()
            },
            tab: self.tab,
        }
    }

    pub fn with_meal_time(&self, meal_time: Selection<MealTime>) -> Self {
        Self {
            filter: TrendFilter {
                meal_time,
                ..self.filter.clone()
            },
            tab: self.tab,
        }
    }

    pub fn with_food_type(&self, food_type: Selection<FoodType>) -> Self {
        Self {
            filter: TrendFilter {
                food_type,
                ..self.filter.clone()
            },
            tab: self.tab,
        }
    }

    pub fn with_tab(&self, tab: Tab) -> Self {
        Self {
            filter: self.filter.clone(),
            tab,
        }
    }

    /// Same tab, every dimension back to "all".
    pub fn reset_filters(&self) -> Self {
        Self {
            filter: TrendFilter::default(),
            tab: self.tab,
        }
    }

    /// Whether a "clear filters" action would change anything.
    pub fn has_active_filters(&self) -> bool {
        self.filter.is_active()
    }

    /// Records visible under this state's filter.
    pub fn apply(&self, records: &[RatingRecord]) -> Vec<RatingRecord> {
        trends::filter(records, &self.filter)
    }
}
