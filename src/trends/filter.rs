use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Emotion, FoodType, MealTime, RatingRecord};
use crate::trends::constants::ALL_SENTINEL;

/// A filter selection on one dimension: everything, or one exact label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<C> {
    All,
    Only(C),
}

impl<C> Default for Selection<C> {
    fn default() -> Self {
        Selection::All
    }
}

impl<C: Category> Selection<C> {
    /// Parse a label, treating the `"all"` sentinel as no filter.
    pub fn parse(label: &str) -> Self {
        if label == ALL_SENTINEL {
            Selection::All
        } else {
            Selection::Only(C::from_label(label))
        }
    }

    pub fn matches(&self, value: &C) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_SENTINEL,
            Selection::Only(c) => c.label(),
        }
    }
}

impl<C: Category> FromStr for Selection<C> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selection::parse(s))
    }
}

impl<C: Category> fmt::Display for Selection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Equality predicates on the three record dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrendFilter {
    pub emotion: Selection<Emotion>,
    pub meal_time: Selection<MealTime>,
    pub food_type: Selection<FoodType>,
}

impl TrendFilter {
    pub fn new(
        emotion: Selection<Emotion>,
        meal_time: Selection<MealTime>,
        food_type: Selection<FoodType>,
    ) -> Self {
        Self {
            emotion,
            meal_time,
            food_type,
        }
    }

    pub fn matches(&self, record: &RatingRecord) -> bool {
        self.emotion.matches(&record.emotion)
            && self.meal_time.matches(&record.meal_time)
            && self.food_type.matches(&record.food_type)
    }

    /// Whether any dimension is narrowed.
    pub fn is_active(&self) -> bool {
        !(self.emotion.is_all() && self.meal_time.is_all() && self.food_type.is_all())
    }
}

/// Records matching every narrowed dimension, in input order.
pub fn filter(records: &[RatingRecord], predicates: &TrendFilter) -> Vec<RatingRecord> {
    let filtered: Vec<RatingRecord> = records
        .iter()
        .filter(|r| predicates.matches(r))
        .cloned()
        .collect();

    log::debug!(
        "filter emotion={} meal_time={} food_type={}: {} of {} records",
        predicates.emotion,
        predicates.meal_time,
        predicates.food_type,
        filtered.len(),
        records.len()
    );

    filtered
}
