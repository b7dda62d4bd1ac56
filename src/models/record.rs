use serde::{Deserialize, Serialize};

use crate::models::{Emotion, FoodType, MealTime};
use crate::trends::constants::{MAX_RATING, MIN_RATING};

/// One aggregated rating observation from the trends endpoint.
///
/// `rating` is the average of `count` individual ratings for this
/// food/emotion/meal-time/food-type combination. A record with `count == 0`
/// carries no rating information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub food: String,

    pub food_type: FoodType,

    pub meal_time: MealTime,

    pub emotion: Emotion,

    pub rating: f64,

    #[serde(default)]
    pub count: u32,
}

impl RatingRecord {
    pub fn new(
        food: impl Into<String>,
        food_type: FoodType,
        meal_time: MealTime,
        emotion: Emotion,
        rating: f64,
        count: u32,
    ) -> Self {
        Self {
            food: food.into(),
            food_type,
            meal_time,
            emotion,
            rating,
            count,
        }
    }

    /// Contribution to a weighted rating sum.
    #[inline]
    pub fn weighted_rating(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.rating * self.count as f64
        }
    }

    /// Rating within the 1-5 scale.
    pub fn is_valid(&self) -> bool {
        self.rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}/{}/{}]: {:.2} x{}",
            self.food, self.emotion, self.meal_time, self.food_type, self.rating, self.count
        )
    }
}
