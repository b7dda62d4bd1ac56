mod category;
mod record;
mod stats;

pub use category::{universe_labels, Category, Dimension, Emotion, FoodType, MealTime};
pub use record::RatingRecord;
pub use stats::GroupStat;
