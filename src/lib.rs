pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod trends;

pub use error::{Result, TrendError};
pub use models::{Category, Emotion, FoodType, GroupStat, MealTime, RatingRecord};
