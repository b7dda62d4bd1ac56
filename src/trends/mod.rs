pub mod constants;
pub mod filter;
pub mod grouping;
pub mod insights;
pub mod ranking;

pub use constants::*;
pub use filter::{filter, Selection, TrendFilter};
pub use grouping::{group_by, group_by_universe, overall_average, total_count};
pub use insights::{
    best_food_by_emotion, derive_insights, emotion_compatibility, food_type_analysis,
    insights_for, meal_time_preference, recommendation_quality, BestFood, DistributionBar,
    EmotionInsight, FoodTypeInsight, InsightSection, Insights, MealTimeInsight, QualityBand,
    QualityInsight,
};
pub use ranking::{rank, sort_by_rating, top_group, SortOrder};
