//! Natural-language insights derived from grouped trend data.
//!
//! Each block is computed independently from its ranked input and degrades to
//! a `NoData` variant instead of failing when there is nothing to report.

use crate::models::{Category, Emotion, FoodType, GroupStat, MealTime, RatingRecord};
use crate::trends::constants::{HIGH_QUALITY_THRESHOLD, MAX_RATING, MODERATE_QUALITY_THRESHOLD};
use crate::trends::filter::{filter, Selection, TrendFilter};
use crate::trends::grouping::{group_by_universe, overall_average, total_count};
use crate::trends::ranking::{rank, top_group, SortOrder};

/// Highest individually rated food seen for one emotion.
#[derive(Debug, Clone, PartialEq)]
pub struct BestFood {
    pub emotion: Emotion,
    pub food: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmotionInsight {
    NoData,
    Found {
        top: Emotion,
        average: f64,
        best_foods: Vec<BestFood>,
    },
}

/// One row of the meal-time rating distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionBar {
    pub meal_time: MealTime,
    pub average: f64,
    /// `average / 5`, the filled share of a full-scale bar.
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MealTimeInsight {
    NoData,
    Found {
        top: MealTime,
        average: f64,
        count: u64,
        distribution: Vec<DistributionBar>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FoodTypeInsight {
    NoData,
    Found {
        top: FoodType,
        average: f64,
        count: u64,
        scope: Selection<Emotion>,
    },
}

/// Qualitative band for the overall average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityBand {
    High,
    Moderate,
    Low,
}

impl QualityBand {
    pub fn from_average(average: f64) -> Self {
        if average >= HIGH_QUALITY_THRESHOLD {
            QualityBand::High
        } else if average >= MODERATE_QUALITY_THRESHOLD {
            QualityBand::Moderate
        } else {
            QualityBand::Low
        }
    }

    /// Wording for an emotion-scoped claim, or for the algorithm overall.
    pub fn label(&self, emotion_scoped: bool) -> &'static str {
        match (self, emotion_scoped) {
            (QualityBand::High, true) => "highly effective",
            (QualityBand::High, false) => "performing well",
            (QualityBand::Moderate, true) => "moderately effective",
            (QualityBand::Moderate, false) => "performing adequately",
            (QualityBand::Low, _) => "in need of improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QualityInsight {
    NoData,
    Found {
        total_ratings: u64,
        average: f64,
        band: QualityBand,
        scope: Selection<Emotion>,
    },
}

/// All four insight blocks for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub emotion: EmotionInsight,
    pub meal_time: MealTimeInsight,
    pub food_type: FoodTypeInsight,
    pub quality: QualityInsight,
}

/// Best food per emotion: the highest individual rating, first occurrence
/// winning ties. Emotions appear in first-seen order. Records without any
/// ratings are skipped.
pub fn best_food_by_emotion(records: &[RatingRecord]) -> Vec<BestFood> {
    let mut best: Vec<BestFood> = Vec::new();

    for record in records.iter().filter(|r| r.count > 0) {
        match best.iter_mut().find(|b| b.emotion == record.emotion) {
            Some(existing) => {
                if record.rating > existing.rating {
                    existing.food = record.food.clone();
                    existing.rating = record.rating;
                }
            }
            None => best.push(BestFood {
                emotion: record.emotion.clone(),
                food: record.food.clone(),
                rating: record.rating,
            }),
        }
    }

    best
}

pub fn emotion_compatibility(
    records: &[RatingRecord],
    ranked_by_emotion: &[GroupStat<Emotion>],
) -> EmotionInsight {
    match top_group(ranked_by_emotion) {
        Some(top) => EmotionInsight::Found {
            top: top.key.clone(),
            average: top.weighted_average,
            best_foods: best_food_by_emotion(records),
        },
        None => EmotionInsight::NoData,
    }
}

pub fn meal_time_preference(ranked_by_meal_time: &[GroupStat<MealTime>]) -> MealTimeInsight {
    let Some(top) = top_group(ranked_by_meal_time) else {
        return MealTimeInsight::NoData;
    };

    let distribution = ranked_by_meal_time
        .iter()
        .map(|g| DistributionBar {
            meal_time: g.key.clone(),
            average: g.weighted_average,
            fraction: g.weighted_average / MAX_RATING,
        })
        .collect();

    MealTimeInsight::Found {
        top: top.key.clone(),
        average: top.weighted_average,
        count: top.total_count,
        distribution,
    }
}

pub fn food_type_analysis(
    ranked_by_food_type: &[GroupStat<FoodType>],
    active_emotion: &Selection<Emotion>,
) -> FoodTypeInsight {
    match top_group(ranked_by_food_type) {
        Some(top) => FoodTypeInsight::Found {
            top: top.key.clone(),
            average: top.weighted_average,
            count: top.total_count,
            scope: active_emotion.clone(),
        },
        None => FoodTypeInsight::NoData,
    }
}

pub fn recommendation_quality(
    records: &[RatingRecord],
    active_emotion: &Selection<Emotion>,
) -> QualityInsight {
    match overall_average(records) {
        Some(average) => QualityInsight::Found {
            total_ratings: total_count(records),
            average,
            band: QualityBand::from_average(average),
            scope: active_emotion.clone(),
        },
        None => QualityInsight::NoData,
    }
}

/// Derive every insight block from already filtered and ranked data.
pub fn derive_insights(
    filtered: &[RatingRecord],
    ranked_by_emotion: &[GroupStat<Emotion>],
    ranked_by_meal_time: &[GroupStat<MealTime>],
    ranked_by_food_type: &[GroupStat<FoodType>],
    active_emotion: &Selection<Emotion>,
) -> Insights {
    Insights {
        emotion: emotion_compatibility(filtered, ranked_by_emotion),
        meal_time: meal_time_preference(ranked_by_meal_time),
        food_type: food_type_analysis(ranked_by_food_type, active_emotion),
        quality: recommendation_quality(filtered, active_emotion),
    }
}

/// Filter, group over each declared universe, rank, and derive insights.
pub fn insights_for(records: &[RatingRecord], predicates: &TrendFilter) -> Insights {
    let filtered = filter(records, predicates);
    let by_emotion = rank(group_by_universe::<Emotion>(&filtered), SortOrder::Descending);
    let by_meal_time = rank(group_by_universe::<MealTime>(&filtered), SortOrder::Descending);
    let by_food_type = rank(group_by_universe::<FoodType>(&filtered), SortOrder::Descending);

    derive_insights(
        &filtered,
        &by_emotion,
        &by_meal_time,
        &by_food_type,
        &predicates.emotion,
    )
}

impl EmotionInsight {
    pub fn lines(&self) -> Vec<String> {
        match self {
            EmotionInsight::NoData => vec!["No emotion data available.".to_string()],
            EmotionInsight::Found {
                top,
                average,
                best_foods,
            } => {
                let mut lines = vec![format!(
                    "Users experiencing {} emotions responded most positively to food \
                     recommendations, with an average rating of {:.1}.",
                    top, average
                )];
                if !best_foods.is_empty() {
                    lines.push("The highest-rated foods by emotion are:".to_string());
                    lines.extend(best_foods.iter().map(|b| {
                        format!("{}: {} ({:.1}/5)", b.emotion.display_name(), b.food, b.rating)
                    }));
                }
                lines
            }
        }
    }
}

impl MealTimeInsight {
    pub fn lines(&self) -> Vec<String> {
        match self {
            MealTimeInsight::NoData => vec!["No meal time data available.".to_string()],
            MealTimeInsight::Found {
                top,
                average,
                count,
                distribution,
            } => {
                let mut lines = vec![
                    format!(
                        "{} recommendations received the highest average rating ({:.1}/5) \
                         with {} ratings.",
                        top, average, count
                    ),
                    "Meal time rating distribution:".to_string(),
                ];
                lines.extend(
                    distribution
                        .iter()
                        .map(|bar| format!("{}: {:.1}/5", bar.meal_time, bar.average)),
                );
                lines
            }
        }
    }
}

impl FoodTypeInsight {
    pub fn lines(&self) -> Vec<String> {
        match self {
            FoodTypeInsight::NoData => vec!["No food type data available.".to_string()],
            FoodTypeInsight::Found {
                top,
                average,
                count,
                scope,
            } => {
                let claim = match scope {
                    Selection::Only(emotion) => {
                        format!("For {} emotions, {} foods are the most effective.", emotion, top)
                    }
                    Selection::All => format!(
                        "Across all emotions, {} foods are the most versatile and well-received.",
                        top
                    ),
                };
                vec![
                    format!(
                        "{} foods received the highest average rating ({:.1}/5) with {} ratings.",
                        top, average, count
                    ),
                    claim,
                ]
            }
        }
    }
}

impl QualityInsight {
    pub fn lines(&self) -> Vec<String> {
        match self {
            QualityInsight::NoData => {
                vec!["No rating data available for the selected filters.".to_string()]
            }
            QualityInsight::Found {
                total_ratings,
                average,
                band,
                scope,
            } => {
                let verdict = match scope {
                    Selection::Only(emotion) => format!(
                        "This suggests that current recommendations for {} emotions are {}.",
                        emotion,
                        band.label(true)
                    ),
                    Selection::All => format!(
                        "This suggests that the overall recommendation algorithm is {}.",
                        band.label(false)
                    ),
                };
                vec![
                    format!(
                        "Based on {} total ratings, the average recommendation rating is {:.1}/5.",
                        total_ratings, average
                    ),
                    verdict,
                ]
            }
        }
    }
}

/// The four insight blocks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSection {
    Emotion,
    MealTime,
    FoodType,
    Quality,
}

impl InsightSection {
    pub const ALL: [InsightSection; 4] = [
        InsightSection::Emotion,
        InsightSection::MealTime,
        InsightSection::FoodType,
        InsightSection::Quality,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            InsightSection::Emotion => "Emotion-Food Compatibility",
            InsightSection::MealTime => "Meal Time Preferences",
            InsightSection::FoodType => "Food Type Analysis",
            InsightSection::Quality => "Recommendation Quality",
        }
    }
}

impl Insights {
    pub fn lines(&self, section: InsightSection) -> Vec<String> {
        match section {
            InsightSection::Emotion => self.emotion.lines(),
            InsightSection::MealTime => self.meal_time.lines(),
            InsightSection::FoodType => self.food_type.lines(),
            InsightSection::Quality => self.quality.lines(),
        }
    }

    /// Sections with their lines, in display order.
    pub fn sections(&self) -> Vec<(InsightSection, Vec<String>)> {
        InsightSection::ALL
            .into_iter()
            .map(|section| (section, self.lines(section)))
            .collect()
    }

    pub fn has_data(&self) -> bool {
        !matches!(self.quality, QualityInsight::NoData)
    }
}
