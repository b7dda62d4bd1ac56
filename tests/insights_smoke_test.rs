use std::io::Write;

use mood_food_trends_rs::models::{Emotion, FoodType, MealTime, RatingRecord};
use mood_food_trends_rs::state::{load_trends, ViewState};
use mood_food_trends_rs::trends::{
    derive_insights, filter, group_by_universe, insights_for, rank, EmotionInsight, QualityBand,
    QualityInsight, Selection, SortOrder, TrendFilter,
};
use tempfile::NamedTempFile;

const PAYLOAD: &str = r#"{
    "status": "success",
    "trends": [
        {"food": "Banana", "food_type": "Fruits", "meal_time": "Breakfast", "emotion": "happy", "rating": 4.5, "count": 4},
        {"food": "Ice Cream", "food_type": "Dairy", "meal_time": "Snack", "emotion": "sad", "rating": 4.0, "count": 3},
        {"food": "Oatmeal", "food_type": "Grains", "meal_time": "Breakfast", "emotion": "sad", "rating": 5.0, "count": 1},
        {"food": "Salad", "food_type": "Vegetables", "meal_time": "Lunch", "emotion": "angry", "rating": 3.0, "count": 2}
    ]
}"#;

fn load_sample() -> Vec<RatingRecord> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PAYLOAD.as_bytes()).unwrap();
    load_trends(file.path()).unwrap()
}

fn section_lines(insights: &mood_food_trends_rs::trends::Insights) -> Vec<Vec<String>> {
    insights.sections().into_iter().map(|(_, lines)| lines).collect()
}

#[test]
fn test_full_pipeline_from_payload() {
    let records = load_sample();
    assert_eq!(records.len(), 4);

    let insights = insights_for(&records, &TrendFilter::default());
    let sections = section_lines(&insights);

    assert_eq!(
        sections[0][0],
        "Users experiencing happy emotions responded most positively to food recommendations, \
         with an average rating of 4.5."
    );
    assert!(sections[0].contains(&"Sad: Oatmeal (5.0/5)".to_string()));
    assert_eq!(
        sections[1][0],
        "Breakfast recommendations received the highest average rating (4.6/5) with 5 ratings."
    );
    assert_eq!(
        sections[2][1],
        "Across all emotions, Grains foods are the most versatile and well-received."
    );
    // (18 + 12 + 5 + 6) / 10 = 4.1
    assert_eq!(
        sections[3],
        vec![
            "Based on 10 total ratings, the average recommendation rating is 4.1/5.".to_string(),
            "This suggests that the overall recommendation algorithm is performing well."
                .to_string(),
        ]
    );
}

#[test]
fn test_quality_label_scenario() {
    // sum(count) = 10, sum(rating * count) = 42
    let records = vec![
        RatingRecord::new("Rice", FoodType::Grains, MealTime::Lunch, Emotion::Happy, 4.0, 6),
        RatingRecord::new("Fish", FoodType::Meat, MealTime::Dinner, Emotion::Happy, 4.5, 4),
    ];
    let insights = insights_for(&records, &TrendFilter::default());

    match insights.quality {
        QualityInsight::Found {
            total_ratings,
            average,
            band,
            ..
        } => {
            assert_eq!(total_ratings, 10);
            assert!((average - 4.2).abs() < 1e-9);
            assert_eq!(band, QualityBand::High);
            assert_eq!(band.label(false), "performing well");
            assert_eq!(band.label(true), "highly effective");
        }
        QualityInsight::NoData => panic!("expected quality insight"),
    }
}

#[test]
fn test_emotion_scoped_wording() {
    let records = load_sample();
    let predicates = TrendFilter {
        emotion: Selection::Only(Emotion::Sad),
        ..TrendFilter::default()
    };
    let insights = insights_for(&records, &predicates);
    let sections = section_lines(&insights);

    assert_eq!(sections[2][1], "For sad emotions, Grains foods are the most effective.");
    assert_eq!(
        sections[3][1],
        "This suggests that current recommendations for sad emotions are highly effective."
    );
}

#[test]
fn test_empty_filter_result_reports_no_data_everywhere() {
    let records = load_sample();
    let predicates = TrendFilter {
        emotion: Selection::Only(Emotion::Surprise),
        ..TrendFilter::default()
    };

    let filtered = filter(&records, &predicates);
    assert!(filtered.is_empty());

    let insights = derive_insights(
        &filtered,
        &rank(group_by_universe::<Emotion>(&filtered), SortOrder::Descending),
        &rank(group_by_universe::<MealTime>(&filtered), SortOrder::Descending),
        &rank(group_by_universe::<FoodType>(&filtered), SortOrder::Descending),
        &predicates.emotion,
    );

    assert_eq!(insights.emotion, EmotionInsight::NoData);
    for lines in section_lines(&insights) {
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("data available"), "{}", lines[0]);
    }
}

#[test]
fn test_view_state_drives_filtering() {
    let records = load_sample();
    let state = ViewState::default().with_meal_time(Selection::Only(MealTime::Breakfast));

    let visible = state.apply(&records);
    assert_eq!(visible.len(), 2);

    let cleared = state.reset_filters();
    assert_eq!(cleared.apply(&records).len(), records.len());
}
