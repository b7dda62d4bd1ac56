use crate::models::{Category, Emotion, GroupStat, RatingRecord};
use crate::trends::constants::{BAR_WIDTH, MAX_RATING};
use crate::trends::{InsightSection, Insights, MealTimeInsight};

/// A horizontal bar for a rating on the 0-5 scale.
fn rating_bar(average: f64) -> String {
    let fraction = (average / MAX_RATING).clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

/// Chart rows for one dimension, in the order given.
pub fn format_group_chart<C: Category>(groups: &[GroupStat<C>]) -> Vec<String> {
    let width = groups
        .iter()
        .map(|g| g.key.display_name().len())
        .max()
        .unwrap_or(10);

    groups
        .iter()
        .map(|g| {
            format!(
                "  {:<width$} {} {:.1}/5 ({} ratings)",
                g.key.display_name(),
                rating_bar(g.weighted_average),
                g.weighted_average,
                g.total_count,
                width = width
            )
        })
        .collect()
}

/// Emotion chart rows, each tagged with the emotion's color.
pub fn format_emotion_chart(groups: &[GroupStat<Emotion>]) -> Vec<String> {
    format_group_chart(groups)
        .into_iter()
        .zip(groups)
        .map(|(row, g)| format!("{}  {}", row, g.key.color()))
        .collect()
}

/// Display one dimension's grouped statistics.
pub fn display_chart(title: &str, rows: &[String]) {
    println!();
    println!("=== Average Rating by {} ===", title);
    println!();
    for row in rows {
        println!("{}", row);
    }
}

/// List rows for records, in the order given.
pub fn format_trend_list(records: &[RatingRecord]) -> Vec<String> {
    let max_name_len = records.iter().map(|r| r.food.len()).max().unwrap_or(10);

    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{:>3}. {:<width$}  {} · {} · {}  {:.1}  {} ratings",
                i + 1,
                r.food,
                r.food_type,
                r.meal_time,
                r.emotion.display_name(),
                r.rating,
                r.count,
                width = max_name_len
            )
        })
        .collect()
}

/// Display records in list form.
pub fn display_trend_list(records: &[RatingRecord]) {
    if records.is_empty() {
        println!("No data available for the selected filters");
        return;
    }

    println!();
    println!("=== Food Trends ({} items) ===", records.len());
    println!();
    for row in format_trend_list(records) {
        println!("{}", row);
    }
    println!();
}

/// Insight sections as printable lines, with distribution bars for meal times.
pub fn format_insights(insights: &Insights) -> Vec<String> {
    let mut out = Vec::new();

    for (section, mut lines) in insights.sections() {
        if let (InsightSection::MealTime, MealTimeInsight::Found { distribution, .. }) =
            (section, &insights.meal_time)
        {
            let start = lines.len().saturating_sub(distribution.len());
            for (line, bar) in lines[start..].iter_mut().zip(distribution) {
                *line = format!("{:<18} {}", line, rating_bar(bar.average));
            }
        }

        out.push(format!("--- {} ---", section.title()));
        out.extend(lines.into_iter().map(|l| format!("  {}", l)));
        out.push(String::new());
    }

    out
}

/// Display all insight sections.
pub fn display_insights(insights: &Insights) {
    println!();
    println!("=== Insights ===");
    println!();
    for line in format_insights(insights) {
        println!("{}", line);
    }
}
