use std::io;
use std::path::Path;

use crate::error::Result;
use crate::models::{Category, Emotion, FoodType, GroupStat, MealTime, RatingRecord};
use crate::trends::{group_by_universe, rank, SortOrder};

fn write_groups<C: Category, W: io::Write>(
    wtr: &mut csv::Writer<W>,
    groups: &[GroupStat<C>],
) -> Result<()> {
    for group in groups {
        wtr.write_record([
            C::DIMENSION.name().to_string(),
            group.key.label().to_string(),
            group.total_count.to_string(),
            format!("{:.3}", group.weighted_average),
        ])?;
    }
    Ok(())
}

/// Write grouped statistics for every dimension as CSV.
///
/// Groups are listed per dimension in universe order, or ranked when `order`
/// is given.
pub fn write_group_stats<W: io::Write>(
    writer: W,
    records: &[RatingRecord],
    order: Option<SortOrder>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["dimension", "key", "total_count", "weighted_average"])?;

    let by_emotion = group_by_universe::<Emotion>(records);
    let by_meal_time = group_by_universe::<MealTime>(records);
    let by_food_type = group_by_universe::<FoodType>(records);

    match order {
        Some(order) => {
            write_groups(&mut wtr, &rank(by_emotion, order))?;
            write_groups(&mut wtr, &rank(by_meal_time, order))?;
            write_groups(&mut wtr, &rank(by_food_type, order))?;
        }
        None => {
            write_groups(&mut wtr, &by_emotion)?;
            write_groups(&mut wtr, &by_meal_time)?;
            write_groups(&mut wtr, &by_food_type)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write grouped statistics to a CSV file.
pub fn write_csv(records: &[RatingRecord], path: &Path, order: Option<SortOrder>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_group_stats(file, records, order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_lists_every_universe_key() {
        let records = vec![RatingRecord::new(
            "Milk",
            FoodType::Beverages,
            MealTime::Breakfast,
            Emotion::Fear,
            3.0,
            4,
        )];

        let mut buf = Vec::new();
        write_group_stats(&mut buf, &records, None).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "dimension,key,total_count,weighted_average");
        assert_eq!(lines.len(), 1 + 7 + 4 + 7);
        assert!(lines.contains(&"emotion,fear,4,3.000"));
        assert!(lines.contains(&"meal_time,Lunch,0,0.000"));
    }

    #[test]
    fn test_csv_ranked_puts_best_first() {
        let records = vec![
            RatingRecord::new("Tea", FoodType::Beverages, MealTime::Snack, Emotion::Sad, 2.0, 1),
            RatingRecord::new("Cake", FoodType::Snacks, MealTime::Snack, Emotion::Happy, 5.0, 1),
        ];

        let mut buf = Vec::new();
        write_group_stats(&mut buf, &records, Some(SortOrder::Descending)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1), Some("emotion,happy,1,5.000"));
    }
}
