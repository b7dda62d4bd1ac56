use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::models::{Dimension, Emotion, FoodType, MealTime};
use crate::trends::{Selection, SortOrder, TrendFilter};

/// MoodTrends — analyse which foods work for which moods.
#[derive(Parser, Debug)]
#[command(name = "mood_trends")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved food-trends JSON response ("-" for stdin).
    #[arg(short, long, env = "MOOD_TRENDS_FILE", default_value = "food_trends.json")]
    pub file: PathBuf,

    /// Only include records with this emotion ("all" for every emotion).
    #[arg(long, global = true, default_value = "all")]
    pub emotion: Selection<Emotion>,

    /// Only include records for this meal time.
    #[arg(long, global = true, default_value = "all")]
    pub meal_time: Selection<MealTime>,

    /// Only include records of this food type.
    #[arg(long, global = true, default_value = "all")]
    pub food_type: Selection<FoodType>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn trend_filter(&self) -> TrendFilter {
        TrendFilter::new(
            self.emotion.clone(),
            self.meal_time.clone(),
            self.food_type.clone(),
        )
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Average rating per emotion, meal time and food type.
    Charts {
        /// Show a single dimension.
        #[arg(long, value_enum)]
        by: Option<Dimension>,

        /// Sort groups by average rating, best first.
        #[arg(long)]
        ranked: bool,

        /// With --ranked, sort worst first.
        #[arg(long, requires = "ranked")]
        ascending: bool,
    },

    /// Filtered records, highest rated first.
    List,

    /// Derived insights for the current filters.
    #[default]
    Insights,

    /// Interactively change filters and views.
    Browse,

    /// Write grouped statistics to CSV.
    Export {
        /// Output CSV file.
        #[arg(short, long, default_value = "food_trends.csv")]
        out: PathBuf,

        /// Rank groups by average rating instead of declared order.
        #[arg(long)]
        ranked: bool,
    },
}

/// Sort order implied by the chart flags, if any.
pub fn chart_order(ranked: bool, ascending: bool) -> Option<SortOrder> {
    match (ranked, ascending) {
        (false, _) => None,
        (true, false) => Some(SortOrder::Descending),
        (true, true) => Some(SortOrder::Ascending),
    }
}
