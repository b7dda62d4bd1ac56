use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::models::RatingRecord;

/// A grouping dimension of a rating record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Dimension {
    Emotion,
    MealTime,
    FoodType,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Emotion, Dimension::MealTime, Dimension::FoodType];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Emotion => "emotion",
            Dimension::MealTime => "meal_time",
            Dimension::FoodType => "food_type",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Emotion => "Emotion",
            Dimension::MealTime => "Meal Time",
            Dimension::FoodType => "Food Type",
        }
    }
}

/// A category label for one dimension.
///
/// Known labels map to dedicated variants; anything else is kept verbatim in
/// an `Other` variant so unexpected upstream data still groups correctly.
pub trait Category: Clone + Eq + Hash + fmt::Display + fmt::Debug {
    const DIMENSION: Dimension;

    /// The declared universe, in display order.
    fn universe() -> Vec<Self>;

    /// Exact, case-sensitive parse. Unknown labels become `Other`.
    fn from_label(label: &str) -> Self;

    fn label(&self) -> &str;

    /// The value of this dimension on a record.
    fn of(record: &RatingRecord) -> &Self;

    fn is_known(&self) -> bool;

    /// Label with its first character upper-cased.
    fn display_name(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:ident, dimension = $dimension:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A label outside the declared universe.
            Other(String),
        }

        impl Category for $name {
            const DIMENSION: Dimension = Dimension::$dimension;

            fn universe() -> Vec<Self> {
                vec![$($name::$variant),+]
            }

            fn from_label(label: &str) -> Self {
                match label {
                    $($label => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }

            fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(label) => label.as_str(),
                }
            }

            fn of(record: &RatingRecord) -> &Self {
                &record.$field
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                match <$name as Category>::from_label(&label) {
                    $name::Other(_) => $name::Other(label),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(label) => label,
                    known => known.label().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category! {
    /// Emotion detected from the user's face when the recommendation was made.
    Emotion, field = emotion, dimension = Emotion {
        Happy => "happy",
        Sad => "sad",
        Angry => "angry",
        Neutral => "neutral",
        Surprise => "surprise",
        Fear => "fear",
        Disgust => "disgust",
    }
}

category! {
    MealTime, field = meal_time, dimension = MealTime {
        Breakfast => "Breakfast",
        Lunch => "Lunch",
        Dinner => "Dinner",
        Snack => "Snack",
    }
}

category! {
    FoodType, field = food_type, dimension = FoodType {
        Fruits => "Fruits",
        Vegetables => "Vegetables",
        Meat => "Meat",
        Dairy => "Dairy",
        Grains => "Grains",
        Snacks => "Snacks",
        Beverages => "Beverages",
    }
}

impl Emotion {
    /// Hex color used when rendering this emotion.
    pub fn color(&self) -> &'static str {
        match self {
            Emotion::Happy => "#5CEA7E",
            Emotion::Sad => "#805AE3",
            Emotion::Angry => "#FF5A63",
            Emotion::Neutral => "#6EA9F7",
            Emotion::Surprise => "#FFA500",
            Emotion::Disgust => "#8B4513",
            Emotion::Fear => "#9932CC",
            Emotion::Other(_) => "#6B7280",
        }
    }
}

/// Labels of a category's universe, for prompts and suggestions.
pub fn universe_labels<C: Category>() -> Vec<String> {
    C::universe().iter().map(|c| c.label().to_string()).collect()
}
