pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_csv, write_group_stats};
pub use prompts::{prompt_next_view, prompt_selection, prompt_tab, prompt_yes_no, suggest_label};
pub use render::{
    display_chart, display_insights, display_trend_list, format_emotion_chart, format_group_chart,
    format_insights, format_trend_list,
};
