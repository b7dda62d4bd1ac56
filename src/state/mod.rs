mod persistence;
mod view;

pub use persistence::{load_trends, parse_trends, JsonSource, TrendSource, STDIN_PATH};
pub use view::{Tab, ViewState};
