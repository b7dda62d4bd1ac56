use std::path::Path;

use clap::Parser;
use env_logger::Env;

use mood_food_trends_rs::cli::{chart_order, Cli, Command};
use mood_food_trends_rs::error::{Result, TrendError};
use mood_food_trends_rs::interface::{
    display_chart, display_insights, display_trend_list, format_emotion_chart,
    format_group_chart, prompt_next_view, prompt_yes_no, suggest_label, write_csv,
};
use mood_food_trends_rs::models::{Category, Dimension, Emotion, FoodType, MealTime};
use mood_food_trends_rs::state::{JsonSource, Tab, TrendSource, ViewState};
use mood_food_trends_rs::trends::{
    filter, group_by_universe, insights_for, rank, sort_by_rating, Selection, SortOrder,
    TrendFilter,
};
use mood_food_trends_rs::{GroupStat, RatingRecord};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<()> {
    let predicates = cli.trend_filter();
    warn_unknown_label(&predicates.emotion);
    warn_unknown_label(&predicates.meal_time);
    warn_unknown_label(&predicates.food_type);

    let source = JsonSource::new(&cli.file);
    let records = source.fetch()?;
    log::info!("{} records from {}", records.len(), source.path().display());

    match cli.command.unwrap_or_default() {
        Command::Charts {
            by,
            ranked,
            ascending,
        } => cmd_charts(&records, &predicates, by, chart_order(ranked, ascending)),
        Command::List => cmd_list(&records, &predicates),
        Command::Insights => cmd_insights(&records, &predicates),
        Command::Browse => cmd_browse(&records, predicates),
        Command::Export { out, ranked } => cmd_export(&records, &predicates, &out, ranked),
    }
}

/// Warn about a filter value that matches no declared category.
fn warn_unknown_label<C: Category>(selection: &Selection<C>) {
    let Selection::Only(value) = selection else {
        return;
    };
    if value.is_known() {
        return;
    }
    match suggest_label::<C>(value.label()) {
        Some(suggestion) => log::warn!(
            "'{}' is not a known {}; did you mean '{}'?",
            value,
            C::DIMENSION.name(),
            suggestion
        ),
        None => log::warn!("'{}' is not a known {}", value, C::DIMENSION.name()),
    }
}

/// Show grouped averages for one or every dimension.
fn cmd_charts(
    records: &[RatingRecord],
    predicates: &TrendFilter,
    by: Option<Dimension>,
    order: Option<SortOrder>,
) -> Result<()> {
    let filtered = filter(records, predicates);
    if filtered.is_empty() {
        println!("No data available for the selected filters");
        return Ok(());
    }

    let dimensions = match by {
        Some(dimension) => vec![dimension],
        None => Dimension::ALL.to_vec(),
    };

    for dimension in dimensions {
        let rows = match dimension {
            Dimension::Emotion => {
                let groups = group_by_universe::<Emotion>(&filtered);
                format_emotion_chart(&ordered(groups, order))
            }
            Dimension::MealTime => {
                format_group_chart(&ordered(group_by_universe::<MealTime>(&filtered), order))
            }
            Dimension::FoodType => {
                format_group_chart(&ordered(group_by_universe::<FoodType>(&filtered), order))
            }
        };
        display_chart(dimension.title(), &rows);
    }
    println!();

    Ok(())
}

fn ordered<C: Category>(groups: Vec<GroupStat<C>>, order: Option<SortOrder>) -> Vec<GroupStat<C>> {
    match order {
        Some(order) => rank(groups, order),
        None => groups,
    }
}

/// List filtered records by rating.
fn cmd_list(records: &[RatingRecord], predicates: &TrendFilter) -> Result<()> {
    let filtered = filter(records, predicates);
    display_trend_list(&sort_by_rating(&filtered));
    Ok(())
}

/// Print the four insight sections.
fn cmd_insights(records: &[RatingRecord], predicates: &TrendFilter) -> Result<()> {
    display_insights(&insights_for(records, predicates));
    Ok(())
}

/// Render the current view, then let the user change it until they quit.
fn cmd_browse(records: &[RatingRecord], predicates: TrendFilter) -> Result<()> {
    let mut state = ViewState::new(predicates, Tab::default());

    loop {
        println!();
        println!(
            "[{}] emotion={} meal_time={} food_type={}",
            state.tab().title(),
            state.filter().emotion,
            state.filter().meal_time,
            state.filter().food_type
        );

        match state.tab() {
            Tab::Charts => cmd_charts(records, state.filter(), None, None)?,
            Tab::List => cmd_list(records, state.filter())?,
            Tab::Insights => cmd_insights(records, state.filter())?,
        }

        match prompt_next_view(&state)? {
            Some(next) => state = next,
            None => break,
        }
    }

    Ok(())
}

/// Export grouped statistics for the filtered records.
fn cmd_export(
    records: &[RatingRecord],
    predicates: &TrendFilter,
    out: &Path,
    ranked: bool,
) -> Result<()> {
    if out.is_dir() {
        return Err(TrendError::InvalidInput(format!(
            "{} is a directory",
            out.display()
        )));
    }

    if out.exists() {
        let overwrite = prompt_yes_no(&format!("{} exists. Overwrite?", out.display()), false)?;
        if !overwrite {
            return Ok(());
        }
    }

    let filtered = filter(records, predicates);
    let order = ranked.then_some(SortOrder::Descending);
    write_csv(&filtered, out, order)?;
    println!("Wrote {} records' statistics to {}", filtered.len(), out.display());

    Ok(())
}
