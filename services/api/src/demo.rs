use cardmatch::config::AppConfig;
use cardmatch::error::AppError;
use cardmatch::recommend::{
    CardRecommender, DetailedQuestionnaire, Recommendation, SimpleRecommendationRequest,
    SpendingEntry,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Path to a saved questionnaire (JSON)
    pub(crate) input: PathBuf,
    /// Override the configured card dataset path
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Treat the input as the detailed questionnaire shape
    #[arg(long)]
    pub(crate) detailed: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(catalog) = args.catalog {
        config.catalog.path = catalog;
    }

    let recommender = CardRecommender::from_path(&config.catalog.path)?;
    let payload = std::fs::read_to_string(&args.input)?;

    if args.detailed {
        let request: DetailedQuestionnaire = serde_json::from_str(&payload)?;
        let result = recommender.recommend_detailed(request)?;

        println!("Derived profile");
        println!(
            "  Top categories: {}",
            format_top_categories(&result.user_profile.top_categories)
        );
        println!("  Lifestyle score: {:.1}", result.user_profile.lifestyle_score);
        render_recommendations(&result.recommendations);
    } else {
        let request: SimpleRecommendationRequest = serde_json::from_str(&payload)?;
        let recommendations = recommender.recommend(request)?;
        render_recommendations(&recommendations);
    }

    Ok(())
}

fn format_top_categories(entries: &[SpendingEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_recommendations(recommendations: &[Recommendation]) {
    println!("\nRecommendations ({})", recommendations.len());
    for (position, card) in recommendations.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {}% match",
            position + 1,
            card.card_name,
            card.issuer,
            card.match_percentage
        );
        println!("     Annual fee: {}", card.annual_fee);
        for reason in &card.match_reasons {
            println!("     - {}", reason);
        }
    }
}
