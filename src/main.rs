use melp_geo::config::Settings;
use melp_geo::core::{analyze_in_radius, recommend_restaurants, summarize_restaurants};
use melp_geo::models::RatingTier;
use melp_geo::services::DatasetClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; environment variables override the config file
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Melp Geo analytics...");

    // Fetch the restaurant dataset
    let client = DatasetClient::new(
        settings.dataset.endpoint.clone(),
        settings.dataset.timeout_secs,
    );

    let restaurants = match client.fetch_restaurants().await {
        Ok(restaurants) => restaurants,
        Err(e) => {
            error!("Failed to fetch restaurant dataset: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };

    info!("Fetched {} restaurants", restaurants.len());

    // Dataset-wide summary
    let summary = summarize_restaurants(&restaurants);
    info!(
        "Dataset summary: {} restaurants, average rating {}, {} top rated, {} cities",
        summary.total_restaurants, summary.average_rating, summary.top_rated, summary.cities
    );

    // Search center: configured override, or the first locatable restaurant
    let search = &settings.search;
    let center = match (search.center_lat, search.center_lng) {
        (Some(lat), Some(lng)) => Some((lat, lng)),
        _ => restaurants
            .iter()
            .find_map(|r| r.location())
            .map(|loc| (loc.lat, loc.lng)),
    };

    let (center_lat, center_lng) = match center {
        Some(center) => center,
        None => {
            info!("No locatable restaurants in the dataset, nothing to analyze");
            return Ok(());
        }
    };

    // Radius-bounded statistics around the center
    let stats = analyze_in_radius(&restaurants, center_lat, center_lng, search.radius_m);
    info!(
        "Within {}m of ({}, {}): {} restaurants, average rating {}, std deviation {}",
        search.radius_m, center_lat, center_lng, stats.count, stats.average_rating,
        stats.std_deviation
    );

    // Ranked recommendations; the full list is computed, only top_n reported
    let recommendations = recommend_restaurants(
        &restaurants,
        center_lat,
        center_lng,
        search.radius_m,
        search.min_rating,
        search.max_rating,
    );

    info!(
        "{} recommendations in the {}-{} rating band, showing top {}",
        recommendations.len(),
        search.min_rating,
        search.max_rating,
        search.top_n
    );

    for (index, ranked) in recommendations.iter().take(search.top_n).enumerate() {
        let rating = ranked.restaurant.rating.unwrap_or(0.0);
        info!(
            "#{}: {} at {:.0}m, rated {} ({:?} marker)",
            index + 1,
            ranked.restaurant.name,
            ranked.distance_m,
            rating,
            RatingTier::from_rating(rating)
        );
    }

    Ok(())
}
