// Integration tests for Melp Geo

use melp_geo::core::{
    analyze_in_radius, filter_by_rating_floor, recommend_restaurants, summarize_restaurants,
};
use melp_geo::models::{Address, Location, RatingTier, Restaurant};
use melp_geo::services::DatasetClient;

fn restaurant(id: &str, rating: Option<f64>, city: &str, lat: f64, lng: f64) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("Restaurant {}", id),
        rating,
        contact: None,
        address: Some(Address {
            street: None,
            city: Some(city.to_string()),
            state: None,
            location: Some(Location { lat, lng }),
        }),
    }
}

/// A small dataset around the Mexico City center used by several tests
fn sample_dataset() -> Vec<Restaurant> {
    vec![
        restaurant("centro", Some(4.6), "Mexico City", 19.4326, -99.1332),
        restaurant("roma", Some(4.2), "Mexico City", 19.4194, -99.1598),
        restaurant("condesa", Some(3.8), "Mexico City", 19.4128, -99.1732),
        restaurant("polanco", Some(4.9), "Mexico City", 19.4319, -99.1994),
        restaurant("mty", Some(4.8), "Monterrey", 25.6866, -100.3161),
        restaurant("gdl", Some(2.5), "Guadalajara", 20.6597, -103.3496),
        Restaurant {
            id: "ghost".to_string(),
            name: "Ghost Kitchen".to_string(),
            rating: Some(5.0),
            contact: None,
            address: None,
        },
        restaurant("new_spot", None, "Mexico City", 19.4300, -99.1350),
    ]
}

#[test]
fn test_full_page_pipeline() {
    let restaurants = sample_dataset();

    // Landing page summary
    let summary = summarize_restaurants(&restaurants);
    assert_eq!(summary.total_restaurants, 8);
    assert_eq!(summary.cities, 3);
    assert_eq!(summary.top_rated, 4);

    // Map interaction: stats and recommendations around the centro restaurant
    let center = restaurants[0].location().unwrap();
    let stats = analyze_in_radius(&restaurants, center.lat, center.lng, 5000.0);

    // centro, roma and condesa are within 5km; polanco is ~7km away
    assert_eq!(stats.count, 3);
    assert!(stats.members.iter().any(|r| r.id == "roma"));
    assert!(stats.members.iter().all(|r| r.id != "ghost"));
    assert!(stats.members.iter().all(|r| r.id != "new_spot"));

    let recommendations =
        recommend_restaurants(&restaurants, center.lat, center.lng, 5000.0, 4.0, 5.0);

    // Only centro and roma clear the rating band; nearest first
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].restaurant.id, "centro");
    assert_eq!(recommendations[0].distance_m, 0.0);
    assert_eq!(recommendations[1].restaurant.id, "roma");

    // Card grid filter and marker tiers for the rendered subset
    let four_star_cards = filter_by_rating_floor(&restaurants, 4.0);
    assert_eq!(four_star_cards.len(), 4);

    let tiers: Vec<RatingTier> = recommendations
        .iter()
        .map(|r| RatingTier::from_rating(r.restaurant.rating.unwrap()))
        .collect();
    assert_eq!(tiers, vec![RatingTier::Gold, RatingTier::Green]);
}

#[test]
fn test_widening_the_radius_reaches_more_cities() {
    let restaurants = sample_dataset();
    let center = restaurants[0].location().unwrap();

    let city_stats = analyze_in_radius(&restaurants, center.lat, center.lng, 10_000.0);
    let country_stats = analyze_in_radius(&restaurants, center.lat, center.lng, 1_000_000.0);

    assert!(country_stats.count > city_stats.count);
    assert!(country_stats.members.iter().any(|r| r.id == "mty"));
}

#[test]
fn test_recomputation_is_deterministic() {
    let restaurants = sample_dataset();
    let center = restaurants[0].location().unwrap();

    let first = analyze_in_radius(&restaurants, center.lat, center.lng, 5000.0);
    let second = analyze_in_radius(&restaurants, center.lat, center.lng, 5000.0);

    assert_eq!(first.count, second.count);
    assert_eq!(first.average_rating, second.average_rating);
    assert_eq!(first.std_deviation, second.std_deviation);
}

#[tokio::test]
async fn test_fetch_then_analyze_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/data_melp.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": "1",
                    "name": "El Farolito",
                    "rating": 4.4,
                    "contact": { "phone": "5555555555" },
                    "address": {
                        "street": "Calle 1",
                        "city": "Mexico City",
                        "state": "CDMX",
                        "location": { "lat": 19.4326, "lng": -99.1332 }
                    }
                },
                {
                    "id": "2",
                    "name": "La Esquina",
                    "rating": 4.8,
                    "address": {
                        "city": "Mexico City",
                        "location": { "lat": 19.4330, "lng": -99.1340 }
                    }
                },
                {
                    "id": "3",
                    "name": "Puesto Sin Mapa",
                    "rating": 3.9
                }
            ]"#,
        )
        .create_async()
        .await;

    let client = DatasetClient::new(format!("{}/data_melp.json", server.url()), 30);
    let restaurants = client.fetch_restaurants().await.unwrap();
    assert_eq!(restaurants.len(), 3);

    let center = restaurants[0].location().unwrap();
    let stats = analyze_in_radius(&restaurants, center.lat, center.lng, 1000.0);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.average_rating, 4.6);

    let recommendations =
        recommend_restaurants(&restaurants, center.lat, center.lng, 1000.0, 4.0, 5.0);
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].restaurant.id, "1");
}
