use ovrstat_rs::models_api::player_stats::PlayerStats;
use reqwest::StatusCode;
use tempdir::TempDir;

use crate::common::{ovrstat_server::OvrstatServer, external_server::ExternalServer};

mod common;

#[tokio::test]
async fn test_public_profile() -> Result<(), Box<dyn std::error::Error>> {
    // Given - Start external server
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();

    let mut external_server = ExternalServer::new(8011);
    let external_state = external_server.start().await;

    // Given - Start server
    let mut server = OvrstatServer::new(8012);
    server.start(path, &external_server.get_url());
    server.wait_until_healthy().await;

    // When - look up a public profile
    let res = server.get_stats("pc", "Kraken-1234").await?;

    // Then - should contain masthead, quickplay and competitive stats
    assert_eq!(res.status(), StatusCode::OK);
    let stats: PlayerStats = res.json().await?;
    assert_eq!(stats.name, "Kraken");
    assert_eq!(stats.level, 57);
    assert_eq!(stats.prestige, 5);
    assert_eq!(stats.games_won, 512);
    assert!(!stats.private);
    assert_eq!(stats.quick_play_stats.top_heroes["reinhardt"].games_won, 42);
    assert_eq!(stats.competitive_stats.top_heroes["dVa"].games_won, 11);
    assert!(stats.quick_play_stats.career_stats.contains_key("allHeroes"));

    // When - look up the same profile again
    let res = server.get_stats("pc", "Kraken-1234").await?;

    // Then - should be served from cache
    assert_eq!(res.status(), StatusCode::OK);
    let cached: PlayerStats = res.json().await?;
    assert_eq!(cached.name, stats.name);
    assert_eq!(cached.quick_play_stats.top_heroes.len(), stats.quick_play_stats.top_heroes.len());
    assert_eq!(external_state.read().await.requests.get("pc/Kraken-1234"), Some(&1));

    Ok(())
}

#[tokio::test]
async fn test_private_profile() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();

    let mut external_server = ExternalServer::new(8013);
    external_server.start().await;

    let mut server = OvrstatServer::new(8014);
    server.start(path, &external_server.get_url());
    server.wait_until_healthy().await;

    // When - look up a private profile
    let res = server.get_stats("psn", "Hidden").await?;

    // Then - should only contain masthead info
    assert_eq!(res.status(), StatusCode::OK);
    let json: serde_json::Value = res.json().await?;
    assert_eq!(json["private"], true);
    assert_eq!(json["name"], "Hidden");
    assert_eq!(json["quickPlayStats"]["topHeroes"], serde_json::json!({}));
    assert_eq!(json["competitiveStats"]["careerStats"], serde_json::json!({}));

    Ok(())
}

#[tokio::test]
async fn test_error_responses() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();

    let mut external_server = ExternalServer::new(8015);
    let external_state = external_server.start().await;

    let mut server = OvrstatServer::new(8016);
    server.start(path, &external_server.get_url());
    server.wait_until_healthy().await;

    // When - unknown platform
    let res = server.get_stats("eu", "Kraken-1234").await?;
    // Then - should be bad request without calling upstream
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = res.json().await?;
    assert_eq!(json["status"], 400);
    assert!(external_state.read().await.requests.is_empty());

    // When - profile page says not found
    let res = server.get_stats("xbl", "Nobody").await?;
    // Then - should be not found
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = res.json().await?;
    assert_eq!(json["message"], "Player not found");

    // When - upstream fails
    let res = server.get_stats("pc", "Missing-0000").await?;
    // Then - should be internal server error
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = res.json().await?;
    assert_eq!(json["status"], 500);

    // When - errors are requested again
    server.get_stats("xbl", "Nobody").await?;
    // Then - should not be cached
    assert_eq!(external_state.read().await.requests.get("xbl/Nobody"), Some(&2));

    Ok(())
}
