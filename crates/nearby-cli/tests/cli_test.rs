//! Integration tests for the `nearby` binary
//!
//! Searches run against fixture files, so no network access is needed.

use std::path::PathBuf;
use std::process::{Command, Output};

fn nearby_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("nearby");
    path
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn run(args: &[&str]) -> Output {
    Command::new(nearby_bin())
        .args(args)
        .env_remove("NEARBY_ENDPOINT")
        .env_remove("NEARBY_RADIUS_METERS")
        .env_remove("NEARBY_ENTERTAINMENT_AMENITY")
        .env_remove("NEARBY_REQUEST_TIMEOUT_SECS")
        .env_remove("NEARBY_SORT_BY_DISTANCE")
        .env_remove("NEARBY_LANDMARKS_FILE")
        .env_remove("NEARBY_WATCH_HIGH_ACCURACY")
        .env_remove("NEARBY_WATCH_MAXIMUM_AGE_MS")
        .env_remove("NEARBY_WATCH_TIMEOUT_MS")
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command")
}

fn json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn test_restaurant_search_with_cuisine_filter() {
    let restaurants = fixture("restaurants.json");
    let output = run(&[
        "restaurants", "--lat", "41.3111", "--lng", "69.2797", "--cuisine", "plov", "--fixture",
        &restaurants, "--json",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let parsed = json(&output);
    assert_eq!(parsed["status"], "success");

    let data = &parsed["data"];
    assert_eq!(data["category"], "restaurant");
    assert_eq!(data["status"]["state"], "ready");

    let results = data["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Besh Qozon");
    assert_eq!(results[0]["subtitle"], "Osh (Plov)");
    let distance = results[0]["distance_meters"].as_f64().unwrap();
    assert!((distance - 328.816).abs() < 0.5);
}

#[test]
fn test_empty_response_reports_empty_state() {
    let empty = fixture("empty.json");
    let output =
        run(&["restaurants", "--lat", "41.3111", "--lng", "69.2797", "--fixture", &empty, "--json"]);

    assert!(output.status.success());
    let data = &json(&output)["data"];
    assert_eq!(data["status"]["state"], "empty");
    assert_eq!(data["message"], "No places found nearby");
    assert!(data["results"].as_array().unwrap().is_empty());
}

#[test]
fn test_failed_source_exits_with_error() {
    let output = run(&[
        "entertainment", "--lat", "41.3111", "--lng", "69.2797", "--fixture",
        "/nonexistent/cinemas.json",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load entertainment places"));
}

#[test]
fn test_invalid_position_is_rejected() {
    let output = run(&["restaurants", "--lat", "95", "--lng", "69.2797", "--fixture", "unused.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_geojson_overlay_output() {
    let restaurants = fixture("restaurants.json");
    let output = run(&[
        "restaurants", "--lat", "41.3111", "--lng", "69.2797", "--fixture", &restaurants,
        "--geojson", "--json",
    ]);

    assert!(output.status.success());
    let data = &json(&output)["data"];
    assert_eq!(data["type"], "FeatureCollection");
    // Three restaurants plus the user marker
    assert_eq!(data["features"].as_array().unwrap().len(), 4);
}

#[test]
fn test_landmarks_without_position_offer_no_directions() {
    let output = run(&["landmarks", "--json"]);

    assert!(output.status.success());
    let landmarks = json(&output)["data"]["landmarks"].as_array().unwrap().clone();
    assert_eq!(landmarks.len(), 3);
    assert_eq!(landmarks[0]["title"], "Amir Timur Square");
    for landmark in &landmarks {
        let actions = landmark["actions"].as_array().unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0], "show_on_map");
    }
}

#[test]
fn test_landmarks_with_position_include_distance() {
    let output = run(&["landmarks", "--lat", "41.3123", "--lng", "69.2787", "--json"]);

    assert!(output.status.success());
    let landmarks = json(&output)["data"]["landmarks"].as_array().unwrap().clone();
    assert_eq!(landmarks[0]["distance_meters"].as_f64(), Some(0.0));
    let chorsu = landmarks[1]["distance_meters"].as_f64().unwrap();
    assert!((chorsu - 3609.67).abs() < 36.0);
    assert_eq!(landmarks[1]["actions"].as_array().unwrap().len(), 2);
}

#[test]
fn test_route_to_landmark() {
    let output = run(&["route", "--lat", "41.3123", "--lng", "69.2787", "--landmark", "3", "--json"]);

    assert!(output.status.success());
    let data = &json(&output)["data"];
    assert_eq!(data["destination_name"], "Navoi Opera Theater");
    let distance = data["distance_meters"].as_f64().unwrap();
    assert!((distance - 467.44).abs() < 1.0);
}

#[test]
fn test_route_reports_fit_bounds() {
    let output = run(&[
        "route", "--lat", "41.3123", "--lng", "69.2787", "--to-lat", "41.3246", "--to-lng", "69.2387",
        "--json",
    ]);

    assert!(output.status.success());
    let corners = &json(&output)["data"]["fit_bounds"];
    assert_eq!(corners[0][0].as_f64(), Some(41.3123));
    assert_eq!(corners[0][1].as_f64(), Some(69.2387));
    assert_eq!(corners[1][0].as_f64(), Some(41.3246));
    assert_eq!(corners[1][1].as_f64(), Some(69.2787));
}

#[test]
fn test_route_to_current_position_warns() {
    let output = run(&["route", "--lat", "41.3123", "--lng", "69.2787", "--landmark", "1"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("The destination is the current position"));
}

#[test]
fn test_invalid_amenity_is_rejected() {
    let output = run(&[
        "entertainment", "--lat", "41.3111", "--lng", "69.2797", "--amenity", "cinema\"];way[\"x",
        "--fixture", &fixture("restaurants.json"),
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_route_to_unknown_landmark_fails() {
    let output = run(&["route", "--lat", "41.3123", "--lng", "69.2787", "--landmark", "99"]);
    assert!(!output.status.success());
}

#[test]
fn test_cuisines_listing() {
    let output = run(&["cuisines", "--json"]);

    assert!(output.status.success());
    let cuisines = json(&output)["data"].as_array().unwrap().clone();
    assert_eq!(cuisines.len(), 5);
    assert_eq!(cuisines[0]["key"], "plov");
}

#[test]
fn test_config_shows_cli_overrides() {
    let output = run(&["config", "--radius", "500", "--json"]);

    assert!(output.status.success());
    let entries = json(&output)["data"]["entries"].as_array().unwrap().clone();
    let radius = entries.iter().find(|e| e["key"] == "radius_meters").unwrap();
    assert_eq!(radius["value"], "500");
    assert_eq!(radius["source"], "Cli");

    let endpoint = entries.iter().find(|e| e["key"] == "endpoint").unwrap();
    assert_eq!(endpoint["source"], "Default");
}

#[test]
fn test_config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nearby.toml");
    std::fs::write(
        &path,
        "radius_meters = 1500.0\nentertainment_amenity = \"theatre\"\nwatch_timeout_ms = 1000\n",
    )
    .unwrap();

    let output = run(&["config", "--config", path.to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let entries = json(&output)["data"]["entries"].as_array().unwrap().clone();
    let amenity = entries.iter().find(|e| e["key"] == "entertainment_amenity").unwrap();
    assert_eq!(amenity["value"], "theatre");
    assert_eq!(amenity["source"], "File");

    let watch_timeout = entries.iter().find(|e| e["key"] == "watch_timeout_ms").unwrap();
    assert_eq!(watch_timeout["value"], "1000");
    assert_eq!(watch_timeout["source"], "File");
}
