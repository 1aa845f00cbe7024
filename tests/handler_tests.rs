//! MCP handler tests: filter tools and listing output
mod common;

use chrono::{Duration, Utc};
use common::*;
use findathon_mcp::*;

/// Listing relative to the real clock, with wide margins around the urgency window
fn live_listing() -> String {
    let today = Utc::now();
    let date = |days: i64| (today + Duration::days(days)).format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"
format_version = 1

[[events]]
id = "web3-jam"
title = "Web3 Jam"
source = "Devpost"
mode = "In-Person"
reg_end_date = "{far}"
themes = "Blockchain"

[[events]]
id = "ai-sprint"
title = "AI Sprint"
source = "MLH"
mode = "Online"
reg_end_date = "{soon}"
description = "48 hours of applied machine learning"
link = "https://example.com/ai-sprint"

[[events]]
id = "mystery"
title = "Mystery Hack"
source = "Unstop"
mode = "Offline"
isClosed = true
"#,
        soon = date(2),
        far = date(20),
    )
}

fn live_handler() -> (FindathonServerHandler, tempfile::NamedTempFile) {
    get_test_handler(&live_listing())
}

#[tokio::test]
async fn test_list_default_shows_everything_in_deadline_order() {
    let (handler, _temp_file) = live_handler();

    let list = handler.handle_list(None).await.unwrap();
    assert!(list.starts_with("Found 3 hackathon(s):"));
    assert_eq!(
        extract_ids_from_list(&list),
        vec!["ai-sprint", "web3-jam", "mystery"]
    );
    assert!(list.contains("Reg. ends: TBA"));
    assert!(list.contains("CLOSED"));
    assert!(list.contains("48 hours of applied machine learning"));
}

#[tokio::test]
async fn test_list_can_exclude_descriptions() {
    let (handler, _temp_file) = live_handler();

    let list = handler.handle_list(Some(true)).await.unwrap();
    assert!(!list.contains("Description:"));
    assert!(list.contains("Link: https://example.com/ai-sprint"));
}

#[tokio::test]
async fn test_scenario_through_tools() {
    let (handler, _temp_file) = live_handler();

    handler.handle_set_category("Online".to_string()).await.unwrap();
    let list = handler.handle_list(None).await.unwrap();
    assert_eq!(extract_ids_from_list(&list), vec!["ai-sprint"]);

    handler.handle_set_urgency(true).await.unwrap();
    let list = handler.handle_list(None).await.unwrap();
    assert_eq!(extract_ids_from_list(&list), vec!["ai-sprint"]);

    handler.handle_set_category("all".to_string()).await.unwrap();
    let list = handler.handle_list(None).await.unwrap();
    assert_eq!(extract_ids_from_list(&list), vec!["ai-sprint"]);

    handler.handle_set_urgency(false).await.unwrap();
    handler.handle_search("jam".to_string()).await.unwrap();
    let list = handler.handle_list(None).await.unwrap();
    assert_eq!(extract_ids_from_list(&list), vec!["web3-jam"]);
}

#[tokio::test]
async fn test_setters_report_visible_counts() {
    let (handler, _temp_file) = live_handler();

    let result = handler.handle_set_category("MLH".to_string()).await.unwrap();
    assert_eq!(result, "Category set to 'MLH'. Showing 1 of 3 hackathon(s).");

    let result = handler.handle_set_urgency(true).await.unwrap();
    assert_eq!(result, "Urgency filter enabled. Showing 1 of 3 hackathon(s).");

    let result = handler.handle_search("blockchain".to_string()).await.unwrap();
    assert_eq!(
        result,
        "Search set to \"blockchain\". Showing 0 of 3 hackathon(s)."
    );

    let result = handler.handle_search(String::new()).await.unwrap();
    assert_eq!(result, "Search cleared. Showing 1 of 3 hackathon(s).");
}

#[tokio::test]
async fn test_unrecognized_category_is_reported() {
    let (handler, _temp_file) = live_handler();

    let result = handler
        .handle_set_category("Offline".to_string())
        .await
        .unwrap();
    assert!(result.starts_with("Category set to 'Offline'. Showing 1 of 3 hackathon(s)."));
    assert!(result.contains("not a filter bar category"));
    assert!(result.contains("Labels in listing: MLH, Online, Devpost, In-Person, Unstop, Offline"));

    let list = handler.handle_list(None).await.unwrap();
    assert_eq!(extract_ids_from_list(&list), vec!["mystery"]);
}

#[tokio::test]
async fn test_empty_result_message() {
    let (handler, _temp_file) = live_handler();

    handler.handle_search("quantum".to_string()).await.unwrap();
    let list = handler.handle_list(None).await.unwrap();
    assert!(list.starts_with("No hackathons found"));
}

#[tokio::test]
async fn test_filters_tool_reports_state() {
    let (handler, _temp_file) = live_handler();

    handler.handle_set_category("in-person".to_string()).await.unwrap();
    handler.handle_search("web".to_string()).await.unwrap();

    let state = handler.handle_filters().await.unwrap();
    assert!(state.contains("[In-Person]"));
    assert!(state.contains("Urgency (closing within 7 days): off"));
    assert!(state.contains("Search: \"web\""));
    assert!(state.contains("Showing 1 of 3 hackathon(s)"));
}

#[tokio::test]
async fn test_reset_filters_restores_full_listing() {
    let (handler, _temp_file) = live_handler();

    handler.handle_set_category("Devpost".to_string()).await.unwrap();
    handler.handle_set_urgency(true).await.unwrap();
    handler.handle_search("x".to_string()).await.unwrap();

    let result = handler.handle_reset_filters().await.unwrap();
    assert_eq!(result, "Filters reset. Showing 3 of 3 hackathon(s).");

    let state = handler.handle_filters().await.unwrap();
    assert!(state.contains("[All Events]"));
    assert!(state.contains("Search: (none)"));
}

#[tokio::test]
async fn test_missing_listing_file_is_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("none.toml");
    let handler = FindathonServerHandler::new(path.to_str().unwrap(), false).unwrap();

    let list = handler.handle_list(None).await.unwrap();
    assert!(list.starts_with("No hackathons found"));
}

#[tokio::test]
async fn test_from_listing_constructor() {
    let handler = FindathonServerHandler::from_listing(EventListing::from_events(
        scenario_events(Utc::now()),
    ));

    handler.handle_set_category("devpost".to_string()).await.unwrap();
    let list = handler.handle_list(None).await.unwrap();
    assert_eq!(extract_ids_from_list(&list), vec!["2"]);
}

#[test]
fn test_invalid_listing_fails_to_load() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "events = 3").unwrap();
    assert!(FindathonServerHandler::new(temp_file.path().to_str().unwrap(), false).is_err());
}
