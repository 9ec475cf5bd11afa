//! API integration tests
//!
//! These run against a live server with a seeded database.

use chrono::{Datelike, Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

fn date(offset_days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_notice_crud_round_trip() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/notices", BASE_URL))
        .json(&json!({
            "heading": "Test notice",
            "subheading": "Integration test entry",
            "published_date": date(0),
            "valid_until": date(30),
            "document_url": "/uploads/test-notice.pdf"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No notice ID");

    // Read back
    let response = client
        .get(format!("{}/notices/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["heading"], "Test notice");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["featured"], false);

    // Partial update
    let response = client
        .put(format!("{}/notices/{}", BASE_URL, id))
        .json(&json!({ "heading": "Test notice (amended)" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/notices/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["heading"], "Test notice (amended)");
    // Untouched fields survive a partial update
    assert_eq!(body["subheading"], "Integration test entry");

    // Delete
    let response = client
        .delete(format!("{}/notices/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/notices/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_double_toggle_restores_flags() {
    let client = Client::new();

    let response = client
        .post(format!("{}/notices", BASE_URL))
        .json(&json!({
            "heading": "Toggle test notice",
            "subheading": "",
            "published_date": date(0),
            "valid_until": date(7)
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No notice ID");

    for endpoint in ["toggle-active", "toggle-featured"] {
        let before: Value = client
            .get(format!("{}/notices/{}", BASE_URL, id))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response");

        for _ in 0..2 {
            let response = client
                .patch(format!("{}/notices/{}/{}", BASE_URL, id, endpoint))
                .send()
                .await
                .expect("Failed to send request");
            assert!(response.status().is_success());
        }

        let after: Value = client
            .get(format!("{}/notices/{}", BASE_URL, id))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response");

        assert_eq!(before["is_active"], after["is_active"]);
        assert_eq!(before["featured"], after["featured"]);
    }

    let _ = client
        .delete(format!("{}/notices/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_expired_tender_left_out_of_active_list() {
    let client = Client::new();

    // A tender whose closing date has passed
    let response = client
        .post(format!("{}/tenders", BASE_URL))
        .json(&json!({
            "heading": "Expired supply tender",
            "description": "Closed last month",
            "published_date": date(-60),
            "last_date": date(-30),
            "opening_date": date(-29),
            "tender_no": format!("PC/{}/T-9999", Utc::now().year())
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No tender ID");

    // Not in the public active list
    let active: Value = client
        .get(format!("{}/tenders/active", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let listed = active
        .as_array()
        .expect("Expected an array")
        .iter()
        .any(|t| t["id"].as_i64() == Some(id));
    assert!(!listed, "expired tender must not appear in /tenders/active");

    // Still reachable through search
    let search: Value = client
        .get(format!(
            "{}/search?q=Expired%20supply&type=tenders",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(search["success"], true);
    let found = search["results"]
        .as_array()
        .expect("Expected results array")
        .iter()
        .any(|r| r["id"] == id.to_string() && r["type"] == "tenders");
    assert!(found, "expired tender should still be searchable");

    let _ = client
        .delete(format!("{}/tenders/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_search_short_query_is_empty_success() {
    let client = Client::new();

    let response = client
        .get(format!("{}/search?q=c", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 0);
    assert_eq!(body["results"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_search_type_counts_cover_all_matches() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/search?q=customs", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["success"], true);

    // total is the number of matches before truncation, so it is at least
    // the number of returned results and equals the sum of the type counts
    let returned = body["results"].as_array().expect("results array").len() as i64;
    let total = body["total"].as_i64().expect("total");
    assert!(total >= returned);

    let types = body["types"].as_object().expect("types object");
    let sum: i64 = types.values().filter_map(Value::as_i64).sum();
    assert_eq!(sum, total);
}

#[tokio::test]
#[ignore]
async fn test_search_featured_results_rank_first() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/search?q=customs", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let results = body["results"].as_array().expect("results array");
    let first_unfeatured = results.iter().position(|r| r["featured"] == false);
    if let Some(pos) = first_unfeatured {
        assert!(
            results[pos..].iter().all(|r| r["featured"] == false),
            "no featured result may rank below an unfeatured one"
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_validation_rejects_empty_heading() {
    let client = Client::new();

    let response = client
        .post(format!("{}/sliders", BASE_URL))
        .json(&json!({
            "heading": "",
            "description": "no heading",
            "image_url": "/uploads/slider.jpg",
            "priority": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_visitor_counter_deduplicates_ips() {
    let client = Client::new();

    let count_after = |body: Value| body["count"].as_i64().expect("count");

    let first: Value = client
        .post(format!("{}/visitors", BASE_URL))
        .header("x-forwarded-for", "203.0.113.50")
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let baseline = count_after(first);

    // Same IP again: no increment
    let repeat: Value = client
        .post(format!("{}/visitors", BASE_URL))
        .header("x-forwarded-for", "203.0.113.50")
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(count_after(repeat), baseline);

    // A new IP increments by one
    let other: Value = client
        .post(format!("{}/visitors", BASE_URL))
        .header("x-forwarded-for", "203.0.113.51")
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(count_after(other), baseline + 1);

    // The totals endpoint agrees on today's count
    let totals: Value = client
        .get(format!("{}/visitors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(totals["today"].as_i64(), Some(baseline + 1));
    assert!(totals["total"].as_i64() >= totals["today"].as_i64());
}

#[tokio::test]
#[ignore]
async fn test_media_list_filters_by_kind() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/media?type=photo", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    for item in body.as_array().expect("Expected an array") {
        assert_eq!(item["media_type"], "photo");
    }
}

#[tokio::test]
#[ignore]
async fn test_unparsable_id_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/news/not-a-number", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    for section in [
        "notices",
        "tenders",
        "recruitments",
        "news",
        "sliders",
        "achievements",
        "media",
    ] {
        assert!(body[section]["total"].is_number(), "missing {}", section);
        assert!(
            body[section]["active"].as_i64() <= body[section]["total"].as_i64(),
            "{}: active cannot exceed total",
            section
        );
    }
    assert!(body["visitors"]["total"].is_number());
}
