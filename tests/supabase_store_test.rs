use chrono::NaiveDate;
use dental_desk::adapters::store::SupabaseStore;
use dental_desk::domain::{AppointmentRequest, ContactSubmission, DomainError};
use dental_desk::ports::ClinicStore;
use dental_desk::usecases::{CatalogService, ContactForm, ContactService, FormOutcome};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

const KEY: &str = "anon-key";

fn treatment_json(id: &str, category: &str, featured: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Treatment {}", id),
        "description": "desc",
        "category": category,
        "featured": featured,
        "icon": "Activity",
        "created_at": "2025-01-10T08:30:00+00:00"
    })
}

#[tokio::test]
async fn test_treatments_query_and_auth_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/treatments")
                .query_param("select", "*")
                .query_param("order", "featured.desc")
                .header("apikey", KEY)
                .header("authorization", "Bearer anon-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    treatment_json("1", "orthodontics", true),
                    treatment_json("2", "cosmetic", false)
                ]));
        })
        .await;

    let store = SupabaseStore::new(server.base_url(), KEY);
    let rows = store.treatments().await.unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, "orthodontics");
    assert!(rows[0].featured);
}

#[tokio::test]
async fn test_featured_queries_use_filter_and_limit() {
    let server = MockServer::start_async().await;
    let treatments = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/treatments")
                .query_param("featured", "eq.true")
                .query_param("limit", "6");
            then.status(200)
                .json_body(json!([treatment_json("1", "general", true)]));
        })
        .await;
    let testimonials = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/testimonials")
                .query_param("featured", "eq.true")
                .query_param("limit", "3");
            then.status(200).json_body(json!([{
                "id": "r1",
                "patient_name": "Anita",
                "treatment": "Dental Implants",
                "rating": 5,
                "review": "Excellent care.",
                "featured": true,
                "created_at": null
            }]));
        })
        .await;

    let store = Arc::new(SupabaseStore::new(server.base_url(), KEY));
    let home = CatalogService::new(store).home().await;

    treatments.assert_async().await;
    testimonials.assert_async().await;
    assert_eq!(home.featured_treatments.len(), 1);
    assert_eq!(home.testimonials[0].rating, 5);
}

#[tokio::test]
async fn test_pricing_embeds_rows() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/treatments")
                .query_param("select", "*,pricing(*)");
            then.status(200).json_body(json!([{
                "id": "t1",
                "name": "Dental Braces",
                "description": "Metal braces",
                "category": "orthodontics",
                "featured": true,
                "icon": "Smile",
                "pricing": [
                    {"id": "p1", "treatment_id": "t1", "price_from": 35000, "price_to": 50000, "currency": "INR"}
                ]
            }]));
        })
        .await;

    let store = SupabaseStore::new(server.base_url(), KEY);
    let rows = store.treatments_with_pricing().await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        rows[0].primary_pricing().unwrap().display(),
        "₹35,000 - ₹50,000"
    );
}

#[tokio::test]
async fn test_faqs_ordered_by_display_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/faqs")
                .query_param("order", "order_index.asc");
            then.status(200).json_body(json!([
                {"id": "1", "question": "Q1", "answer": "A1", "category": "general", "order_index": 1},
                {"id": "2", "question": "Q2", "answer": "A2", "category": "payment", "order_index": 2}
            ]));
        })
        .await;

    let store = SupabaseStore::new(server.base_url(), KEY);
    let faqs = store.faqs().await.unwrap();

    mock.assert_async().await;
    assert_eq!(faqs.len(), 2);
    assert_eq!(faqs[1].category, "payment");
}

#[tokio::test]
async fn test_select_error_maps_to_store_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/treatments");
            then.status(401).body(r#"{"message":"Invalid API key"}"#);
        })
        .await;

    let store = SupabaseStore::new(server.base_url(), "wrong");
    let err = store.treatments().await.unwrap_err();

    match err {
        DomainError::Store(msg) => {
            assert!(msg.contains("401"));
            assert!(msg.contains("Invalid API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_contact_insert_posts_array_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/contact_submissions")
                .header("prefer", "return=minimal")
                .header("apikey", KEY)
                .json_body(json!([{
                    "name": "Priya",
                    "email": "priya@example.com",
                    "phone": null,
                    "subject": "Appointment Request",
                    "message": "Cleaning please"
                }]));
            then.status(201);
        })
        .await;

    let store = SupabaseStore::new(server.base_url(), KEY);
    store
        .insert_contact_submission(&ContactSubmission {
            name: "Priya".into(),
            email: "priya@example.com".into(),
            phone: None,
            subject: "Appointment Request".into(),
            message: "Cleaning please".into(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_contact_form_failure_keeps_values() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/contact_submissions");
            then.status(400)
                .body(r#"{"message":"null value in column \"subject\""}"#);
        })
        .await;

    let service = ContactService::new(Arc::new(SupabaseStore::new(server.base_url(), KEY)));
    let mut form = ContactForm {
        name: "Priya".into(),
        email: "priya@example.com".into(),
        phone: "9876543210".into(),
        subject: "Checkup".into(),
        message: "Hello".into(),
    };
    let before = form.clone();

    let outcome = service.submit(&mut form).await;

    assert!(matches!(outcome, FormOutcome::Failed(_)));
    assert_eq!(form, before);
}

#[tokio::test]
async fn test_appointment_insert_serializes_date() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/appointments")
                .json_body_partial(r#"[{"preferred_date": "2026-11-03", "preferred_time": "10:00 AM"}]"#);
            then.status(201);
        })
        .await;

    let store = SupabaseStore::new(server.base_url(), KEY);
    store
        .insert_appointment(&AppointmentRequest {
            patient_name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: "9876543210".into(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
            preferred_time: "10:00 AM".into(),
            treatment_type: "Dental Implants".into(),
            message: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
}
