use crate::common::{FakeTransport, token_client};
use ice_client::model::utils::NO_SAMPLES_MESSAGE;
use ice_client::prelude::*;
use serde_json::json;

fn inventory() -> FakeTransport {
    let hits = json!({
        "resultCount": 4,
        "results": [
            {"entryInfo": {"id": 1, "name": "P001"}},
            {"entryInfo": {"id": 2, "name": "P002"}},
            {"entryInfo": {"id": 3, "name": "pUC19"}},
            {"entryInfo": {"id": 4, "name": "pUC19"}}
        ]
    });
    let samples = json!([
        {
            "id": 10,
            "location": {
                "type": "PLATE96",
                "display": "PRIMERS\n01",
                "child": {
                    "type": "WELL",
                    "display": "A01",
                    "child": {"type": "TUBE", "display": "T-1"}
                }
            }
        },
        {
            "id": 11,
            "location": {"type": "SHELF", "display": "Fridge 2"}
        }
    ]);
    FakeTransport::new()
        .route(Method::POST, "search", 200, &hits.to_string())
        .route(Method::GET, "parts/1/samples", 200, &samples.to_string())
        .route(Method::GET, "parts/2/samples", 200, "[]")
}

#[tokio::test]
async fn test_find_entries_locations() {
    let ice = token_client(inventory()).await;

    let rows = find_entries_locations(&ice, &["P001", "P002", "P003", "pUC19"])
        .await
        .unwrap();

    assert_eq!(
        rows,
        vec![
            LocationRow::new("P001", "PRIMERS 01/A01/T-1"),
            LocationRow::new("P001", "Fridge 2"),
            LocationRow::new("P002", NO_SAMPLES_MESSAGE),
            LocationRow::new("P003", "No entry named P003. Suggestions: P001, P002."),
            LocationRow::new(
                "pUC19",
                "several records named pUC19, with ids 3, 4"
            ),
        ]
    );
}

#[tokio::test]
async fn test_find_entries_locations_stops_on_server_errors() {
    let transport = FakeTransport::new()
        .route(
            Method::POST,
            "search",
            200,
            r#"{"resultCount": 1, "results": [{"entryInfo": {"id": 1, "name": "P001"}}]}"#,
        )
        .route(Method::GET, "parts/1/samples", 500, "boom");
    let ice = token_client(transport).await;

    let result = find_entries_locations(&ice, &["P001"]).await;

    assert!(matches!(result, Err(AppError::Remote { .. })));
}

#[tokio::test]
async fn test_locations_table() {
    let ice = token_client(inventory()).await;
    let rows = find_entries_locations(&ice, &["P002"]).await.unwrap();
    let table = locations_table(&rows);
    assert_eq!(table.len(), 1);
    assert!(table.to_string().contains(NO_SAMPLES_MESSAGE));
}
