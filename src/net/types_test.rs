use super::*;

#[test]
fn turf_creation_request_uses_server_field_names() {
    let req = TurfCreationRequest { turf_name: "5-a-side".to_owned(), price_per_hr: 49.5, venue: 3 };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "turf_name": "5-a-side", "price_per_hr": 49.5, "venue": 3 }));
}

#[test]
fn turf_creation_request_venue_serializes_as_integer() {
    let req = TurfCreationRequest { turf_name: "Pitch".to_owned(), price_per_hr: 50.0, venue: 42 };
    let body = serde_json::to_string(&req).unwrap();
    assert!(body.contains(r#""venue":42"#));
    assert!(body.contains(r#""price_per_hr":50.0"#));
}
