use chrono::NaiveDate;
use showlist::types::{FetchLimits, SourceEvent};
use showlist::utils::*;

// Helper function to create a test event
fn create_test_event(artist: &str, date: &str, venue: &str) -> SourceEvent {
    SourceEvent {
        artist_name: artist.to_string(),
        date: date.to_string(),
        venue_name: venue.to_string(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());

    // Deterministic for the same verifier
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe base64 without padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_distinct_artists_keeps_first_seen_order() {
    let events = vec![
        create_test_event("Wet Leg", "2024-05-01", "Mohawk"),
        create_test_event("Big Thief", "2024-05-02", "Stubb's"),
        create_test_event("Wet Leg", "2024-05-03", "Emo's"),
        create_test_event("Alvvays", "2024-05-04", "Parish"),
    ];

    assert_eq!(
        distinct_artists(&events),
        vec!["Wet Leg", "Big Thief", "Alvvays"]
    );
}

#[test]
fn test_distinct_artists_is_case_sensitive() {
    let events = vec![
        create_test_event("MUNA", "2024-05-01", "Mohawk"),
        create_test_event("Muna", "2024-05-02", "Mohawk"),
    ];

    // No fuzzy matching, these are two artists
    assert_eq!(distinct_artists(&events).len(), 2);
}

#[test]
fn test_distinct_artists_empty() {
    assert!(distinct_artists(&[]).is_empty());
}

#[test]
fn test_per_artist_limit() {
    let limits = FetchLimits::default();

    // 50 / 10 + 2 = 7
    assert_eq!(per_artist_limit(50, 10, limits), 7);

    // 50 / 2 + 2 = 27, capped at 10
    assert_eq!(per_artist_limit(50, 2, limits), 10);

    // 50 / 100 + 2 = 2
    assert_eq!(per_artist_limit(50, 100, limits), 2);

    // No artists, nothing to fetch
    assert_eq!(per_artist_limit(50, 0, limits), 0);
}

#[test]
fn test_per_artist_limit_uses_configured_constants() {
    let limits = FetchLimits {
        max_per_artist: 20,
        buffer: 5,
    };

    // 50 / 5 + 5 = 15
    assert_eq!(per_artist_limit(50, 5, limits), 15);
    assert_eq!(per_artist_limit(500, 5, limits), 20);
}

#[test]
fn test_parse_events() {
    let json = r#"[
        {"artistName": "Wet Leg", "date": "2024-05-01", "venueName": "Mohawk"},
        {"artistName": "Big Thief", "date": "2024-05-02", "venueName": "Stubb's"}
    ]"#;

    let events = parse_events(json).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0], create_test_event("Wet Leg", "2024-05-01", "Mohawk"));
    assert_eq!(events[1].venue_name, "Stubb's");
}

#[test]
fn test_parse_events_rejects_malformed_input() {
    assert!(parse_events(r#"[{"artistName": "Wet Leg"}]"#).is_err());
    assert!(parse_events("not json").is_err());
}

#[tokio::test]
async fn test_load_events_missing_file() {
    let err = load_events(std::path::Path::new("/nonexistent/showlist/events.json"))
        .await
        .unwrap_err();
    assert!(err.contains("Cannot read"));
}

#[test]
fn test_default_playlist_name() {
    let week_start = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    assert_eq!(
        default_playlist_name("Austin", week_start),
        "Austin Live Music - Week of 2024-05-06"
    );
}

#[test]
fn test_default_playlist_description() {
    let with_state = default_playlist_description("Austin", Some("TX"));
    assert!(with_state.contains("live shows in Austin, TX."));

    let without_state = default_playlist_description("Austin", None);
    assert!(without_state.contains("live shows in Austin."));

    let empty_state = default_playlist_description("Austin", Some(""));
    assert_eq!(empty_state, without_state);
}

#[test]
fn test_format_show() {
    let event = create_test_event("Wet Leg", "2024-05-01", "Mohawk");
    assert_eq!(format_show(Some(&event)), "Mohawk (2024-05-01)");
    assert_eq!(format_show(None), "");
}
