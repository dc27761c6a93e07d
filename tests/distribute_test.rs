use showlist::generator::{OrderedGroups, distribute};
use showlist::types::TrackCandidate;

// Helper function to create a candidate whose uri doubles as its label
fn create_test_candidate(artist: &str, uri: &str) -> TrackCandidate {
    TrackCandidate {
        uri: uri.to_string(),
        name: format!("Track {}", uri),
        artist_query: artist.to_string(),
        popularity: 50,
        source_event: None,
    }
}

fn uris(tracks: &[TrackCandidate]) -> Vec<&str> {
    tracks.iter().map(|t| t.uri.as_str()).collect()
}

// a=[a1,a2,a3], b=[b1,b2,b3], c=[c1] in that first-seen order
fn three_artist_pool() -> Vec<TrackCandidate> {
    vec![
        create_test_candidate("a", "a1"),
        create_test_candidate("a", "a2"),
        create_test_candidate("a", "a3"),
        create_test_candidate("b", "b1"),
        create_test_candidate("b", "b2"),
        create_test_candidate("b", "b3"),
        create_test_candidate("c", "c1"),
    ]
}

#[test]
fn test_round_robin_interleaves_artists() {
    let out = distribute(three_artist_pool(), 50, true);
    assert_eq!(uris(&out), vec!["a1", "b1", "c1", "a2", "b2", "a3", "b3"]);
}

#[test]
fn test_round_robin_truncates_to_max_tracks() {
    let out = distribute(three_artist_pool(), 4, true);
    assert_eq!(uris(&out), vec!["a1", "b1", "c1", "a2"]);
}

#[test]
fn test_single_artist_keeps_order() {
    let pool = vec![
        create_test_candidate("a", "a1"),
        create_test_candidate("a", "a2"),
        create_test_candidate("a", "a3"),
    ];

    assert_eq!(uris(&distribute(pool.clone(), 3, true)), vec!["a1", "a2", "a3"]);
    assert_eq!(uris(&distribute(pool, 10, true)), vec!["a1", "a2", "a3"]);
}

#[test]
fn test_no_shuffle_concatenates_blocks() {
    let pool = vec![
        create_test_candidate("a", "a1"),
        create_test_candidate("b", "b1"),
        create_test_candidate("a", "a2"),
    ];

    let out = distribute(pool, 50, false);
    assert_eq!(uris(&out), vec!["a1", "a2", "b1"]);
}

#[test]
fn test_no_shuffle_truncates() {
    let out = distribute(three_artist_pool(), 4, false);
    assert_eq!(uris(&out), vec!["a1", "a2", "a3", "b1"]);
}

#[test]
fn test_empty_pool_gives_empty_output() {
    assert!(distribute(Vec::new(), 50, true).is_empty());
    assert!(distribute(Vec::new(), 50, false).is_empty());
}

#[test]
fn test_zero_max_tracks_gives_empty_output() {
    assert!(distribute(three_artist_pool(), 0, true).is_empty());
}

#[test]
fn test_groups_follow_first_seen_order_not_alphabetical() {
    let pool = vec![
        create_test_candidate("zeta", "z1"),
        create_test_candidate("alpha", "x1"),
        create_test_candidate("zeta", "z2"),
    ];

    let out = distribute(pool, 50, true);
    assert_eq!(uris(&out), vec!["z1", "x1", "z2"]);
}

#[test]
fn test_same_artist_adjacent_only_when_others_exhausted() {
    let mut pool = Vec::new();
    for i in 0..6 {
        pool.push(create_test_candidate("a", &format!("a{}", i)));
    }
    for i in 0..2 {
        pool.push(create_test_candidate("b", &format!("b{}", i)));
    }
    pool.push(create_test_candidate("c", "c0"));

    let out = distribute(pool, 50, true);
    assert_eq!(out.len(), 9);

    for (i, pair) in out.windows(2).enumerate() {
        if pair[0].artist_query == pair[1].artist_query {
            // every other artist must be used up before position i + 1
            let rest = &out[i + 1..];
            assert!(
                rest.iter().all(|t| t.artist_query == pair[0].artist_query),
                "artist {} clustered at {} while others remained",
                pair[0].artist_query,
                i
            );
        }
    }
}

#[test]
fn test_ordered_groups_api() {
    let groups = OrderedGroups::group_by(three_artist_pool(), |c: &TrackCandidate| {
        c.artist_query.as_str()
    });

    assert_eq!(groups.len(), 3);
    assert!(!groups.is_empty());
    assert_eq!(groups.longest(), 3);
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(groups.get("c").map(|g| g.len()), Some(1));
    assert!(groups.get("d").is_none());
}

#[test]
fn test_ordered_groups_push() {
    let mut groups: OrderedGroups<u32> = OrderedGroups::new();
    groups.push("b".to_string(), 1);
    groups.push("a".to_string(), 2);
    groups.push("b".to_string(), 3);

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(groups.clone().concatenate(), vec![1, 3, 2]);
    assert_eq!(groups.round_robin(), vec![1, 2, 3]);
}
