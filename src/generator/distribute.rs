use std::collections::HashMap;

use crate::types::TrackCandidate;

/// Items grouped by key, keeping keys in the order they were first seen and
/// each group in insertion order.
#[derive(Debug, Clone)]
pub struct OrderedGroups<T> {
    groups: Vec<(String, Vec<T>)>,
    index: HashMap<String, usize>,
}

impl<T> Default for OrderedGroups<T> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> OrderedGroups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_by<I, F>(items: I, key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> &str,
    {
        let mut groups = Self::new();
        for item in items {
            let k = key(&item).to_owned();
            groups.push(k, item);
        }
        groups
    }

    pub fn push(&mut self, key: String, item: T) {
        match self.index.get(&key) {
            Some(&i) => self.groups[i].1.push(item),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![item]));
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.index.get(key).map(|&i| self.groups[i].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Size of the largest group.
    pub fn longest(&self) -> usize {
        self.groups.iter().map(|(_, g)| g.len()).max().unwrap_or(0)
    }

    /// Emits the `i`-th item of every group, in key order, for
    /// `i = 0..longest`. Two items of one group only end up adjacent once
    /// every other group is exhausted.
    pub fn round_robin(self) -> Vec<T> {
        let rounds = self.longest();
        let total = self.groups.iter().map(|(_, g)| g.len()).sum();
        let mut lanes: Vec<_> = self.groups.into_iter().map(|(_, g)| g.into_iter()).collect();

        let mut out = Vec::with_capacity(total);
        for _ in 0..rounds {
            for lane in lanes.iter_mut() {
                if let Some(item) = lane.next() {
                    out.push(item);
                }
            }
        }
        out
    }

    /// Whole groups back to back, in key order.
    pub fn concatenate(self) -> Vec<T> {
        self.groups.into_iter().flat_map(|(_, g)| g).collect()
    }
}

/// Orders the pool for the playlist and cuts it to `max_tracks`.
///
/// With `shuffle_artists` the artists are interleaved round-robin,
/// otherwise each artist's block follows the previous one.
pub fn distribute(
    pool: Vec<TrackCandidate>,
    max_tracks: usize,
    shuffle_artists: bool,
) -> Vec<TrackCandidate> {
    let groups = OrderedGroups::group_by(pool, |c: &TrackCandidate| c.artist_query.as_str());

    let mut ordered = if shuffle_artists {
        groups.round_robin()
    } else {
        groups.concatenate()
    };
    ordered.truncate(max_tracks);
    ordered
}
