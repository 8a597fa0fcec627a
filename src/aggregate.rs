//! Per-user score totals split by post kind, and top-K selection over them.

use crate::config::EntryPolicy;
use crate::records::{Post, PostKind, Users};
use crate::topk::TopK;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Display name plus cumulative score for one user in one category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserTotal {
    pub display_name: String,
    pub total_score: i64,
}

impl UserTotal {
    pub fn new(display_name: impl Into<String>, total_score: i64) -> Self {
        Self { display_name: display_name.into(), total_score }
    }
}

/// Orders a `UserTotal` by score alone, so equal scores compare equal.
struct ByScore<'a>(&'a UserTotal);

impl PartialEq for ByScore<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_score == other.0.total_score
    }
}
impl Eq for ByScore<'_> {}
impl PartialOrd for ByScore<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for ByScore<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_score.cmp(&other.0.total_score)
    }
}

/// The two ranked tables, each ascending by score (highest last).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopUsers {
    pub questions: Vec<UserTotal>,
    pub answers: Vec<UserTotal>,
}

/// Running totals keyed by user id. Ordered maps keep the selection input,
/// and therefore tie resolution, stable across runs.
#[derive(Clone, Debug, Default)]
pub struct ScoreTotals {
    policy: EntryPolicy,
    questions: BTreeMap<String, UserTotal>,
    answers: BTreeMap<String, UserTotal>,
}

impl ScoreTotals {
    pub fn new(policy: EntryPolicy) -> Self {
        Self { policy, ..Default::default() }
    }

    /// Fold one post in. Posts whose owner is not a known user are ignored
    /// (returns `false`). Totals saturate at the `i64` bounds.
    pub fn ingest(&mut self, users: &Users, post: &Post) -> bool {
        let Some(name) = users.get(&post.owner_user_id) else { return false };

        if self.policy == EntryPolicy::SeedBothCategories {
            for map in [&mut self.questions, &mut self.answers] {
                seed(map, &post.owner_user_id, name);
            }
        }

        let map = match post.kind {
            PostKind::Question => &mut self.questions,
            PostKind::Answer => &mut self.answers,
            PostKind::Other => return true,
        };
        let total = seed(map, &post.owner_user_id, name);
        total.total_score = total.total_score.saturating_add(post.score);
        true
    }

    pub fn totals(&self, kind: PostKind) -> Option<&BTreeMap<String, UserTotal>> {
        match kind {
            PostKind::Question => Some(&self.questions),
            PostKind::Answer => Some(&self.answers),
            PostKind::Other => None,
        }
    }

    /// Top `k` per category, each exactly `k` long (see [`top_k_by_score`]).
    pub fn top(&self, k: usize) -> TopUsers {
        TopUsers {
            questions: top_k_by_score(self.questions.values(), k),
            answers: top_k_by_score(self.answers.values(), k),
        }
    }
}

fn seed<'m>(map: &'m mut BTreeMap<String, UserTotal>, user_id: &str, name: &str) -> &'m mut UserTotal {
    map.entry(user_id.to_string()).or_insert_with(|| UserTotal::new(name, 0))
}

/// The `k` highest totals in ascending order, padded at the front with
/// `UserTotal::default()` when there are fewer than `k` candidates.
/// Among equal scores at the cut, earlier candidates are kept.
pub fn top_k_by_score<'a>(totals: impl IntoIterator<Item = &'a UserTotal>, k: usize) -> Vec<UserTotal> {
    let mut top = TopK::new(k);
    top.extend(totals.into_iter().map(ByScore));
    let ranked = top.into_ascending();
    let mut slots = vec![UserTotal::default(); k - ranked.len()];
    slots.extend(ranked.into_iter().map(|ByScore(t)| t.clone()));
    slots
}

/// Aggregate `posts` for known `users` and select the top `k` per category.
pub fn top_scoring_users(users: &Users, posts: &[Post], k: usize, policy: EntryPolicy) -> TopUsers {
    let mut totals = ScoreTotals::new(policy);
    let mut unknown_owner = 0u64;
    for post in posts {
        if !totals.ingest(users, post) {
            unknown_owner += 1;
        }
    }
    if unknown_owner > 0 {
        tracing::debug!("{} posts owned by unknown users ignored", unknown_owner);
    }
    totals.top(k)
}
