//! Typed records read from `Users.xml` / `Posts.xml` style dumps.

use crate::date::{is_after, parse_creation_date};
use crate::fields::RecordLine;
use crate::lines::for_each_line;
use ahash::AHashMap;
use anyhow::Result;
use indicatif::ProgressBar;
use std::path::Path;
use time::{OffsetDateTime, PrimitiveDateTime};

/// User id -> display name.
pub type Users = AHashMap<String, String>;

/// Post classification derived from `PostTypeId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostKind {
    Question,
    Answer,
    Other,
}

impl PostKind {
    pub fn from_type_code(code: &str) -> Self {
        match code {
            "1" => PostKind::Question,
            "2" => PostKind::Answer,
            _ => PostKind::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub kind: PostKind,
    pub owner_user_id: String,
    pub created: PrimitiveDateTime,
    pub score: i64,
}

/// `(Id, DisplayName)` if both are present and non-empty.
pub fn parse_user_line(line: &str) -> Option<(String, String)> {
    let rec = RecordLine::parse(line);
    let (id, name) = (rec.get("Id"), rec.get("DisplayName"));
    if id.is_empty() || name.is_empty() {
        return None;
    }
    Some((id.to_string(), name.to_string()))
}

/// A post if `Id`, `PostTypeId`, `OwnerUserId` and `CreationDate` are all present,
/// the date parses, and it is strictly after `cutoff`.
pub fn parse_post_line(line: &str, cutoff: OffsetDateTime) -> Option<Post> {
    let rec = RecordLine::parse(line);
    let id = rec.get("Id");
    let type_code = rec.get("PostTypeId");
    let owner = rec.get("OwnerUserId");
    let created_raw = rec.get("CreationDate");
    if id.is_empty() || type_code.is_empty() || owner.is_empty() || created_raw.is_empty() {
        return None;
    }
    let created = match parse_creation_date(created_raw) {
        Ok(dt) => dt,
        Err(e) => {
            tracing::debug!("post {}: unparseable CreationDate {:?}: {}", id, created_raw, e);
            return None;
        }
    };
    if !is_after(created, cutoff) {
        return None;
    }
    Some(Post {
        id: id.to_string(),
        kind: PostKind::from_type_code(type_code),
        owner_user_id: owner.to_string(),
        created,
        score: rec.get_int("Score"),
    })
}

/// Load every user line of `path`; later duplicates of an id overwrite earlier ones.
pub fn read_users(path: &Path, read_buf_bytes: usize, pb: Option<&ProgressBar>) -> Result<Users> {
    let mut users = Users::default();
    let mut skipped = 0u64;
    for_each_line(
        path,
        read_buf_bytes,
        |delta| if let Some(pb) = pb { pb.inc(delta) },
        |line| {
            if line.trim().is_empty() { return; }
            match parse_user_line(line) {
                Some((id, name)) => { users.insert(id, name); }
                None => skipped += 1,
            }
        },
    )?;
    tracing::info!("{}: loaded {} users ({} lines skipped)", path.display(), users.len(), skipped);
    Ok(users)
}

/// Load the posts of `path` created strictly after `cutoff`.
pub fn read_posts(path: &Path, cutoff: OffsetDateTime, read_buf_bytes: usize, pb: Option<&ProgressBar>) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    let mut skipped = 0u64;
    for_each_line(
        path,
        read_buf_bytes,
        |delta| if let Some(pb) = pb { pb.inc(delta) },
        |line| {
            if line.trim().is_empty() { return; }
            match parse_post_line(line, cutoff) {
                Some(p) => posts.push(p),
                None => skipped += 1,
            }
        },
    )?;
    tracing::info!("{}: kept {} recent posts ({} lines skipped)", path.display(), posts.len(), skipped);
    Ok(posts)
}
