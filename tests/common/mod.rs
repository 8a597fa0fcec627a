#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use time::macros::datetime;
use time::OffsetDateTime;

/// Fixed evaluation instant for every test; the 6-month cutoff is 2023-12-15 12:00 UTC.
pub const NOW: OffsetDateTime = datetime!(2024-06-15 12:00 UTC);

/// A recent creation date (inside the default window).
pub const RECENT: &str = "2024-03-01T10:00:00.123";
/// An old creation date (outside the default window).
pub const OLD: &str = "2023-01-10T08:30:00.000";

/// Write plain text lines.
pub fn write_lines(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    for l in lines {
        writeln!(&mut f, "{}", l).unwrap();
    }
}

/// Write a compressed `.zst` file containing the provided lines.
pub fn write_zst_lines(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = zstd::stream::write::Encoder::new(f, 3).unwrap();
    for l in lines {
        writeln!(&mut enc, "{}", l).unwrap();
    }
    enc.finish().unwrap();
}

pub fn user_row(id: &str, name: &str) -> String {
    format!(r#"  <row Id="{}" Reputation="101" CreationDate="2015-01-01T00:00:00.000" DisplayName="{}" Views="3" />"#, id, name)
}

pub fn post_row(id: &str, type_id: &str, owner: &str, created: &str, score: i64) -> String {
    format!(
        r#"  <row Id="{}" PostTypeId="{}" CreationDate="{}" Score="{}" Body="&lt;p&gt;hi&lt;/p&gt;" OwnerUserId="{}" CommentCount="0" />"#,
        id, type_id, created, score, owner
    )
}

/// Wrap rows the way StackExchange dumps do: XML prolog, root open, rows, root close.
pub fn xml_doc(root: &str, rows: Vec<String>) -> Vec<String> {
    let mut v = vec![r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(), format!("<{}>", root)];
    v.extend(rows);
    v.push(format!("</{}>", root));
    v
}

/// A users/posts pair on disk. The directory lives as long as the value.
pub struct Dump {
    pub dir: TempDir,
    pub users: PathBuf,
    pub posts: PathBuf,
}

/// Write `Users.xml` / `Posts.xml` (or `.xml.zst` when `zst`) into a fresh temp dir.
pub fn make_dump(users: Vec<String>, posts: Vec<String>, zst: bool) -> Dump {
    let dir = tempfile::tempdir().unwrap();
    let (users_path, posts_path) = if zst {
        (dir.path().join("Users.xml.zst"), dir.path().join("Posts.xml.zst"))
    } else {
        (dir.path().join("Users.xml"), dir.path().join("Posts.xml"))
    };
    let write = if zst { write_zst_lines } else { write_lines };
    write(&users_path, &xml_doc("users", users));
    write(&posts_path, &xml_doc("posts", posts));
    Dump { dir, users: users_path, posts: posts_path }
}

/// One user "Alice" (id 1) with two recent questions (5, 10) and one recent answer (3).
pub fn make_dump_alice(zst: bool) -> Dump {
    make_dump(
        vec![user_row("1", "Alice")],
        vec![
            post_row("100", "1", "1", RECENT, 5),
            post_row("101", "1", "1", RECENT, 10),
            post_row("102", "2", "1", RECENT, 3),
        ],
        zst,
    )
}
