use std::str::FromStr;

/// Which category tables a user enters when one of their posts is counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Any counted post seeds the user in both tables (a question-only user
    /// shows up in the answer table with 0). Matches the classic report.
    #[default]
    SeedBothCategories,
    /// A user enters a table only through a post of that category.
    PostedCategoryOnly,
}

/// Report options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    pub months_back: u32,           // lookback window, in calendar months
    pub top_k: usize,               // rows per table
    pub entry_policy: EntryPolicy,
    pub progress: bool,             // byte progress bars on stderr
    pub read_buffer_bytes: usize,   // BufReader capacity
}

pub const DEFAULT_MONTHS_BACK: u32 = 6;
pub const DEFAULT_TOP_K: usize = 10;

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            months_back: DEFAULT_MONTHS_BACK,
            top_k: DEFAULT_TOP_K,
            entry_policy: EntryPolicy::default(),
            progress: false,
            read_buffer_bytes: 256 * 1024,
        }
    }
}

impl ReportOptions {
    pub fn with_months_back(mut self, months: u32) -> Self {
        self.months_back = months;
        self
    }
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }
    pub fn with_entry_policy(mut self, policy: EntryPolicy) -> Self {
        self.entry_policy = policy;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_io_read_buffer(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes.max(8 * 1024);
        self
    }

    /// Apply overrides from the environment:
    /// - SE_TOP_MONTHS: lookback window in months
    /// - SE_TOP_K: rows per table
    /// - SE_TOP_POSTED_ONLY: `1`/`true` selects `EntryPolicy::PostedCategoryOnly`
    /// - SE_TOP_PROGRESS: `1`/`true` enables progress bars
    /// Unparseable values are logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(m) = env_value::<u32>("SE_TOP_MONTHS") {
            self.months_back = m;
        }
        if let Some(k) = env_value::<usize>("SE_TOP_K") {
            self.top_k = k;
        }
        if let Some(yes) = env_flag("SE_TOP_POSTED_ONLY") {
            self.entry_policy = if yes { EntryPolicy::PostedCategoryOnly } else { EntryPolicy::SeedBothCategories };
        }
        if let Some(yes) = env_flag("SE_TOP_PROGRESS") {
            self.progress = yes;
        }
        self
    }
}

fn env_value<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    match parse_flag(&raw) {
        Some(v) => Some(v),
        None => {
            tracing::warn!("ignoring {}={:?}: expected 1/0/true/false", name, raw);
            None
        }
    }
}

/// `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`, case-insensitive.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
