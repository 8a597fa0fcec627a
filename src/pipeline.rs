use crate::aggregate::{top_scoring_users, TopUsers};
use crate::config::{EntryPolicy, ReportOptions};
use crate::date::{local_now, months_before};
use crate::progress::file_progress;
use crate::records::{read_posts, read_users};
use crate::report::write_report;
use crate::util::init_tracing_once;
use anyhow::{anyhow, Result};
use std::io::{self, Write};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Read users and posts, aggregate recent scores, pick the top users per category.
#[derive(Clone, Debug, Default)]
pub struct TopUsersReport {
    pub(crate) opts: ReportOptions,
    now: Option<OffsetDateTime>,
}

impl TopUsersReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: ReportOptions) -> Self {
        Self { opts, now: None }
    }

    // -------- Builder methods --------
    pub fn months_back(mut self, months: u32) -> Self { self.opts = self.opts.with_months_back(months); self }
    pub fn top_k(mut self, k: usize) -> Self { self.opts = self.opts.with_top_k(k); self }
    pub fn entry_policy(mut self, policy: EntryPolicy) -> Self { self.opts = self.opts.with_entry_policy(policy); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn io_read_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_read_buffer(bytes); self }
    /// Pin the evaluation instant instead of reading the local clock.
    pub fn now(mut self, now: OffsetDateTime) -> Self { self.now = Some(now); self }

    pub fn options(&self) -> &ReportOptions {
        &self.opts
    }

    /// Posts must be created strictly after this instant to count.
    pub fn cutoff(&self) -> Result<OffsetDateTime> {
        let now = self.now.unwrap_or_else(local_now);
        months_before(now, self.opts.months_back)
            .ok_or_else(|| anyhow!("{} months before {} is out of range", self.opts.months_back, now))
    }

    pub fn run(&self, users_path: &Path, posts_path: &Path) -> Result<TopUsers> {
        // Resolve the clock before any progress thread exists; the local
        // offset lookup refuses to run once the process is multi-threaded.
        let cutoff = self.cutoff()?;
        init_tracing_once();
        tracing::info!(
            "counting posts created after {} (past {} months)",
            cutoff.format(&Rfc3339).unwrap_or_else(|_| cutoff.to_string()),
            self.opts.months_back
        );

        let pb = file_progress(self.opts.progress, users_path, "Users");
        let users = read_users(users_path, self.opts.read_buffer_bytes, pb.as_ref())?;
        if let Some(pb) = pb { pb.finish_with_message("Users: done"); }

        let pb = file_progress(self.opts.progress, posts_path, "Posts");
        let posts = read_posts(posts_path, cutoff, self.opts.read_buffer_bytes, pb.as_ref())?;
        if let Some(pb) = pb { pb.finish_with_message("Posts: done"); }

        Ok(top_scoring_users(&users, &posts, self.opts.top_k, self.opts.entry_policy))
    }

    /// Render `top` with headers matching this report's settings.
    pub fn write<W: Write>(&self, top: &TopUsers, out: &mut W) -> io::Result<()> {
        write_report(out, top, self.opts.top_k, self.opts.months_back)
    }
}
