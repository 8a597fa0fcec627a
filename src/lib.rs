mod config;
mod date;
mod fields;
mod lines;
mod records;

mod topk;
mod aggregate;

mod progress;
mod report;
mod util;
mod pipeline;

pub use crate::config::{EntryPolicy, ReportOptions, DEFAULT_MONTHS_BACK, DEFAULT_TOP_K, parse_flag};
pub use crate::date::{add_months, is_after, local_now, months_before, parse_creation_date, YearMonth};
pub use crate::pipeline::TopUsersReport;

// Line field extraction.
pub use crate::fields::{field_from_line, int_field_from_line, parse_int_lenient, RecordLine};

// Streaming line reader (plain or .zst).
pub use crate::lines::{for_each_line, is_zst};

// Typed records and readers.
pub use crate::records::{parse_post_line, parse_user_line, read_posts, read_users, Post, PostKind, Users};

// Aggregation and bounded top-K.
pub use crate::aggregate::{top_k_by_score, top_scoring_users, ScoreTotals, TopUsers, UserTotal};
pub use crate::topk::TopK;

// Output and logging.
pub use crate::report::{table_header, write_report, write_table};
pub use crate::progress::file_progress;
pub use crate::util::init_tracing_once;
