use anyhow::Result;
use se_top_users::{init_tracing_once, ReportOptions, TopUsersReport};
use std::io;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let prog = args.first().map(String::as_str).unwrap_or("se-top-users");
        println!("ERROR: usage: {} <users file> <posts file>", prog);
        std::process::exit(1);
    }
    let users_path = PathBuf::from(&args[1]);
    let posts_path = PathBuf::from(&args[2]);

    init_tracing_once();
    let report = TopUsersReport::with_options(ReportOptions::default().with_env_overrides());
    let top = report.run(&users_path, &posts_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write(&top, &mut out)?;
    Ok(())
}
