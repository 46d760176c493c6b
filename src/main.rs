//! ggg - interactive `git grep`
//!
//! Command-line usage:
//!   ggg                   - search from the filesystem root
//!   ggg [base directory]  - search under the given directory

use clap::Parser;
use ggg::parser::Delimiter;
use ggg::tool::GIT;
use ggg::{locate, resolve_base_dir, run_tui, AppContext};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "ggg", version, about = "Terminal front-end for git grep")]
struct Cli {
    /// Directory to search (defaults to the filesystem root)
    #[arg(value_name = "BASE_DIRECTORY")]
    args: Vec<String>,

    /// Abort a search after this many seconds (0 disables the limit)
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Split git output on spaces instead of newlines, as ggg 1.0 did
    #[arg(long)]
    split_on_space: bool,
}

impl Cli {
    fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    fn delimiter(&self) -> Delimiter {
        if self.split_on_space {
            Delimiter::Space
        } else {
            Delimiter::Newline
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let tool = locate(GIT)?;
    let base_dir = resolve_base_dir(cli.args.as_slice())?;

    let ctx = AppContext::git(base_dir, tool, cli.timeout(), cli.delimiter());
    log::info!("Searching under {} with {}", ctx.base_dir, ctx.tool);
    run_tui(ctx).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
