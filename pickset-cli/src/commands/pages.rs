//! Pagination summary command
//!
//! Usage: pickset pages --records N [--per-page P] [--page I] [--options A,B,...]

use clap::Args;
use pickset_lib::paginator::Paginator;

use crate::error::Result;

#[derive(Debug, Args)]
pub struct PagesArgs {
    /// Total number of records
    #[arg(long)]
    pub records: usize,

    /// Records per page (default: 15)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// One-based page to show
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Page sizes to offer, comma separated
    #[arg(long, value_delimiter = ',')]
    pub options: Vec<usize>,
}

/// Execute pages command
pub fn execute(args: PagesArgs) -> Result<()> {
    let mut paginator = Paginator::new(args.records);
    if let Some(per_page) = args.per_page {
        paginator.set_per_page(per_page)?;
    }
    if !args.options.is_empty() {
        paginator.set_select_options(&args.options);
    }

    let target = args.page.saturating_sub(1);
    if target != paginator.page() && paginator.paginate(target).is_none() {
        log::warn!(
            "page {} is out of range (1-{}), showing page {}",
            args.page,
            paginator.total_pages(),
            paginator.page() + 1
        );
    }

    let range = paginator.page_range();
    if paginator.total_pages() == 0 {
        println!("no records");
    } else {
        println!(
            "page {} of {} (records {}-{} of {})",
            paginator.page() + 1,
            paginator.total_pages(),
            range.start + 1,
            range.end,
            paginator.total_records()
        );
    }

    let options: Vec<String> = paginator.select_options().iter().map(|o| o.to_string()).collect();
    println!("per page: {} (options: {})", paginator.per_page(), options.join(", "));
    Ok(())
}
