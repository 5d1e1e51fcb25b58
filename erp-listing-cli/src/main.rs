use clap::{Parser, ValueEnum};
use erp_listing_core::{
    ContainerHost, DEFAULT_CONTROLS_TARGET, EntityKind, FilteredList, ListQuery,
    NO_RESULTS_MESSAGE, Paginator, ScreenRecord, escape_html, page_summary, strip_to_html,
    strip_to_text,
};
use serde_json::json;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "erp-listing-cli")]
#[command(about = "Page through an ERP record list the way the admin console does")]
struct Cli {
    /// JSON file holding the array returned by a list endpoint
    records: PathBuf,
    /// List screen the records belong to
    #[arg(short, long, default_value = "produtos")]
    kind: String,
    /// One-based page to show; out-of-range pages are ignored
    #[arg(short, long, default_value = "1")]
    page: usize,
    /// Case-insensitive text filter
    #[arg(short, long)]
    search: Option<String>,
    /// Exact status filter
    #[arg(long)]
    status: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let kind: EntityKind = match cli.kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let records = match erp_listing_core::load_records(&cli.records) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to load records: {}", e);
            std::process::exit(1);
        }
    };

    let mut list = FilteredList::new(ScreenRecord::wrap_all(kind, records));
    list.set_query(
        ListQuery::new(cli.search.as_deref().unwrap_or("")).with_status(cli.status.as_deref()),
    );

    // The render callback keeps the last page it was given; output happens
    // once navigation has settled.
    let shown: Rc<RefCell<Vec<ScreenRecord>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&shown);
    let mut paginator = Paginator::new(ContainerHost::with_container(DEFAULT_CONTROLS_TARGET));
    paginator.initialize(
        list.visible(),
        move |page: &[ScreenRecord]| *sink.borrow_mut() = page.to_vec(),
        DEFAULT_CONTROLS_TARGET,
    );

    if cli.page != 1 && !paginator.go_to_page(cli.page) {
        log::warn!(
            "Page {} is outside 1..={}, staying on page 1",
            cli.page,
            paginator.total_pages()
        );
    }

    let page = shown.borrow();
    let no_results = list.has_no_results();
    match cli.format {
        OutputFormat::Text => {
            println!("{}: {}", kind, page_summary(paginator.strip(), paginator.len()));
            if page.is_empty() {
                let message = if no_results {
                    NO_RESULTS_MESSAGE
                } else {
                    kind.empty_message()
                };
                println!("  {}", message);
            }
            for row in page.iter() {
                let record = &row.record;
                match kind.badge(record) {
                    Some(badge) => println!("  {} [{}]", kind.title(record), badge.label),
                    None => println!("  {}", kind.title(record)),
                }
            }
            println!("{}", strip_to_text(paginator.strip()));
        }
        OutputFormat::Json => {
            let output = json!({
                "kind": kind.as_str(),
                "total_records": paginator.len(),
                "strip": paginator.strip(),
                "records": page.iter().map(|row| &row.record).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Html => {
            if page.is_empty() {
                let message = if no_results {
                    NO_RESULTS_MESSAGE
                } else {
                    kind.empty_message()
                };
                println!(
                    "<tr><td colspan=\"7\" class=\"text-center\">{}</td></tr>",
                    escape_html(message)
                );
            }
            for row in page.iter() {
                println!("{}", kind.row_html(&row.record));
            }
            if let Some(html) = paginator.host().html(DEFAULT_CONTROLS_TARGET) {
                println!("<div class=\"{}\">{}</div>", DEFAULT_CONTROLS_TARGET, html);
            } else {
                println!("{}", strip_to_html(paginator.strip()));
            }
        }
    }

    Ok(())
}
