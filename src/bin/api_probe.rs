// Walks the public item listing page by page and prints what it finds.
//
//   api_probe [search] [all|lost|found]
//
// Reads the same BULLWORK_* variables as the server.

use anyhow::{Context, Result};
use bullwork_finder::web_app::api::{ApiClient, Session};
use bullwork_finder::web_app::loader::{load_more, ListState, LoadOutcome};
use bullwork_finder::web_app::model::{ListScope, TypeFilter};

// Stop even if the service keeps reporting more items than it returns
const MAX_PAGES: usize = 1000;

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let search = args.next().unwrap_or_default();
    let filter: TypeFilter = args
        .next()
        .unwrap_or_default()
        .parse()
        .context("filter must be one of all, lost, found")?;

    let client = ApiClient::from_env()?;
    let page_size = client.settings().page_size;
    println!("Probing {} (take={})", client.settings().api_base_url, page_size);

    let listing = client.listing(ListScope::All, Session::anonymous());
    let mut state = ListState::new();

    for page in 1..=MAX_PAGES {
        match load_more(&listing, &mut state, page_size).await? {
            LoadOutcome::Appended(added) => println!(
                "✓ Page {}: {} new, {} held, {} reported",
                page,
                added,
                state.len(),
                state.total()
            ),
            LoadOutcome::Skipped => break,
        }
        if !state.has_more() {
            break;
        }
    }

    let visible = state.filter_view(&search, filter);
    println!(
        "\n{} of {} items match search='{}' filter={}:",
        visible.len(),
        state.len(),
        search,
        filter
    );
    for item in visible {
        println!(
            "  - [{}] {} ({}) by {} on {}",
            item.item_type,
            item.item_name,
            item.location,
            item.poster_name(),
            item.posted_on()
        );
    }

    Ok(())
}
