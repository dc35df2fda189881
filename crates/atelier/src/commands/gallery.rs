//! Gallery command handler: the photos of one collection.

use tabled::Tabled;

use atelier_core::ViewItem;

use crate::cli::{GalleryArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PhotoRow {
    #[tabled(rename = "#")]
    position: String,
    #[tabled(rename = "Photo")]
    url: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: GalleryArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = util::resolved_config(global)?;
    let mut portfolio = util::load_portfolio(&cfg, global).await?;

    let needle = args.name.to_lowercase();
    let matched = portfolio
        .collections()
        .iter()
        .any(|c| c.title.to_lowercase().contains(&needle));
    if !matched {
        return Err(CliError::CollectionNotFound { filter: args.name });
    }

    let items = portfolio.render(&args.name);
    if items.is_empty() {
        output::status_note("No content available", global.quiet);
        return Ok(());
    }

    let total = items.len();
    // render_list maps rows in order; the cell tracks the position.
    let position = std::cell::Cell::new(0usize);
    let out = output::render_list(
        &global.output,
        &items,
        |item: &ViewItem| {
            position.set(position.get() + 1);
            PhotoRow {
                position: format!("{:02} / {:02}", position.get(), total),
                url: item.image.clone().unwrap_or_default(),
            }
        },
        |item| item.image.clone().unwrap_or_default(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
