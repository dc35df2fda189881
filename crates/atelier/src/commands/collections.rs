//! Collections command handler: the cover grid as a table.

use tabled::Tabled;

use atelier_core::{ViewItem, extract};

use crate::cli::{CollectionsArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CollectionRow {
    #[tabled(rename = "Collection")]
    title: String,
    #[tabled(rename = "Cover")]
    cover: String,
}

impl From<&ViewItem> for CollectionRow {
    fn from(item: &ViewItem) -> Self {
        Self {
            title: item.title.clone(),
            cover: item.image.clone().unwrap_or_else(|| "(none)".into()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: CollectionsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = util::resolved_config(global)?;
    let mut portfolio = util::load_portfolio(&cfg, global).await?;

    let items: Vec<ViewItem> = if args.include_coverless {
        // Bypass the grid's cover filter: list everything curated,
        // resolved cover or not.
        portfolio
            .collections()
            .iter()
            .map(|c| ViewItem::cover(c.title.clone(), extract::smart_cover(c)))
            .collect()
    } else {
        portfolio.render("all")
    };

    if items.is_empty() {
        output::status_note("No content available", global.quiet);
        return Ok(());
    }

    let out = output::render_list(
        &global.output,
        &items,
        |item| CollectionRow::from(item),
        |item| item.title.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
