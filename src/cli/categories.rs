//! `trove categories` - list catalog categories.

use super::output;
use crate::error::Result;
use crate::port::CatalogSource;

pub async fn run<C: CatalogSource>(catalog: &C) -> Result<()> {
    let categories = catalog.fetch_categories().await?;

    output::section("Categories");
    if categories.is_empty() {
        output::note("no categories");
    } else {
        output::note(output::category_table(&categories));
    }
    Ok(())
}
