//! `trove browse` - fetch, filter, and page through the catalog.

use std::collections::HashSet;

use super::output;
use super::BrowseArgs;
use crate::config::Config;
use crate::domain::{CatalogQuery, ProductId};
use crate::error::Result;
use crate::port::{CatalogSource, WishlistStore};
use crate::service::WishlistService;

pub async fn run<C, S>(
    catalog: &C,
    service: &WishlistService<S>,
    config: &Config,
    args: BrowseArgs,
) -> Result<()>
where
    C: CatalogSource,
    S: WishlistStore,
{
    let products = catalog.fetch_products().await?;

    // Re-read the wishlist on every render rather than tracking changes;
    // storage is the only source of truth shared between commands.
    let saved: HashSet<ProductId> = service.load().await?.iter().map(|p| p.id).collect();

    let query = CatalogQuery {
        search: args.search,
        category: args.category,
        page: args.page,
        per_page: args.per_page.unwrap_or(config.wishlist.per_page),
    };
    let page = query.apply(products);

    output::section("Products");
    if page.items.is_empty() {
        output::note("no products match");
    } else {
        output::note(output::product_table(&page.items, Some(&saved)));
    }
    output::note(format!(
        "page {} of {} ({} matching products)",
        page.page,
        page.total_pages(),
        page.matched
    ));
    Ok(())
}
