//! `trove wishlist` - show and mutate the saved wishlist.

use super::output;
use super::WishlistCommand;
use crate::domain::ProductId;
use crate::error::{CatalogError, Result};
use crate::port::{CatalogSource, WishlistStore};
use crate::service::WishlistService;

pub async fn run<C, S>(
    catalog: &C,
    service: &WishlistService<S>,
    command: WishlistCommand,
) -> Result<()>
where
    C: CatalogSource,
    S: WishlistStore,
{
    match command {
        WishlistCommand::Show => show(service).await,
        WishlistCommand::Add { id } => add(catalog, service, ProductId::new(id)).await,
        WishlistCommand::Remove { id } => remove(service, ProductId::new(id)).await,
    }
}

async fn show<S: WishlistStore>(service: &WishlistService<S>) -> Result<()> {
    let items = service.load().await?;

    output::section("Wishlist");
    if items.is_empty() {
        output::note("wishlist is empty");
    } else {
        output::note(output::product_table(&items, None));
        output::note(format!("{} saved", items.len()));
    }
    Ok(())
}

async fn add<C, S>(catalog: &C, service: &WishlistService<S>, id: ProductId) -> Result<()>
where
    C: CatalogSource,
    S: WishlistStore,
{
    // The original flow adds from an already-fetched browse list, so
    // resolve the id against the full catalog the same way.
    let products = catalog.fetch_products().await?;
    let product = products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(CatalogError::ProductNotFound { id })?;

    let title = product.title.clone();
    service.add(product).await?;
    output::ok(&format!("added '{title}' to wishlist"));
    Ok(())
}

async fn remove<S: WishlistStore>(service: &WishlistService<S>, id: ProductId) -> Result<()> {
    service.remove(id).await?;
    output::ok(&format!("removed product {id} from wishlist"));
    Ok(())
}
