// Market Directory - Startup Seeder
// Populates default records on first start; a count check keeps it
// idempotent across restarts.

use crate::domain::{Category, Vendor};
use crate::store::{DocumentStore, StoreError};

const DEFAULT_CATEGORIES: [&str; 5] = ["Fruits", "Nuts", "Breads", "Meats", "Eggs"];

const DEFAULT_VENDORS: [(&str, &str); 2] = [("Vendor1", "Smith"), ("Vendor2", "Jones")];

/// Seed default data into empty stores. Inserts run sequentially, each
/// awaited before the next; a store that already holds any record of a
/// kind is left untouched.
pub async fn seed(
    categories: &dyn DocumentStore<Category>,
    vendors: &dyn DocumentStore<Vendor>,
) -> Result<(), StoreError> {
    if categories.count().await? == 0 {
        tracing::info!("loading category data");

        for description in DEFAULT_CATEGORIES {
            categories.save(Category::new(description)).await?;
        }

        tracing::info!(count = categories.count().await?, "loaded categories");
    }

    if vendors.count().await? == 0 {
        tracing::info!("loading vendor data");

        for (first_name, last_name) in DEFAULT_VENDORS {
            vendors.save(Vendor::new(first_name, last_name)).await?;
        }

        tracing::info!(count = vendors.count().await?, "loaded vendors");
    }

    Ok(())
}
