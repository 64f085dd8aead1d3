// Market Directory - Domain Entities
// One file per entity kind; patch overlay logic lives on the entity types.

pub mod category;
pub mod vendor;

pub use category::{Category, CategoryPatch};
pub use vendor::{Vendor, VendorPatch};
