// Market Directory - Category Entity

use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// Produce category (e.g. "Fruits", "Nuts").
///
/// The `id` is assigned by the store on first save and never changes
/// afterwards. A body posted by a client carries no `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Category {
    /// Create a category that has not been persisted yet (no id).
    pub fn new(description: impl Into<String>) -> Self {
        Category {
            id: None,
            description: description.into(),
        }
    }

    /// Overlay the provided patch fields onto a copy of this category.
    ///
    /// Returns the merged category when at least one field actually
    /// changed, `None` when the result is field-for-field identical to
    /// the stored record (the caller skips the write in that case).
    pub fn apply_patch(&self, patch: &CategoryPatch) -> Option<Category> {
        let mut merged = self.clone();

        if let Some(description) = &patch.description {
            merged.description = description.clone();
        }

        (merged != *self).then_some(merged)
    }
}

impl Entity for Category {
    const KIND: &'static str = "category";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Partial-update body for a category. An absent field means
/// "no change requested"; a body `id` is ignored (the path id governs).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    pub description: Option<String>,
}
