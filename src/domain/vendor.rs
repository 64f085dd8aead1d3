// Market Directory - Vendor Entity

use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// Market vendor. Serialized with camelCase field names
/// (`firstName`/`lastName`) on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Vendor {
    /// Create a vendor that has not been persisted yet (no id).
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Vendor {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Overlay the provided patch fields onto a copy of this vendor.
    ///
    /// Returns the merged vendor when at least one field actually changed,
    /// `None` when nothing changed.
    pub fn apply_patch(&self, patch: &VendorPatch) -> Option<Vendor> {
        let mut merged = self.clone();

        if let Some(first_name) = &patch.first_name {
            merged.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            merged.last_name = last_name.clone();
        }

        (merged != *self).then_some(merged)
    }
}

impl Entity for Vendor {
    const KIND: &'static str = "vendor";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Partial-update body for a vendor. Absent fields mean "no change
/// requested"; a body `id` is ignored (the path id governs).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
