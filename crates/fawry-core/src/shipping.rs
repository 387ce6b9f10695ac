//! # Shipping
//!
//! Builds the shipment manifest for the shippable lines of a paid order and
//! hands it to a [`ShippingService`].
//!
//! Shipping never affects pricing: by the time a manifest exists the
//! customer has already been charged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::product::Weight;

/// One shippable line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub quantity: u32,
    pub unit_weight: Weight,
}

impl ManifestEntry {
    pub fn line_weight(&self) -> Weight {
        self.unit_weight.multiply_quantity(self.quantity)
    }
}

/// The shipment notice for one order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentManifest {
    entries: Vec<ManifestEntry>,
}

impl ShipmentManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, quantity: u32, unit_weight: Weight) {
        self.entries.push(ManifestEntry {
            name: name.into(),
            quantity,
            unit_weight,
        });
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ quantity × unit weight.
    pub fn total_weight(&self) -> Weight {
        self.entries.iter().map(ManifestEntry::line_weight).sum()
    }
}

/// ```text
/// ** Shipment notice **
/// 2x Cheese 400g
/// 1x Biscuits 700g
/// Total package weight 1.5kg
/// ```
impl fmt::Display for ShipmentManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        for entry in &self.entries {
            writeln!(
                f,
                "{}x {} {}g",
                entry.quantity,
                entry.name,
                entry.unit_weight.grams()
            )?;
        }
        write!(f, "Total package weight {}", self.total_weight())
    }
}

// =============================================================================
// Shipping Service
// =============================================================================

/// Receives the manifest of every paid order that contains shippable lines.
///
/// Called at most once per checkout, only with a non-empty manifest, and
/// only after payment and stock decrement have succeeded.
pub trait ShippingService {
    fn ship(&mut self, manifest: &ShipmentManifest);
}

/// A shipping service that keeps every manifest it is given.
#[derive(Debug, Clone, Default)]
pub struct ShipmentLog {
    shipped: Vec<ShipmentManifest>,
}

impl ShipmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shipped(&self) -> &[ShipmentManifest] {
        &self.shipped
    }

    pub fn last(&self) -> Option<&ShipmentManifest> {
        self.shipped.last()
    }
}

impl ShippingService for ShipmentLog {
    fn ship(&mut self, manifest: &ShipmentManifest) {
        self.shipped.push(manifest.clone());
    }
}
