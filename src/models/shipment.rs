//! Shipment model and equipment classes.
//!
//! A [`Shipment`] is a transient value object built per quote or match
//! request. It carries only the physical attributes the engine prices on.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The trailer or truck type a shipment requires.
///
/// Unrecognized equipment names deserialize to [`EquipmentClass::Other`],
/// which prices with the neutral 1.0 multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentClass {
    /// Enclosed dry van trailer.
    DryVan,
    /// Refrigerated trailer.
    Reefer,
    /// Open flatbed trailer.
    Flatbed,
    /// Step deck (drop deck) trailer.
    StepDeck,
    /// Liquid or gas tanker.
    Tanker,
    /// Any equipment class the engine does not recognize.
    #[serde(other)]
    Other,
}

impl EquipmentClass {
    /// Returns the wire name of the equipment class.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentClass::DryVan => "dry_van",
            EquipmentClass::Reefer => "reefer",
            EquipmentClass::Flatbed => "flatbed",
            EquipmentClass::StepDeck => "step_deck",
            EquipmentClass::Tanker => "tanker",
            EquipmentClass::Other => "other",
        }
    }
}

impl fmt::Display for EquipmentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentClass {
    type Err = std::convert::Infallible;

    /// Parses an equipment name; unknown names map to [`EquipmentClass::Other`].
    ///
    /// ```
    /// use freight_engine::models::EquipmentClass;
    ///
    /// let reefer: EquipmentClass = "reefer".parse().unwrap();
    /// assert_eq!(reefer, EquipmentClass::Reefer);
    ///
    /// let hopper: EquipmentClass = "hopper".parse().unwrap();
    /// assert_eq!(hopper, EquipmentClass::Other);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "dry_van" => EquipmentClass::DryVan,
            "reefer" => EquipmentClass::Reefer,
            "flatbed" => EquipmentClass::Flatbed,
            "step_deck" => EquipmentClass::StepDeck,
            "tanker" => EquipmentClass::Tanker,
            _ => EquipmentClass::Other,
        })
    }
}

/// A shipment to be quoted or matched against carriers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Optional caller-supplied identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Linehaul distance in miles.
    pub distance_miles: Decimal,
    /// Gross weight in pounds.
    pub weight_pounds: Decimal,
    /// The required equipment class.
    pub equipment_class: EquipmentClass,
}
