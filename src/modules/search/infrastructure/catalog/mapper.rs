use crate::modules::search::domain::entities::{
    DisplayPart, PartSpecs, RawPartRecord, SupplierOffer,
};

pub const DEFAULT_CATEGORY: &str = "Industrial Parts";
pub const DIMENSIONS_FALLBACK: &str = "Contact supplier for specifications";
pub const AVAILABILITY_FALLBACK: &str = "Available";
pub const SHIPPING_PLACEHOLDER: &str = "Contact Supplier";
pub const URL_FALLBACK: &str = "#";
pub const EQUIPMENT_PLACEHOLDER: &str = "Equipment compatibility data coming soon";

/// Maps catalog records to display parts.
///
/// Pure and order preserving: the n-th record becomes the part with id n
/// (1-based). Missing optional fields fall back to fixed values, and empty
/// strings count as missing.
#[derive(Debug, Clone, Default)]
pub struct CatalogMapper;

impl CatalogMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_parts(&self, records: &[RawPartRecord]) -> Vec<DisplayPart> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.map_part(index + 1, record))
            .collect()
    }

    pub fn map_part(&self, id: usize, record: &RawPartRecord) -> DisplayPart {
        DisplayPart {
            id,
            part_number: record.part_number.clone(),
            name: record.name.clone(),
            category: DEFAULT_CATEGORY.to_string(),
            dimensions: Self::text_or(&record.dimensions, DIMENSIONS_FALLBACK),
            specs: PartSpecs {
                supplier: record.supplier.clone(),
                availability: Self::text_or(&record.availability, AVAILABILITY_FALLBACK),
                last_updated: record.last_updated.clone(),
            },
            suppliers: vec![Self::map_supplier(record)],
            alternatives: Vec::new(),
            equipment: vec![EQUIPMENT_PLACEHOLDER.to_string()],
        }
    }

    fn map_supplier(record: &RawPartRecord) -> SupplierOffer {
        SupplierOffer {
            name: record.supplier.clone(),
            price: record.price.unwrap_or(0.0),
            // Only an explicit `false` marks a part as out of stock
            in_stock: record.in_stock != Some(false),
            shipping: SHIPPING_PLACEHOLDER.to_string(),
            url: Self::text_or(&record.product_url, URL_FALLBACK),
        }
    }

    fn text_or(value: &Option<String>, fallback: &str) -> String {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
