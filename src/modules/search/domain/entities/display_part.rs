use serde::Serialize;

/// Fully defaulted view of one catalog part, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPart {
    /// 1-based position in the result set
    pub id: usize,
    pub part_number: String,
    pub name: String,
    pub category: String,
    pub dimensions: String,
    pub specs: PartSpecs,
    pub suppliers: Vec<SupplierOffer>,
    pub alternatives: Vec<String>,
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartSpecs {
    pub supplier: String,
    pub availability: String,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOffer {
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
    pub shipping: String,
    pub url: String,
}

impl SupplierOffer {
    /// Prices of zero mean "not quoted" and are not shown
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }
}

impl DisplayPart {
    /// First listed supplier, if any
    pub fn primary_supplier(&self) -> Option<&SupplierOffer> {
        self.suppliers.first()
    }
}
