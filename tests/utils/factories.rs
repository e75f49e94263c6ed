/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog records with sensible defaults
use partfinder::modules::search::RawPartRecord;

pub struct PartRecordFactory {
    part_number: String,
    name: String,
    supplier: String,
    price: Option<f64>,
    in_stock: Option<bool>,
    availability: Option<String>,
    product_url: Option<String>,
}

impl Default for PartRecordFactory {
    fn default() -> Self {
        Self {
            part_number: "TEST-001".to_string(),
            name: "Test Part".to_string(),
            supplier: "Test Supply Co".to_string(),
            price: None,
            in_stock: None,
            availability: None,
            product_url: None,
        }
    }
}

impl PartRecordFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The deep groove ball bearing used throughout the scenarios
    pub fn bearing() -> Self {
        Self::new()
            .part_number("6203-2Z")
            .name("Deep Groove Ball Bearing")
            .supplier("ACME")
            .price(4.5)
            .in_stock(true)
    }

    pub fn part_number(mut self, part_number: &str) -> Self {
        self.part_number = part_number.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn supplier(mut self, supplier: &str) -> Self {
        self.supplier = supplier.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn availability(mut self, availability: &str) -> Self {
        self.availability = Some(availability.to_string());
        self
    }

    pub fn product_url(mut self, url: &str) -> Self {
        self.product_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> RawPartRecord {
        RawPartRecord {
            part_number: self.part_number,
            name: self.name,
            supplier: self.supplier,
            price: self.price,
            in_stock: self.in_stock,
            availability: self.availability,
            product_url: self.product_url,
            ..Default::default()
        }
    }
}
