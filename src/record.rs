use serde::Serialize;

/// Placeholder for every field a vendor's layout does not expose.
pub const SENTINEL: &str = "None";

/// Column header of the output file, in row order.
pub const COLUMNS: [&str; 8] = [
    "link",
    "item_name",
    "price",
    "description",
    "vendor",
    "vendor_id",
    "manufacturer",
    "manufacturer_id",
];

/// Fields an extraction rule can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Link,
    ItemName,
    Price,
    Description,
    // no vendor layout exposes it; the column stays at the sentinel
    #[allow(dead_code)]
    Vendor,
    VendorId,
    Manufacturer,
    ManufacturerId,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Link => "Link",
            Field::ItemName => "ItemName",
            Field::Price => "Price",
            Field::Description => "Description",
            Field::Vendor => "Vendor",
            Field::VendorId => "VendorID",
            Field::Manufacturer => "Manufacturer",
            Field::ManufacturerId => "ManufacturerID",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// One normalized output row. Serializes in `COLUMNS` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub link: String,
    pub item_name: String,
    pub price: String,
    pub description: String,
    pub vendor: String,
    pub vendor_id: String,
    pub manufacturer: String,
    pub manufacturer_id: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            link: SENTINEL.to_string(),
            item_name: SENTINEL.to_string(),
            price: SENTINEL.to_string(),
            description: SENTINEL.to_string(),
            vendor: SENTINEL.to_string(),
            vendor_id: SENTINEL.to_string(),
            manufacturer: SENTINEL.to_string(),
            manufacturer_id: SENTINEL.to_string(),
        }
    }
}

impl Record {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Link => &mut self.link,
            Field::ItemName => &mut self.item_name,
            Field::Price => &mut self.price,
            Field::Description => &mut self.description,
            Field::Vendor => &mut self.vendor,
            Field::VendorId => &mut self.vendor_id,
            Field::Manufacturer => &mut self.manufacturer,
            Field::ManufacturerId => &mut self.manufacturer_id,
        }
    }
}
