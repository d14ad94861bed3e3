use crate::catalog::{Catalog, MenuItem, Price};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a menu file: `category, item, price`.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    category: String,
    item: String,
    price: Decimal,
}

/// Reads a catalog from a CSV source.
///
/// Rows are grouped into categories by first appearance, so file order
/// determines both category order and item order within each category.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Consumes the source and builds the catalog, validating every price.
    pub fn catalog(self) -> Result<Catalog> {
        let mut catalog = Catalog::default();
        for record in self.reader.into_deserialize::<CatalogRecord>() {
            let record = record?;
            let price = Price::new(record.price)?;
            catalog.add_item(&record.category, MenuItem::new(record.item, price));
        }
        Ok(catalog)
    }
}
