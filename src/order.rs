use crate::catalog::{MenuItem, Price};

/// One recorded selection: the item name and its price at selection time.
///
/// The price is copied out of the menu when the line is created, so a later
/// change to the catalog cannot retroactively alter a placed line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub name: String,
    pub unit_price: Price,
}

impl From<&MenuItem> for OrderLine {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            unit_price: item.price,
        }
    }
}

/// The selections accumulated over one session, in selection order.
///
/// Append-only while the session runs; consumed once by the receipt writer.
#[derive(Debug, Default)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OrderLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact sum of all unit prices.
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::ZERO, |acc, line| acc + line.unit_price)
    }
}
