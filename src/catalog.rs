use crate::error::KioskError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative monetary value.
///
/// Wraps `rust_decimal::Decimal` so menu prices and totals are summed
/// exactly instead of accumulating binary floating-point error. `Display`
/// always renders two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, KioskError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(KioskError::ValidationError(format!(
                "Price must not be negative: {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A single sellable item as defined by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A named group of menu items. Insertion order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// The static definition of everything on sale, grouped by category.
///
/// Built once at session start and treated as immutable from then on;
/// display numbering is derived purely from traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The built-in snack and drink menu.
    pub fn standard() -> Self {
        Self::new(vec![
            Category::new(
                "Snacks",
                vec![
                    MenuItem::new("Chips", Price(dec!(1.50))),
                    MenuItem::new("Cookies", Price(dec!(2.00))),
                    MenuItem::new("Pretzels", Price(dec!(1.25))),
                    MenuItem::new("Fruit Bar", Price(dec!(2.50))),
                    MenuItem::new("Granola Bar", Price(dec!(1.75))),
                ],
            ),
            Category::new(
                "Drinks",
                vec![
                    MenuItem::new("Water", Price(dec!(1.00))),
                    MenuItem::new("Soda", Price(dec!(2.25))),
                    MenuItem::new("Juice", Price(dec!(2.75))),
                    MenuItem::new("Coffee", Price(dec!(3.00))),
                    MenuItem::new("Tea", Price(dec!(2.50))),
                ],
            ),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Appends an item to the named category, creating the category at the
    /// end of the catalog on first appearance.
    pub fn add_item(&mut self, category: &str, item: MenuItem) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.items.push(item),
            None => self.categories.push(Category::new(category, vec![item])),
        }
    }
}
