use crate::catalog::{Catalog, MenuItem};
use crate::error::Result;
use std::io::Write;

/// The dense 1-based numbering of a catalog, built once per session.
///
/// Numbering continues across categories in traversal order, so every item
/// gets exactly one display number in `1..=max_number()` with no gaps. The
/// menu owns copies of the items; whatever happens to the catalog afterwards
/// cannot change what a number resolves to.
#[derive(Debug)]
pub struct NumberedMenu {
    items: Vec<MenuItem>,
}

impl NumberedMenu {
    /// Writes the human-readable listing to `out` and returns the numbering
    /// that the listing showed.
    ///
    /// An empty catalog (or one with only empty categories) produces a
    /// listing with no item lines and a menu where `max_number()` is 0.
    pub fn present<W: Write>(catalog: &Catalog, out: &mut W) -> Result<Self> {
        writeln!(out, "\n--- Our Menu ---")?;
        let mut items = Vec::with_capacity(catalog.item_count());
        for category in catalog.categories() {
            writeln!(out, "\n--- {} ---", category.name)?;
            for item in &category.items {
                items.push(item.clone());
                writeln!(out, "{}. {:<15} ${}", items.len(), item.name, item.price)?;
            }
        }
        writeln!(out, "----------------")?;
        Ok(Self { items })
    }

    /// The highest valid display number; equals the total item count.
    pub fn max_number(&self) -> usize {
        self.items.len()
    }

    /// Resolves a display number, if it is within `1..=max_number()`.
    pub fn get(&self, number: usize) -> Option<&MenuItem> {
        number.checked_sub(1).and_then(|idx| self.items.get(idx))
    }
}
