use crate::error::Result;
use crate::order::Order;
use std::io::Write;

const RECEIPT_WIDTH: usize = 30;
const NAME_WIDTH: usize = 20;

/// Writes the final itemized receipt to any output sink.
pub struct ReceiptWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Prints one line per order line and the exact total, or a short notice
    /// when nothing was selected.
    pub fn write_receipt(&mut self, order: &Order) -> Result<()> {
        if order.is_empty() {
            writeln!(
                self.writer,
                "\nYou didn't select any items. Come back soon!"
            )?;
            return Ok(());
        }

        writeln!(self.writer, "\n{}", "=".repeat(RECEIPT_WIDTH))?;
        writeln!(
            self.writer,
            "{:^width$}",
            "--- Your Receipt ---",
            width = RECEIPT_WIDTH
        )?;
        writeln!(self.writer, "{}", "=".repeat(RECEIPT_WIDTH))?;

        for line in order.lines() {
            writeln!(
                self.writer,
                "{:<width$} ${}",
                line.name,
                line.unit_price,
                width = NAME_WIDTH
            )?;
        }

        writeln!(self.writer, "{}", "-".repeat(RECEIPT_WIDTH))?;
        writeln!(
            self.writer,
            "{:<width$} ${}",
            "Total:",
            order.total(),
            width = NAME_WIDTH
        )?;
        writeln!(self.writer, "{}", "=".repeat(RECEIPT_WIDTH))?;
        writeln!(self.writer, "\nThank you for your order! Enjoy your selections!")?;
        Ok(())
    }
}
