use clap::Parser;
use miette::{IntoDiagnostic, Result};
use snack_kiosk::catalog::Catalog;
use snack_kiosk::menu::NumberedMenu;
use snack_kiosk::reader::CatalogReader;
use snack_kiosk::receipt::ReceiptWriter;
use snack_kiosk::session::OrderSession;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Menu catalog CSV file (optional). Defaults to the built-in menu.
    #[arg(long)]
    menu: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = if let Some(path) = cli.menu {
        let file = File::open(path).into_diagnostic()?;
        CatalogReader::new(file).catalog().into_diagnostic()?
    } else {
        Catalog::standard()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Welcome to our snack and drink selection!").into_diagnostic()?;
    writeln!(out, "Type 'done' at any time to finish your order.").into_diagnostic()?;

    let menu = NumberedMenu::present(&catalog, &mut out).into_diagnostic()?;
    let session = OrderSession::new(menu);
    let order = session.run(stdin.lock(), &mut out).into_diagnostic()?;

    let mut writer = ReceiptWriter::new(out);
    writer.write_receipt(&order).into_diagnostic()?;

    Ok(())
}
