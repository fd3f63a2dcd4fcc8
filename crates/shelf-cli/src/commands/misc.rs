use clap::CommandFactory;
use clap_complete::generate;

use shelf_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::ui::{header, kv, print};

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "shelf", &mut std::io::stdout());
    Ok(())
}

pub fn handle_status(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let ledger = ctx.open_ledger()?;
    let stats = ledger.stats();

    if let Some(h) = header(&ui, "status", Some(ctx.library_name()?)) {
        print(&ui, &h);
    }
    print(&ui, &kv(&ui, "Data file", &ledger.store().location()));
    print(&ui, &kv(&ui, "Available", &stats.available.to_string()));
    print(&ui, &kv(&ui, "On loan", &stats.on_loan.to_string()));
    print(&ui, &kv(&ui, "Total", &stats.total.to_string()));
    Ok(())
}
