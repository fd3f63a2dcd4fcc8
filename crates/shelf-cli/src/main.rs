//! Shelf CLI - keep track of a book collection and who borrowed what
//!
//! This is the command-line interface for Shelf. With no subcommand it runs
//! the interactive menu; each menu action is also available as a subcommand.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use env_logger::Env;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{books, loans, menu, misc};
use crate::ui::print_error;

fn main() {
    // Log to stderr, `SHELF_LOG=debug` for load/save traces.
    env_logger::Builder::from_env(Env::default().filter_or("SHELF_LOG", "warn")).init();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        print_error(&ui_ctx, &format!("{}", e), errors::error_hint(&e));
        std::process::exit(errors::exit_code(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => {
            menu::handle_menu(ctx)?;
        }
        Some(Commands::Add(args)) => {
            books::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            books::handle_list(ctx, args)?;
        }
        Some(Commands::Search(args)) => {
            books::handle_search(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            books::handle_show(ctx, args)?;
        }
        Some(Commands::Borrow(args)) => {
            loans::handle_borrow(ctx, args)?;
        }
        Some(Commands::Return(args)) => {
            loans::handle_return(ctx, args)?;
        }
        Some(Commands::Loans(args)) => {
            loans::handle_loans(ctx, args)?;
        }
        Some(Commands::Status) => {
            misc::handle_status(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args.shell)?;
        }
    }
    Ok(())
}
