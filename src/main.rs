#![deny(warnings)]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use deckui::{
    core::msg::{enhancer::EnhancerMsg, Msg},
    core::state::AppState,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::{app_runner::AppRunner, runtime::Runtime},
    presentation::widgets::print_layout::print_document,
    utils::{initialize_logging, initialize_panic_handler},
};

/// Writes the print layout to stdout instead of opening the terminal UI.
fn print_deck(config: Config, width: u16) -> Result<()> {
    let mut runtime = Runtime::new(AppState::new_with_config(config));
    runtime.send_msg(Msg::Enhancer(EnhancerMsg::BeginPrint));
    runtime.process_all_messages();

    let lines = print_document(runtime.state(), usize::from(width)).unwrap_or_default();
    for line in lines {
        println!("{line}");
    }

    runtime.send_msg(Msg::Enhancer(EnhancerMsg::EndPrint));
    runtime.process_all_messages();
    Ok(())
}

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(path) = &args.deck {
        config = config.with_deck_file(path)?;
    }
    tracing::info!(slides = config.deck.len(), title = %config.deck.title, "deck loaded");

    if args.print {
        return print_deck(config, args.width);
    }

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(config, tui)?;
    if let Some(start) = args.start {
        runner = runner.start_at(start);
    }
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
