//! create-tsconfig - scaffold tsconfig files extending @akrc/tsconfig presets

use anyhow::Result;
use clap::Parser;
use tsconfig_core::scaffold::{self, ScaffoldContext, ScaffoldOutcome};
use tsconfig_core::tui::CliPrompt;

#[derive(Parser, Debug)]
#[command(name = "create-tsconfig")]
#[command(about = "Scaffold a tsconfig.json that extends an @akrc/tsconfig preset")]
#[command(version)]
struct Args {
    /// Accept defaults instead of prompting (overwrite allowed, node preset)
    #[arg(short, long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    cliclack::intro("create-tsconfig")?;

    let mut ctx = ScaffoldContext::new(std::env::current_dir()?);
    ctx.yes = args.yes;

    let mut prompt = CliPrompt;
    let outcome = scaffold::run(&ctx, &mut prompt).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match outcome {
        Ok(ScaffoldOutcome::Written { .. }) => {
            cliclack::outro("Happy coding!")?;
            Ok(())
        }
        Ok(ScaffoldOutcome::Aborted) => {
            // Deliberate abort: reported, but still a clean zero exit.
            cliclack::outro_cancel("Aborted.")?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
