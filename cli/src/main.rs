use anyhow::Context;
use clap::Parser;
use expositio::cli::{Args, Command};
use expositio::commands::{self, RenderOptions};
use expositio::config::{Settings, load_settings};
use expositio::error::{AppError, AppResult};
use expositio::logger::setup_logger;
use std::fs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = match load_settings(args.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    setup_logger(settings.logging()).context("Failed to initialize logger")?;

    if let Err(e) = run(args.command, &settings).await {
        log::error!("{e}");
        exit_with(&e);
    }
    Ok(())
}

async fn run(command: Command, settings: &Settings) -> AppResult<()> {
    match command {
        Command::Resolve { config } => {
            println!("{}", commands::resolve(&config)?);
        }
        Command::Themes => {
            println!("{}", commands::list_themes(settings)?);
        }
        Command::Render {
            config,
            theme,
            variant,
            preload_all,
            out,
        } => {
            let options = RenderOptions {
                config,
                theme,
                variant,
                preload_all,
            };
            let html = commands::render(settings, &options).await?;
            match out {
                Some(path) => {
                    fs::write(&path, html)?;
                    eprintln!("Wrote {}", path.display());
                }
                None => print!("{html}"),
            }
        }
        Command::Chart { preset, data, kind } => {
            println!(
                "{}",
                commands::chart(preset.as_deref(), data.as_deref(), &kind)?
            );
        }
    }
    Ok(())
}

fn exit_with(error: &AppError) -> ! {
    eprintln!("{error}");
    if let Some(suggestion) = error.suggestion() {
        eprintln!("\n{suggestion}");
    }
    std::process::exit(1);
}
