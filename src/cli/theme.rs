//! `theme` commands: inspect or flip the persisted appearance mode.

use std::cell::RefCell;
use std::rc::Rc;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::storage::{FileStore, KeyValueStore};
use crate::theme::{AppearanceMode, ThemeStore};

/// Appearance mode commands
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Display the current mode
    Show(ThemeShowArgs),
    /// Switch between light and dark
    Toggle,
}

/// Display the current mode
#[derive(Args, Debug)]
pub struct ThemeShowArgs {
    /// Also list every style token of the active mode
    #[arg(long)]
    tokens: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ThemeOutput {
    mode: AppearanceMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tokens: Vec<TokenOutput>,
}

#[derive(Serialize, Debug)]
struct TokenOutput {
    name: &'static str,
    value: String,
}

fn open_store() -> CliResult<ThemeStore<FileStore>> {
    let storage = FileStore::open_default()
        .map_err(|e| CliError::io(format!("Failed to open preferences: {e:#}")))?;
    Ok(ThemeStore::initialize(storage))
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ThemeCommand::Show(args) => args.execute(),
            ThemeCommand::Toggle => toggle(),
        }
    }
}

impl ThemeShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store()?;
        let output = describe(&store, self.tokens);

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize theme: {e}")))?;
            println!("{json}");
        } else {
            println!("Theme: {}", output.mode);
            for token in &output.tokens {
                println!("  --{}: {}", token.name, token.value);
            }
        }

        Ok(())
    }
}

fn describe<S: KeyValueStore>(store: &ThemeStore<S>, with_tokens: bool) -> ThemeOutput {
    let tokens = if with_tokens {
        store
            .current_tokens()
            .entries()
            .into_iter()
            .map(|(name, value)| TokenOutput {
                name,
                value: value.to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    ThemeOutput {
        mode: store.mode(),
        tokens,
    }
}

/// Flips the persisted mode, reporting through a store subscription.
fn toggle() -> CliResult<()> {
    let mut store = open_store()?;
    let switched_to = toggle_and_report(&mut store);
    println!("Theme switched to {switched_to}");
    Ok(())
}

fn toggle_and_report<S: KeyValueStore>(store: &mut ThemeStore<S>) -> AppearanceMode {
    let observed = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&observed);
    let id = store.subscribe(move |ctx| {
        *sink.borrow_mut() = Some(ctx.mode);
    });

    let mode = store.toggle();
    store.unsubscribe(id);

    observed.take().unwrap_or(mode)
}
