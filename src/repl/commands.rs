//! Command registry
//!
//! Every REPL command is a variant of [`Command`], resolved from the first
//! word of an input line.

use std::io::Write;

use rand::{Rng, RngCore};
use tracing::info;

use crate::client::{Fetcher, Transport};
use crate::error::CommandError;
use crate::session::{catch_succeeds, Session};

/// What the loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Everything a command may read or mutate.
pub struct Context<'a, T> {
    pub fetcher: &'a Fetcher<T>,
    pub session: &'a mut Session,
    pub rng: &'a mut dyn RngCore,
    pub out: &'a mut dyn Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Resolves a command from the word that invokes it.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Show the next page of locations",
            Command::MapBack => "Show the previous page of locations",
            Command::Explore => "List the Pokemon in a location area",
            Command::Catch => "Try to catch a Pokemon",
            Command::Inspect => "Show details of a caught Pokemon",
            Command::Pokedex => "List every Pokemon you have caught",
        }
    }

    /// Runs the command with the words that followed its name.
    pub async fn execute<T: Transport>(
        self,
        ctx: &mut Context<'_, T>,
        args: &[String],
    ) -> Result<Outcome, CommandError> {
        match self {
            Command::Help => help(ctx),
            Command::Exit => {
                writeln!(ctx.out, "Closing the Pokedex... Goodbye!")?;
                Ok(Outcome::Exit)
            }
            Command::Map => map_forward(ctx).await,
            Command::MapBack => map_backward(ctx).await,
            Command::Explore => explore(ctx, args).await,
            Command::Catch => catch(ctx, args).await,
            Command::Inspect => inspect(ctx, args),
            Command::Pokedex => pokedex(ctx),
        }
    }
}

fn first_arg<'a>(args: &'a [String], usage: &'static str) -> Result<&'a str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument(usage))
}

fn help<T>(ctx: &mut Context<'_, T>) -> Result<Outcome, CommandError> {
    writeln!(ctx.out)?;
    writeln!(ctx.out, "Welcome to the Pokedex!")?;
    writeln!(ctx.out, "Usage:")?;
    writeln!(ctx.out)?;
    for command in Command::ALL {
        writeln!(ctx.out, "{}: {}", command.name(), command.description())?;
    }
    Ok(Outcome::Continue)
}

async fn show_page<T: Transport>(
    ctx: &mut Context<'_, T>,
    url: Option<&str>,
) -> Result<Outcome, CommandError> {
    let page = ctx.fetcher.location_areas(url).await?;
    for area in &page.results {
        writeln!(ctx.out, "{}", area.name)?;
    }
    ctx.session.advance(&page);
    Ok(Outcome::Continue)
}

async fn map_forward<T: Transport>(ctx: &mut Context<'_, T>) -> Result<Outcome, CommandError> {
    if ctx.session.on_last_page() {
        writeln!(ctx.out, "You're on the last page")?;
        return Ok(Outcome::Continue);
    }
    let next = ctx.session.next().map(str::to_string);
    show_page(ctx, next.as_deref()).await
}

async fn map_backward<T: Transport>(ctx: &mut Context<'_, T>) -> Result<Outcome, CommandError> {
    let Some(previous) = ctx.session.previous().map(str::to_string) else {
        writeln!(ctx.out, "You're on the first page")?;
        return Ok(Outcome::Continue);
    };
    show_page(ctx, Some(&previous)).await
}

async fn explore<T: Transport>(
    ctx: &mut Context<'_, T>,
    args: &[String],
) -> Result<Outcome, CommandError> {
    let area_name = first_arg(args, "explore <area-name>")?;
    writeln!(ctx.out, "Exploring {}...", area_name)?;

    let area = ctx.fetcher.area(area_name).await?;
    writeln!(ctx.out, "Found Pokemon:")?;
    for name in area.pokemon_names() {
        writeln!(ctx.out, " - {}", name)?;
    }
    Ok(Outcome::Continue)
}

async fn catch<T: Transport>(
    ctx: &mut Context<'_, T>,
    args: &[String],
) -> Result<Outcome, CommandError> {
    let name = first_arg(args, "catch <pokemon-name>")?;
    if ctx.session.pokedex.has(name) {
        writeln!(ctx.out, "You already have {} in your Pokedex!", name)?;
        return Ok(Outcome::Continue);
    }

    writeln!(ctx.out, "Throwing a Pokeball at {}...", name)?;
    let pokemon = ctx.fetcher.pokemon(name).await?;

    let roll: u32 = ctx.rng.gen_range(0..100);
    if !catch_succeeds(pokemon.base_experience, roll) {
        writeln!(ctx.out, "{} escaped!", pokemon.name)?;
        return Ok(Outcome::Continue);
    }

    info!(pokemon = %pokemon.name, roll, "caught");
    writeln!(ctx.out, "{} was caught!", pokemon.name)?;
    writeln!(ctx.out, "You may now inspect it with the inspect command.")?;
    ctx.session.pokedex.catch(pokemon);
    Ok(Outcome::Continue)
}

fn inspect<T>(ctx: &mut Context<'_, T>, args: &[String]) -> Result<Outcome, CommandError> {
    let name = first_arg(args, "inspect <pokemon-name>")?;
    let pokemon = ctx
        .session
        .pokedex
        .get(name)
        .ok_or_else(|| CommandError::NotCaught(name.to_string()))?;

    writeln!(ctx.out, "Name: {}", pokemon.name)?;
    writeln!(ctx.out, "Height: {}", pokemon.height)?;
    writeln!(ctx.out, "Weight: {}", pokemon.weight)?;
    writeln!(ctx.out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(ctx.out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(ctx.out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(ctx.out, "  - {}", kind.kind.name)?;
    }
    Ok(Outcome::Continue)
}

fn pokedex<T>(ctx: &mut Context<'_, T>) -> Result<Outcome, CommandError> {
    if ctx.session.pokedex.is_empty() {
        writeln!(ctx.out, "Your Pokedex is empty")?;
        return Ok(Outcome::Continue);
    }
    writeln!(ctx.out, "Your Pokedex:")?;
    for pokemon in ctx.session.pokedex.list() {
        writeln!(ctx.out, " - {}", pokemon.name)?;
    }
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_resolves_by_name() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
            assert!(!command.description().is_empty());
        }
    }

    #[test]
    fn test_unknown_name_does_not_resolve() {
        assert_eq!(Command::from_name("fly"), None);
        assert_eq!(Command::from_name("MAP"), None);
        assert_eq!(Command::from_name(""), None);
    }

    #[test]
    fn test_missing_argument_reports_usage() {
        let err = first_arg(&[], "explore <area-name>").unwrap_err();
        assert_eq!(err.to_string(), "missing argument. Usage: explore <area-name>");
    }
}
