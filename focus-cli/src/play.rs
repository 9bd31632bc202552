//! Play command - run a game from a command script
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_setup(), read_script(), run_script()
//! - Level 3: parse_command(), execute()
//! - Level 4: tokenizing and formatting utilities

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use focus_core::{Color, GameSession, GameSetup, MoveError, Position};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Game setup JSON file (players and colors)
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,

    /// Command script; read from stdin when omitted
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print the final game state as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line of a script
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move {
        player: String,
        start: Position,
        end: Position,
        pieces: u32,
    },
    Reserve { player: String, target: Position },
    Show(Position),
    ReserveCount(String),
    Captured(String),
    State,
}

/// Tally of a finished script
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub winner: Option<String>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Load the setup (or the default players)
/// 2. Read the script
/// 3. Execute it line by line, echoing results
/// 4. Report the summary
pub fn run(args: PlayArgs) -> Result<()> {
    let mut session = load_setup(&args)?;
    let script = read_script(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_script(&mut session, &script, &mut out)?;

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "Script finished"
    );

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.view())?)?;
    } else {
        report_summary(&summary, &mut out)?;
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_setup(args: &PlayArgs) -> Result<GameSession> {
    let setup = match &args.setup {
        Some(path) => GameSetup::load(path)
            .with_context(|| format!("Failed to load setup: {}", path.display()))?,
        None => GameSetup::default(),
    };
    Ok(setup.to_session()?)
}

fn read_script(args: &PlayArgs) -> Result<String> {
    match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display())),
        None => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            Ok(script)
        }
    }
}

/// Execute every line of `script`, writing one result line per command.
///
/// Rule errors are reported and play continues; lines that do not parse
/// abort the run.
pub fn run_script(
    session: &mut GameSession,
    script: &str,
    out: &mut impl Write,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (number, line) in script.lines().enumerate() {
        let Some(command) =
            parse_command(line).with_context(|| format!("line {}: {:?}", number + 1, line))?
        else {
            continue;
        };

        let is_move = matches!(command, Command::Move { .. } | Command::Reserve { .. });
        match execute(session, &command)? {
            Ok(text) => {
                if is_move {
                    summary.accepted += 1;
                }
                writeln!(out, "{}", text)?;
            }
            Err(err) => {
                if is_move {
                    summary.rejected += 1;
                }
                tracing::debug!(line = number + 1, error = %err, "Command rejected");
                writeln!(out, "error: {}: {}", err.kind(), err.message())?;
            }
        }
    }

    summary.winner = session.winner().map(|p| p.name().to_string());
    Ok(summary)
}

fn report_summary(summary: &ScriptSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "---")?;
    writeln!(
        out,
        "moves accepted: {}, rejected: {}",
        summary.accepted, summary.rejected
    )?;
    match &summary.winner {
        Some(name) => writeln!(out, "winner: {}", name)?,
        None => writeln!(out, "no winner yet")?,
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Parse one script line; blank lines and `#` comments give `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let args: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let command = match args.as_slice() {
        ["move", player, start, end, pieces] => Command::Move {
            player: player.to_string(),
            start: parse_position(start)?,
            end: parse_position(end)?,
            pieces: pieces
                .parse()
                .with_context(|| format!("invalid piece count: {}", pieces))?,
        },
        ["reserve", player, target] => Command::Reserve {
            player: player.to_string(),
            target: parse_position(target)?,
        },
        ["show", position] => Command::Show(parse_position(position)?),
        ["reserve-count", player] => Command::ReserveCount(player.to_string()),
        ["captured", player] => Command::Captured(player.to_string()),
        ["state"] => Command::State,
        [verb, ..] => bail!("unknown command or wrong arguments: {}", verb),
        [] => return Ok(None),
    };

    Ok(Some(command))
}

/// Run one command against the session.
///
/// The outer error aborts the script; the inner one is a rule rejection.
fn execute(session: &mut GameSession, command: &Command) -> Result<Result<String, MoveError>> {
    let result = match command {
        Command::Move {
            player,
            start,
            end,
            pieces,
        } => session
            .move_piece(player, *start, *end, *pieces)
            .map(|outcome| outcome.message()),
        Command::Reserve { player, target } => session
            .place_reserve(player, *target)
            .map(|outcome| outcome.message()),
        Command::Show(position) => session
            .peek(*position)
            .map(|stack| format!("{}: {}", position, format_stack(stack))),
        Command::ReserveCount(player) => session.reserves(player).map(|n| n.to_string()),
        Command::Captured(player) => session.captures(player).map(|n| n.to_string()),
        Command::State => Ok(serde_json::to_string(&session.view())
            .context("Failed to serialize game state")?),
    };
    Ok(result)
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Split on whitespace, keeping double-quoted runs together
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if quoted {
        bail!("unterminated quote");
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

/// `row,col`, parentheses optional
fn parse_position(token: &str) -> Result<Position> {
    let inner = token.trim_start_matches('(').trim_end_matches(')');
    let (row, col) = inner
        .split_once(',')
        .with_context(|| format!("expected row,col but got {}", token))?;
    let row: i8 = row
        .trim()
        .parse()
        .with_context(|| format!("invalid row in {}", token))?;
    let col: i8 = col
        .trim()
        .parse()
        .with_context(|| format!("invalid column in {}", token))?;
    Ok(Position::new(row, col))
}

fn format_stack(stack: &[Color]) -> String {
    if stack.is_empty() {
        return "(empty)".to_string();
    }
    stack.iter().map(Color::to_string).collect::<Vec<_>>().join(" ")
}

// ============================================================================
// TESTS
// ============================================================================
