//! Bowling scorekeeper (default binary).
//!
//! Bowls the rolls given on the command line and prints the scoreboard, or
//! runs an interactive scoreboard in the terminal when no rolls are given.

use std::fs::File;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::cli::{parse_cli_args, CliConfig, USAGE};
use tui_bowling::core::Game;
use tui_bowling::input::{handle_key_event, parse_tokens, should_quit};
use tui_bowling::roll_log::{LogConfig, RollLog};
use tui_bowling::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_cli_args(&args)?;

    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let log_config = LogConfig::from_env().with_path_override(config.log_path.clone());
    let mut log = RollLog::open(&log_config);

    if config.is_interactive() {
        let mut term = TerminalRenderer::new();
        term.enter()?;

        let result = run(&mut term, &mut log);

        // Always try to restore terminal state.
        let _ = term.exit();
        result
    } else {
        bowl_all(&config, &mut log)
    }
}

fn bowl_all(config: &CliConfig, log: &mut RollLog<File>) -> Result<()> {
    let actions = parse_tokens(config.rolls.iter().map(String::as_str))
        .map_err(|token| anyhow!("unrecognised roll: {}", token))?;

    let mut game = Game::new();
    for (i, action) in actions.into_iter().enumerate() {
        if let Err(e) = log.apply(&mut game, action) {
            eprintln!("[bowling] stopped at ball {}", i + 1);
            print_game(config, &game)?;
            return Err(anyhow!("ball {}: {}", i + 1, e));
        }
    }

    print_game(config, &game)
}

fn print_game(config: &CliConfig, game: &Game) -> Result<()> {
    if config.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        println!("{}", game.render_scoreboard());
        println!("Score: {}", game.score());
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, log: &mut RollLog<File>) -> Result<()> {
    let mut game = Game::new();
    let mut view = GameView::default();
    let mut snap = game.snapshot();
    let mut lines = Vec::new();
    let mut status: Option<String> = None;

    loop {
        game.snapshot_into(&mut snap);
        let (w, _h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.set_max_width(usize::from(w));
        view.render_into(&snap, status.as_deref(), &mut lines);
        term.draw(&lines)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    status = log.apply(&mut game, action).err().map(|e| e.to_string());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
