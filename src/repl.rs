use std::time::Instant;

use anyhow::{anyhow, Result};
use colored::*;
use rustc_hash::FxHashMap;
use rustyline::DefaultEditor;
use tracing::debug;

use memory_match::{CardHandle, ClickOutcome, GameEvent, MemoryGame, BOARD_SIZE_HINT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Turn over the card with this 1-based label.
    Flip(usize),
    /// Deal a new board; the size is validated by the game.
    Start(String),
    Restart,
    Board,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "memory> ".to_string(),
            history_file: Some(".memory_history".to_string()),
        }
    }
}

/// Lookup table between the labels the player types and card handles.
#[derive(Debug, Default)]
pub struct BoardView {
    handles: Vec<CardHandle>,
    labels: FxHashMap<CardHandle, usize>,
    columns: usize,
}

impl BoardView {
    pub fn for_game(game: &MemoryGame) -> Self {
        let handles: Vec<CardHandle> = game.deck().iter().map(|c| c.handle()).collect();
        let labels = handles
            .iter()
            .enumerate()
            .map(|(i, &handle)| (handle, i + 1))
            .collect();
        Self {
            handles,
            labels,
            columns: game.board_size().grid_columns(),
        }
    }

    pub fn handle(&self, label: usize) -> Option<CardHandle> {
        label.checked_sub(1).and_then(|i| self.handles.get(i)).copied()
    }

    pub fn label(&self, handle: CardHandle) -> usize {
        self.labels.get(&handle).copied().unwrap_or(0)
    }

    pub fn render(&self, game: &MemoryGame) -> String {
        let mut out = String::new();
        for row in self.handles.chunks(self.columns.max(1)) {
            for &handle in row {
                let Some(card) = game.deck().get(handle) else {
                    continue;
                };
                let cell = if card.is_matched() {
                    format!("{:>5}", card.value()).green().to_string()
                } else if card.is_revealed() {
                    format!("{:>5}", card.value()).yellow().bold().to_string()
                } else {
                    format!("{:>5}", format!("#{}", self.label(handle))).dimmed().to_string()
                };
                out.push_str(&cell);
            }
            out.push('\n');
        }
        out
    }
}

pub fn parse_command(input: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [label] if label.parse::<usize>().is_ok() => Ok(ReplCommand::Flip(label.parse()?)),
        ["flip" | "f", label] => Ok(ReplCommand::Flip(label.parse()?)),
        ["start" | "new", size] => Ok(ReplCommand::Start(size.to_string())),
        ["start" | "new"] | ["restart"] => Ok(ReplCommand::Restart),
        ["board" | "b"] => Ok(ReplCommand::Board),
        ["status" | "s"] => Ok(ReplCommand::Status),
        ["help" | "h" | "?"] => Ok(ReplCommand::Help),
        ["quit" | "exit" | "q"] => Ok(ReplCommand::Quit),
        [] => Err(anyhow!("Empty command")),
        _ => Err(anyhow!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            input.trim()
        )),
    }
}

pub struct Repl {
    editor: DefaultEditor,
    config: ReplConfig,
    game: MemoryGame,
    view: BoardView,
}

impl Repl {
    pub fn new(game: MemoryGame, config: ReplConfig) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(history_file) = &config.history_file {
            let _ = editor.load_history(history_file);
        }

        let view = BoardView::for_game(&game);
        Ok(Self {
            editor,
            config,
            game,
            view,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.display_welcome();
        self.handle_events();
        print!("{}", self.view.render(&self.game));

        loop {
            let input = match self.editor.readline(&self.config.prompt) {
                Ok(input) => input,
                Err(_) => {
                    println!("\nGoodbye!");
                    break;
                }
            };
            let _ = self.editor.add_history_entry(input.as_str());

            match parse_command(&input) {
                Ok(ReplCommand::Quit) => {
                    println!("Goodbye!");
                    break;
                }
                Ok(command) => self.execute(command),
                Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
            }
        }

        if let Some(history_file) = &self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }

    fn execute(&mut self, command: ReplCommand) {
        match command {
            ReplCommand::Flip(label) => self.flip(label),
            ReplCommand::Start(size) => {
                if let Err(e) = self.game.start_str(&size) {
                    eprintln!("{}", BOARD_SIZE_HINT.red());
                    eprintln!("{}", e.to_string().dimmed());
                    return;
                }
                self.handle_events();
                print!("{}", self.view.render(&self.game));
            }
            ReplCommand::Restart => {
                self.game.restart();
                self.handle_events();
                print!("{}", self.view.render(&self.game));
            }
            ReplCommand::Board => print!("{}", self.view.render(&self.game)),
            ReplCommand::Status => self.display_status(),
            ReplCommand::Help => self.display_help(),
            ReplCommand::Quit => {}
        }
    }

    fn flip(&mut self, label: usize) {
        let Some(handle) = self.view.handle(label) else {
            eprintln!("{}", format!("There is no card #{}.", label).red());
            return;
        };

        match self.game.click(handle, Instant::now()) {
            Ok(ClickOutcome::Ignored(reason)) => {
                println!("{}", format!("Ignored: {}.", reason).dimmed());
            }
            Ok(ClickOutcome::Mismatched(ticket)) => {
                self.handle_events();
                print!("{}", self.view.render(&self.game));

                // Input is locked until the revert anyway; let the pair stay visible.
                std::thread::sleep(ticket.due().saturating_duration_since(Instant::now()));
                self.game.tick(Instant::now());
                self.handle_events();
                print!("{}", self.view.render(&self.game));
            }
            Ok(_) => {
                self.handle_events();
                print!("{}", self.view.render(&self.game));
            }
            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
        }
    }

    fn handle_events(&mut self) {
        for event in self.game.drain_events() {
            debug!(?event, "game event");
            match event {
                GameEvent::BoardDealt { cards, .. } => {
                    self.view = BoardView::for_game(&self.game);
                    println!("{}", format!("Dealt {} cards face down.", cards).cyan());
                }
                GameEvent::CardRevealed { card, value } => {
                    println!("Card #{} shows {}.", self.view.label(card), value.to_string().bold());
                }
                GameEvent::PairMatched { .. } => {
                    println!("{}", "It's a match!".green().bold());
                }
                GameEvent::PairMismatched { delay, .. } => {
                    println!(
                        "{}",
                        format!("No match. Turning back in {:.1}s...", delay.as_secs_f32()).yellow()
                    );
                }
                GameEvent::CardsHidden { .. } | GameEvent::RevertCancelled { .. } => {}
                GameEvent::GameCompleted { attempts } => {
                    println!(
                        "{}",
                        format!(
                            "Congratulations! You found all {} pairs in {} attempts.",
                            self.game.progress().total_pairs(),
                            attempts
                        )
                        .bright_green()
                        .bold()
                    );
                    println!("{}", "Type 'restart' or 'start <cards>' to play again.".dimmed());
                }
            }
        }
    }

    fn display_welcome(&self) {
        println!("{}", "Memory Match".bright_blue().bold());
        println!("{}", "Find every pair by turning over two cards at a time.".cyan());
        println!("{}", "Type 'help' for available commands".dimmed());
        println!();
    }

    fn display_status(&self) {
        let progress = self.game.progress();
        println!(
            "Board: {}  Pairs: {}/{}  Attempts: {}",
            self.game.board_size(),
            progress.matched_pairs().to_string().green(),
            progress.total_pairs(),
            progress.attempts()
        );
        if self.game.is_completion_visible() {
            println!("{}", "Board cleared!".bright_green());
        }
    }

    fn display_help(&self) {
        println!("{}", "Commands:".bold());
        println!("  <n> | flip <n>      turn over card #n");
        println!("  start <cards>       deal a new board (even, 4-100)");
        println!("  restart             deal a new board of the same size");
        println!("  board               show the board");
        println!("  status              show progress");
        println!("  help                show this help");
        println!("  quit                leave the game");
    }
}
