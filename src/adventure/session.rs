//! The game session: owns the castle, the knight, the dragon and the I/O
//! collaborators, and runs the read-dispatch loop until the game ends.

use log::{debug, info};

use super::castle::Castle;
use super::combat::Dragon;
use super::commands::{Command, Flow, COMMAND_WORDS};
use super::console::{tokenize, Console, PROMPT};
use super::errors::GameError;
use super::inventory::{Inventory, DEFAULT_BACKPACK_CAPACITY};
use super::journal::Journal;
use super::player::Player;
use super::rng::RandomSource;
use super::room::Room;

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The dragon is slain and the Queen is safe.
    Victory,
    /// The knight fell in combat.
    Defeat,
    /// The player quit or input closed.
    Quit,
}

pub struct GameSession<C: Console, R: RandomSource> {
    pub(crate) castle: Castle,
    pub(crate) player: Player,
    pub(crate) dragon: Dragon,
    pub(crate) console: C,
    pub(crate) rng: R,
    pub(crate) journal: Journal,
    ending: Option<Ending>,
}

impl<C: Console, R: RandomSource> GameSession<C, R> {
    /// A fresh castle with the knight standing outside.
    pub fn new(console: C, rng: R, journal: Journal) -> Self {
        Self::with_backpack_capacity(console, rng, journal, DEFAULT_BACKPACK_CAPACITY)
    }

    pub fn with_backpack_capacity(console: C, rng: R, journal: Journal, capacity: usize) -> Self {
        let castle = Castle::build();
        let player = Player::new(castle.start(), Inventory::new(capacity));
        GameSession {
            castle,
            player,
            dragon: Dragon::new(),
            console,
            rng,
            journal,
            ending: None,
        }
    }

    pub fn castle(&self) -> &Castle {
        &self.castle
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn dragon(&self) -> &Dragon {
        &self.dragon
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn current_room(&self) -> &Room {
        self.castle.graph.room(self.player.location())
    }

    /// Print the welcome, then read and dispatch commands until the game ends.
    pub fn play(&mut self) -> Result<Ending, GameError> {
        self.print_welcome()?;
        while self.ending.is_none() {
            let Some(line) = self.console.read_line(PROMPT)? else {
                self.record("Input closed; game ended.");
                self.finish(Ending::Quit);
                break;
            };
            let (word, argument) = tokenize(&line);
            let command = Command::parse(word.as_deref(), argument.as_deref());
            if self.dispatch(command)? == Flow::Quit {
                self.finish(Ending::Quit);
            }
        }
        self.say("Thank you for playing!")?;
        let ending = self.ending.unwrap_or(Ending::Quit);
        info!("session ended: {:?}", ending);
        Ok(ending)
    }

    pub fn print_welcome(&mut self) -> Result<(), GameError> {
        self.record("Game started.");
        self.say("Welcome, brave knight! The Queen has been captured.")?;
        self.say(
            "Your quest is to navigate the castle, unlock doors, and rescue her from the dragon!",
        )?;
        self.say(&format!(
            "Your command words are: {}",
            COMMAND_WORDS.join(", ")
        ))
    }

    /// Record the first ending reached; later calls are ignored.
    pub(crate) fn finish(&mut self, ending: Ending) {
        if self.ending.is_none() {
            debug!("ending reached: {:?}", ending);
            self.ending = Some(ending);
        }
    }

    pub(crate) fn say(&mut self, text: &str) -> Result<(), GameError> {
        self.console.print(text)?;
        Ok(())
    }

    pub(crate) fn ask(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        Ok(self.console.read_line(prompt)?)
    }

    pub(crate) fn record(&mut self, entry: &str) {
        self.journal.record(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::console::ScriptedConsole;
    use crate::adventure::rng::ScriptedRandom;

    fn session(lines: &[&str]) -> GameSession<ScriptedConsole, ScriptedRandom> {
        GameSession::new(
            ScriptedConsole::new(lines.iter().copied()),
            ScriptedRandom::default(),
            Journal::in_memory(),
        )
    }

    #[test]
    fn quit_ends_with_farewell() {
        let mut game = session(&["quit"]);
        assert_eq!(game.play().unwrap(), Ending::Quit);
        assert_eq!(game.console().last_output(), Some("Thank you for playing!"));
        assert_eq!(game.journal().entries().first().map(String::as_str), Some("Game started."));
        assert!(game
            .journal()
            .entries()
            .iter()
            .any(|e| e == "Player quit the game."));
    }

    #[test]
    fn closed_input_counts_as_quit() {
        let mut game = session(&["look"]);
        assert_eq!(game.play().unwrap(), Ending::Quit);
        assert!(game.console().saw("Room contents: The room is empty."));
    }

    #[test]
    fn configured_backpack_capacity_is_used() {
        let game = GameSession::with_backpack_capacity(
            ScriptedConsole::default(),
            ScriptedRandom::default(),
            Journal::in_memory(),
            2,
        );
        assert_eq!(game.player().backpack.capacity(), 2);
        assert_eq!(game.player().location(), game.castle().rooms.outside);
    }
}
