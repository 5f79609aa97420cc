//! Test utilities & fixtures.
//! Builds scripted sessions and walks the knight around the castle.

#![allow(dead_code)] // Each test binary uses a different subset.

use castlequest::adventure::{
    tokenize, Command, Flow, GameSession, Journal, RoomId, ScriptedConsole, ScriptedRandom,
};

pub type TestSession = GameSession<ScriptedConsole, ScriptedRandom>;

/// Fresh session with queued console input and no scripted rolls.
pub fn session(lines: &[&str]) -> TestSession {
    session_with_rolls(lines, &[])
}

pub fn session_with_rolls(lines: &[&str], rolls: &[u32]) -> TestSession {
    GameSession::new(
        ScriptedConsole::new(lines.iter().copied()),
        ScriptedRandom::new(rolls.iter().copied()),
        Journal::in_memory(),
    )
}

/// Dispatch one typed line, exactly as the read loop would.
pub fn run(game: &mut TestSession, line: &str) -> Flow {
    let (word, arg) = tokenize(line);
    game.dispatch(Command::parse(word.as_deref(), arg.as_deref()))
        .expect("scripted console never fails")
}

/// Dispatch several lines in order.
pub fn run_all(game: &mut TestSession, lines: &[&str]) {
    for line in lines {
        run(game, line);
    }
}

/// Queue answers for prompts issued inside a command (fights, offers).
pub fn queue(game: &mut TestSession, lines: &[&str]) {
    for line in lines {
        game.console_mut().push_input(*line);
    }
}

pub fn place(game: &mut TestSession, room: RoomId) {
    game.player_mut().move_to(room);
}

pub fn journal_has(game: &TestSession, entry: &str) -> bool {
    game.journal().entries().iter().any(|e| e == entry)
}
