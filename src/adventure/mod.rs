//! Castle adventure: world model, combat, and the interactive session.
//!
//! The world is a fixed [`Castle`] of rooms held in a [`RoomGraph`] arena.
//! A [`GameSession`] owns the castle, the knight and the dragon, and reads
//! commands from a [`Console`] until the dragon falls, the knight falls, or
//! the player quits.

pub mod castle;
pub mod combat;
pub mod commands;
pub mod console;
pub mod entity;
pub mod errors;
pub mod inventory;
pub mod items;
pub mod journal;
pub mod player;
pub mod render;
pub mod rng;
pub mod room;
pub mod session;

pub use castle::{Castle, CastleRooms, SECRET_DIRECTION};
pub use combat::{
    BossFight, BossRefusal, CombatAction, CombatEvent, Dragon, FightStatus, MookFight, Reward,
    RewardOutcome,
};
pub use commands::{Command, Flow, COMMAND_WORDS};
pub use console::{tokenize, Console, ScriptedConsole, TerminalConsole, PROMPT};
pub use entity::{Soldier, SoldierId, Vitals};
pub use errors::GameError;
pub use inventory::{Inventory, BACKPACK_UPGRADE_STEP, DEFAULT_BACKPACK_CAPACITY};
pub use items::{ItemKind, UnknownItem};
pub use journal::{Journal, DEFAULT_JOURNAL_FILE};
pub use player::Player;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use room::{ExitOutcome, Room, RoomGraph, RoomId};
pub use session::{Ending, GameSession};
