//! Command parsing and the handlers behind each command word.

use log::debug;

use super::castle::SECRET_DIRECTION;
use super::combat::{
    BossFight, BossRefusal, CombatAction, CombatEvent, FightStatus, MookFight, RewardOutcome,
    DRAGON_MAX_HEALTH, KNIGHT_DISPLAY_MAX, SOLDIER_DISPLAY_MAX,
};
use super::console::{Console, PROMPT};
use super::errors::GameError;
use super::inventory::BACKPACK_UPGRADE_STEP;
use super::items::ItemKind;
use super::render::{health_bar, inventory_lines, narrate};
use super::rng::RandomSource;
use super::room::ExitOutcome;
use super::session::{Ending, GameSession};

/// Command words listed by `help` and the welcome banner.
pub const COMMAND_WORDS: [&str; 12] = [
    "help",
    "go",
    "quit",
    "pick",
    "inventory",
    "drop",
    "read",
    "solve",
    "fight",
    "fight soldiers",
    "use",
    "look",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Go(Option<String>),     // go north
    Quit,
    Pick(Option<String>),   // pick health drink
    Inventory,
    Drop(Option<String>),   // drop key
    Read,
    Solve,
    Fight,                  // the dragon
    FightSoldiers,
    Use(Option<String>),    // use health drink
    Look,
    Unknown(Option<String>),
}

impl Command {
    /// Build a command from a tokenized line. Word and argument are
    /// lowercased; a missing word is `Unknown`.
    pub fn parse(word: Option<&str>, argument: Option<&str>) -> Command {
        let Some(word) = word else {
            return Command::Unknown(None);
        };
        let word = word.to_lowercase();
        let argument = argument.map(str::to_lowercase);
        match word.as_str() {
            "help" => Command::Help,
            "go" => Command::Go(argument),
            "quit" => Command::Quit,
            "pick" => Command::Pick(argument.map(|a| match a.strip_prefix("up ") {
                Some(rest) => rest.to_string(),
                None => a,
            })),
            "inventory" => Command::Inventory,
            "drop" => Command::Drop(argument),
            "read" => Command::Read,
            "solve" => Command::Solve,
            "fight" => match argument.as_deref() {
                Some("soldiers") => Command::FightSoldiers,
                _ => Command::Fight,
            },
            "use" => Command::Use(argument),
            "look" => Command::Look,
            _ => Command::Unknown(Some(word)),
        }
    }
}

/// Whether the read loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl<C: Console, R: RandomSource> GameSession<C, R> {
    /// Run one command against the session.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow, GameError> {
        debug!("dispatch {:?}", command);
        match command {
            Command::Help => self.print_help()?,
            Command::Go(direction) => self.do_go(direction)?,
            Command::Quit => {
                self.record("Player quit the game.");
                return Ok(Flow::Quit);
            }
            Command::Pick(item) => self.do_pick(item)?,
            Command::Inventory => self.show_inventory()?,
            Command::Drop(item) => self.do_drop(item)?,
            Command::Read => self.do_read()?,
            Command::Solve => self.do_solve()?,
            Command::Fight => self.do_fight()?,
            Command::FightSoldiers => self.do_fight_soldiers()?,
            Command::Use(item) => self.do_use(item)?,
            Command::Look => self.do_look()?,
            Command::Unknown(_) => self.say("Don't know what you mean.")?,
        }
        Ok(Flow::Continue)
    }

    fn print_help(&mut self) -> Result<(), GameError> {
        self.say("You are lost. You are alone. You wander around the deserted complex.")?;
        self.say("")?;
        self.say(&format!(
            "Your command words are: {}",
            COMMAND_WORDS.join(", ")
        ))
    }

    fn do_go(&mut self, direction: Option<String>) -> Result<(), GameError> {
        let Some(direction) = direction else {
            return self.say("Go where?");
        };
        let from = self.player.location();
        match self
            .castle
            .graph
            .resolve_exit(from, &direction, &self.player.backpack)
        {
            ExitOutcome::NoExit => {
                self.record(&format!("Attempted to go {}, but there is no door.", direction));
                self.say("There is no door!")
            }
            ExitOutcome::Locked => {
                self.record(&format!(
                    "Attempted to go {}, but the door is locked.",
                    direction
                ));
                self.say("The door is locked. You need a key to enter.")
            }
            ExitOutcome::Open(to) => {
                let entry = format!(
                    "Player moved from {} to {}.",
                    self.castle.graph.room(from).description,
                    self.castle.graph.room(to).description
                );
                self.record(&entry);
                self.player.move_to(to);
                let room = self.castle.graph.room(to);
                let description = room.long_description();
                let contents = room.describe_contents();
                self.say(&description)?;
                self.say(&format!("Room contents: {}", contents))?;
                if to == self.castle.rooms.dragons_lair {
                    self.say("You have entered the Dragon's Lair. The dragon roars fiercely!")?;
                }
                Ok(())
            }
        }
    }

    fn do_pick(&mut self, name: Option<String>) -> Result<(), GameError> {
        let Some(name) = name else {
            return self.say("Pick up what?");
        };
        let here = self.player.location();
        let item = match name.parse::<ItemKind>() {
            Ok(item) if self.castle.graph.room(here).has_item(item) => item,
            _ => {
                self.record(&format!("Tried to pick up {}, but it was not found.", name));
                return self.say(&format!("There is no {} here.", name));
            }
        };

        if item == ItemKind::Shield {
            self.castle.graph.room_mut(here).remove_item(item);
            self.player.equip_shield();
            self.record("Player picked up and equipped the shield.");
            return self.say("You picked up and equipped the shield! Your protection is increased.");
        }

        if self.player.backpack.add(item) {
            self.castle.graph.room_mut(here).remove_item(item);
            self.record(&format!("Player picked up {}.", item));
            self.say(&format!("You picked up the {}.", item))
        } else {
            self.record(&format!("Failed to pick up {} (backpack full).", item));
            self.say("Your backpack is full!")
        }
    }

    fn show_inventory(&mut self) -> Result<(), GameError> {
        for line in inventory_lines(&self.player.backpack) {
            self.say(&line)?;
        }
        Ok(())
    }

    fn do_drop(&mut self, name: Option<String>) -> Result<(), GameError> {
        let Some(name) = name else {
            return self.say("Drop what?");
        };
        let carried = name
            .parse::<ItemKind>()
            .ok()
            .filter(|item| self.player.backpack.contains(*item));
        let Some(item) = carried else {
            return self.say(&format!("You are not carrying {}.", name));
        };
        self.player.backpack.remove(item);
        let here = self.player.location();
        self.castle.graph.room_mut(here).add_item(item);
        let entry = format!(
            "Player dropped {} in {}.",
            item,
            self.castle.graph.room(here).description
        );
        self.record(&entry);
        self.say(&format!("You dropped the {}.", item))
    }

    fn do_read(&mut self) -> Result<(), GameError> {
        match self.current_room().clue.clone() {
            Some(clue) => {
                self.record("Player read a clue.");
                self.say(&format!("Clue: {}", clue))
            }
            None => self.say("There is nothing to read here."),
        }
    }

    /// The library bookshelf: solving re-opens the secret passage.
    fn do_solve(&mut self) -> Result<(), GameError> {
        let library = self.castle.rooms.library;
        if self.player.location() != library {
            return self.say("There's nothing to solve here.");
        }
        let hidden = self.castle.rooms.hidden_chamber;
        self.castle.graph.set_exit(library, SECRET_DIRECTION, hidden);
        self.record("Player solved the library puzzle. Secret passage unlocked.");
        self.say("You solved the puzzle! A secret passage opens.")
    }

    fn do_use(&mut self, name: Option<String>) -> Result<(), GameError> {
        let Some(name) = name else {
            return self.say("Use what?");
        };
        match name.parse::<ItemKind>() {
            Ok(item) => match item.heal_amount() {
                Some(amount) => {
                    if !self.player.backpack.remove(item) {
                        return self.say(&format!("You don't have a {}.", item));
                    }
                    let restored = self.player.heal(amount);
                    self.record(&format!(
                        "Player used a {} and restored {} health.",
                        item, restored
                    ));
                    self.say(&format!(
                        "You used a {} and restored {} health.",
                        item, restored
                    ))
                }
                None => self.say(&format!("You can't use {}.", item)),
            },
            Err(_) => self.say(&format!("You can't use {}.", name)),
        }
    }

    fn do_look(&mut self) -> Result<(), GameError> {
        let contents = self.current_room().describe_contents();
        self.say(&format!("Room contents: {}", contents))
    }

    /// Interactive dragon fight. Runs until someone falls or input closes.
    fn do_fight(&mut self) -> Result<(), GameError> {
        if self.player.location() != self.castle.rooms.dragons_lair {
            self.record("Player tried to fight, but there was nothing to fight.");
            return self.say("There is nothing to fight here.");
        }
        self.record("Player engaged the dragon in combat.");
        let (mut fight, opening) = match BossFight::engage(&self.player, &mut self.dragon) {
            Ok(engaged) => engaged,
            Err(BossRefusal::NoSword) => {
                self.record("Player tried to fight the dragon without a sword.");
                return self.say("You need a sword to fight the dragon!");
            }
            Err(BossRefusal::AlreadySlain) => {
                return self.say("The dragon lies slain. There is nothing left to fight.");
            }
        };
        self.report(&opening)?;

        while fight.status() == FightStatus::AwaitingAction {
            let knight = health_bar("Knight", self.player.health(), KNIGHT_DISPLAY_MAX);
            let dragon = health_bar("Dragon", self.dragon.health, DRAGON_MAX_HEALTH);
            self.say(&knight)?;
            self.say(&dragon)?;
            self.say("What will you do? (attack / heal)")?;
            let Some(line) = self.ask(PROMPT)? else {
                self.record("Input closed during the dragon fight.");
                self.finish(Ending::Quit);
                return Ok(());
            };
            let action = CombatAction::parse(&line);
            let events = fight.step(&action, &mut self.player, &mut self.dragon, &mut self.rng);
            self.report(&events)?;
        }

        match fight.status() {
            FightStatus::Victory => {
                self.record("Player defeated the dragon and rescued the Queen.");
                self.say("The Queen is safe! Congratulations, you win!")?;
                self.finish(Ending::Victory);
            }
            FightStatus::Defeat => self.finish(Ending::Defeat),
            FightStatus::AwaitingAction => {}
        }
        Ok(())
    }

    /// Interactive fight against the first soldier in the room.
    fn do_fight_soldiers(&mut self) -> Result<(), GameError> {
        let here = self.player.location();
        let Some((mut fight, opening)) = MookFight::engage(self.castle.graph.room(here)) else {
            return self.say("There is no one to fight here.");
        };
        self.report(&opening)?;

        while fight.status() == FightStatus::AwaitingAction {
            let soldier_health = self
                .castle
                .graph
                .room(here)
                .soldiers()
                .iter()
                .find(|s| s.id == fight.soldier())
                .map(|s| (s.name.clone(), s.vitals.health()));
            let knight = health_bar("Knight", self.player.health(), self.player.max_health());
            self.say(&knight)?;
            if let Some((name, health)) = soldier_health {
                self.say(&health_bar(&name, health, SOLDIER_DISPLAY_MAX))?;
            }
            self.say("What will you do? (attack / heal)")?;
            let Some(line) = self.ask(PROMPT)? else {
                self.record("Input closed during a soldier fight.");
                self.finish(Ending::Quit);
                return Ok(());
            };
            let action = CombatAction::parse(&line);
            let room = self.castle.graph.room_mut(here);
            let events = fight.step(&action, &mut self.player, room, &mut self.rng);
            self.report(&events)?;

            for event in &events {
                if let CombatEvent::Rewarded(RewardOutcome::UpgradeOffered { capacity }) = event {
                    self.offer_backpack_upgrade(*capacity)?;
                }
            }
        }

        if fight.status() == FightStatus::Defeat {
            self.finish(Ending::Defeat);
        }
        Ok(())
    }

    /// Ask whether to take the bigger backpack. Anything but `yes` declines.
    fn offer_backpack_upgrade(&mut self, capacity: usize) -> Result<(), GameError> {
        self.say(&format!(
            "A new backpack with capacity {} is available!",
            capacity
        ))?;
        self.say("Do you want to upgrade? (yes/no)")?;
        let answer = self.ask(PROMPT)?.unwrap_or_default();
        if answer.trim().eq_ignore_ascii_case("yes") {
            self.player.upgrade_backpack(BACKPACK_UPGRADE_STEP);
            let capacity = self.player.backpack.capacity();
            self.record(&format!("Player upgraded the backpack to {} slots.", capacity));
            self.say(&format!(
                "You upgraded your backpack to a capacity of {}!",
                capacity
            ))
        } else {
            self.say("You decided to keep your current backpack.")
        }
    }

    /// Print each event and journal the notable ones.
    fn report(&mut self, events: &[CombatEvent]) -> Result<(), GameError> {
        for event in events {
            self.say(&narrate(event))?;
            let entry = match event {
                CombatEvent::Engaged { opponent } => {
                    Some(format!("Engaged in a fight with {}.", opponent))
                }
                CombatEvent::DragonFire { damage, health } => Some(format!(
                    "Dragon attacked! Player took {} damage. Current health: {}.",
                    damage, health
                )),
                CombatEvent::CounterAttack {
                    attacker,
                    damage,
                    health,
                } => Some(format!(
                    "{} attacked! Player took {} damage. Current health: {}.",
                    attacker, damage, health
                )),
                CombatEvent::Healed { item, restored } => Some(format!(
                    "Player used a {} in combat and restored {} health.",
                    item, restored
                )),
                CombatEvent::TurnLost { action } => {
                    Some(format!("Invalid combat action '{}'; turn lost.", action))
                }
                CombatEvent::OpponentDefeated { opponent } => {
                    Some(format!("Defeated {} in combat.", opponent))
                }
                CombatEvent::PlayerDefeated { by } => {
                    Some(format!("Player was defeated by {}.", by))
                }
                CombatEvent::Rewarded(RewardOutcome::FullHeal { restored }) => Some(format!(
                    "Player was rewarded with a full heal ({} health).",
                    restored
                )),
                CombatEvent::Rewarded(RewardOutcome::EnhancedSword { stored: true }) => {
                    Some("Player was rewarded with an enhanced sword.".to_string())
                }
                CombatEvent::Rewarded(RewardOutcome::EnhancedSword { stored: false }) => Some(
                    "Enhanced sword reward lost (backpack full).".to_string(),
                ),
                _ => None,
            };
            if let Some(entry) = entry {
                self.record(&entry);
            }
        }
        Ok(())
    }
}
