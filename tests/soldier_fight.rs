mod common;

use castlequest::adventure::{Ending, ItemKind};
use common::{journal_has, place, queue, run, session, session_with_rolls, TestSession};

fn in_garden(game: &mut TestSession) {
    let garden = game.castle().rooms.garden;
    place(game, garden);
}

#[test]
fn nobody_to_fight_outside() {
    let mut game = session(&[]);
    run(&mut game, "fight soldiers");
    assert_eq!(
        game.console().last_output(),
        Some("There is no one to fight here.")
    );
}

#[test]
fn singular_soldier_is_not_the_soldier_fight() {
    let mut game = session(&[]);
    in_garden(&mut game);
    run(&mut game, "fight soldier");
    assert_eq!(
        game.console().last_output(),
        Some("There is nothing to fight here.")
    );
    assert_eq!(game.current_room().soldiers().len(), 1);
    assert_eq!(game.player().health(), 100);
}

#[test]
fn healing_without_items_loses_ten_health_a_round() {
    let mut game = session(&[]);
    in_garden(&mut game);
    queue(&mut game, &["heal"; 10]);
    run(&mut game, "fight soldiers");

    assert!(game.console().saw("You are fighting Soldier in the Garden!"));
    assert!(game.console().saw("You have no healing items left!"));
    for health in [90, 50, 10, 0] {
        assert!(journal_has(
            &game,
            &format!(
                "Soldier in the Garden attacked! Player took 10 damage. Current health: {}.",
                health
            )
        ));
    }
    assert_eq!(game.player().health(), 0);
    assert_eq!(game.ending(), Some(Ending::Defeat));
    assert_eq!(game.current_room().soldiers().len(), 1);
    assert_eq!(game.console().pending_input(), 0);
}

#[test]
fn soldier_bar_uses_the_fixed_scale() {
    let mut game = session(&[]);
    in_garden(&mut game);
    run(&mut game, "fight soldiers");
    assert!(game
        .console()
        .saw("Soldier in the Garden Health: [████████████████----] 50/60"));
    assert!(game
        .console()
        .saw("Knight Health: [████████████████████] 100/100"));
}

#[test]
fn accepted_upgrade_enlarges_the_backpack() {
    let mut game = session_with_rolls(&[], &[0]);
    in_garden(&mut game);
    queue(&mut game, &["attack", "attack", "yes"]);
    run(&mut game, "fight soldiers");

    assert!(game.console().saw("You have defeated Soldier in the Garden!"));
    assert!(game.console().saw("A new backpack with capacity 10 is available!"));
    assert_eq!(
        game.console().last_output(),
        Some("You upgraded your backpack to a capacity of 10!")
    );
    assert_eq!(game.player().backpack.capacity(), 10);
    assert_eq!(game.player().health(), 90);
    assert!(game.current_room().soldiers().is_empty());
    assert_eq!(game.ending(), None);
    assert!(journal_has(&game, "Defeated Soldier in the Garden in combat."));
}

#[test]
fn declined_upgrade_keeps_the_backpack() {
    let mut game = session_with_rolls(&[], &[0]);
    in_garden(&mut game);
    queue(&mut game, &["attack", "attack", "no"]);
    run(&mut game, "fight soldiers");
    assert_eq!(
        game.console().last_output(),
        Some("You decided to keep your current backpack.")
    );
    assert_eq!(game.player().backpack.capacity(), 5);
}

#[test]
fn full_heal_reward() {
    let mut game = session_with_rolls(&[], &[1]);
    in_garden(&mut game);
    queue(&mut game, &["attack", "attack"]);
    run(&mut game, "fight soldiers");
    assert!(game.console().saw("You are rewarded with a full heal!"));
    assert_eq!(game.player().health(), 100);
}

#[test]
fn enhanced_sword_reward_needs_room() {
    let mut game = session_with_rolls(&[], &[2]);
    in_garden(&mut game);
    queue(&mut game, &["attack", "attack"]);
    run(&mut game, "fight soldiers");
    assert!(game.player().backpack.contains(ItemKind::EnhancedSword));

    let mut game = session_with_rolls(&[], &[2]);
    for _ in 0..5 {
        game.player_mut().backpack.add(ItemKind::HealthBag);
    }
    in_garden(&mut game);
    queue(&mut game, &["attack", "attack"]);
    run(&mut game, "fight soldiers");
    assert!(!game.player().backpack.contains(ItemKind::EnhancedSword));
    assert!(game.console().saw("your backpack is full"));
}

#[test]
fn shield_softens_soldier_blows() {
    let mut game = session(&[]);
    game.player_mut().equip_shield();
    in_garden(&mut game);
    queue(&mut game, &["attack", "attack"]);
    run(&mut game, "fight soldiers");
    assert_eq!(game.player().health(), 120);
    assert!(journal_has(
        &game,
        "Soldier in the Garden attacked! Player took 0 damage. Current health: 120."
    ));
}
