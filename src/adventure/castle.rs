//! The fixed castle world: eleven rooms, their exits, items and soldiers.

use super::entity::{Soldier, SoldierId};
use super::items::ItemKind;
use super::room::{Room, RoomGraph, RoomId};

pub const OUTSIDE_DESCRIPTION: &str = "You are outside the castle";
pub const ENTRANCE_HALL_DESCRIPTION: &str =
    "You are in the lobby of the castle, a hall with lights in the ceilings";

/// Direction word of the passage revealed by the library puzzle.
pub const SECRET_DIRECTION: &str = "secret";

const SOLDIER_HEALTH: u32 = 50;
const SOLDIER_DAMAGE: u32 = 10;

/// Ids of the named rooms, for handlers that care where the player stands.
#[derive(Debug, Clone, Copy)]
pub struct CastleRooms {
    pub garden: RoomId,
    pub outside: RoomId,
    pub entrance_hall: RoomId,
    pub dining_room: RoomId,
    pub library: RoomId,
    pub armory: RoomId,
    pub dungeon: RoomId,
    pub tower_room: RoomId,
    pub queens_quarters: RoomId,
    pub dragons_lair: RoomId,
    pub hidden_chamber: RoomId,
}

#[derive(Debug, Clone)]
pub struct Castle {
    pub graph: RoomGraph,
    pub rooms: CastleRooms,
}

impl Castle {
    /// Build the castle in its starting state.
    pub fn build() -> Self {
        let mut graph = RoomGraph::new();

        let garden = graph.add_room(Room::new(
            "you are in the castle's garden, enter the castle to save the queen",
        ));
        let outside = graph.add_room(Room::new(OUTSIDE_DESCRIPTION));
        let entrance_hall = graph.add_room(Room::new(ENTRANCE_HALL_DESCRIPTION));
        let dining_room = graph.add_room(Room::new("table room with dishes on it"));
        let library = graph.add_room(Room::new("An old room with book shelves").with_clue(
            "The bookshelf might hide a secret passage, and the key is in the dungeon.",
        ));
        let armory = graph.add_room(Room::new("A big room of weapons"));
        let dungeon = graph.add_room(Room::new(
            "A dark, damp room with the faint sound of chains rattling",
        ));
        let tower_room = graph.add_room(Room::new(
            "A circular room with a window overlooking the castle grounds",
        ));
        let queens_quarters = graph.add_room(
            Room::new("A luxurious room with elegant furnishings").with_lock(ItemKind::Key),
        );
        let dragons_lair = graph.add_room(Room::new("A fiery chamber where the dragon waits"));
        let hidden_chamber = graph.add_room(Room::new(
            "A secret room concealed behind a bookshelf, full of mysterious artifacts",
        ));

        graph.room_mut(dragons_lair).has_dragon = true;
        graph.room_mut(queens_quarters).has_queen = true;

        let edges: [(RoomId, &str, RoomId); 22] = [
            (garden, "north", outside),
            (outside, "north", entrance_hall),
            (outside, "south", garden),
            (entrance_hall, "south", outside),
            (entrance_hall, "north", dining_room),
            (entrance_hall, "east", library),
            (dining_room, "south", entrance_hall),
            (dining_room, "east", armory),
            (library, "west", entrance_hall),
            (library, "upstairs", tower_room),
            (library, SECRET_DIRECTION, hidden_chamber),
            (armory, "west", dining_room),
            (armory, "downstairs", dungeon),
            (dungeon, "upstairs", armory),
            (dungeon, "west", hidden_chamber),
            (tower_room, "downstairs", library),
            (tower_room, "north", queens_quarters),
            (queens_quarters, "south", tower_room),
            (queens_quarters, "east", dragons_lair),
            (dragons_lair, "west", queens_quarters),
            (hidden_chamber, "out", library),
            (hidden_chamber, "east", dungeon),
        ];
        for (from, direction, to) in edges {
            graph.set_exit(from, direction, to);
        }

        let placements = [
            (armory, ItemKind::Sword),
            (armory, ItemKind::Shield),
            (tower_room, ItemKind::HealthDrink),
            (hidden_chamber, ItemKind::HealthBag),
            (dining_room, ItemKind::HealthBag),
            (dining_room, ItemKind::HealthDrink),
            (library, ItemKind::MagicScroll),
            (dungeon, ItemKind::Key),
            (hidden_chamber, ItemKind::AncientArtifact),
        ];
        for (room, item) in placements {
            graph.room_mut(room).add_item(item);
        }

        graph.room_mut(garden).add_soldier(Soldier::new(
            SoldierId(1),
            "Soldier in the Garden",
            SOLDIER_HEALTH,
            SOLDIER_DAMAGE,
        ));
        graph.room_mut(library).add_soldier(Soldier::new(
            SoldierId(2),
            "Soldier in the Library",
            SOLDIER_HEALTH,
            SOLDIER_DAMAGE,
        ));

        Castle {
            graph,
            rooms: CastleRooms {
                garden,
                outside,
                entrance_hall,
                dining_room,
                library,
                armory,
                dungeon,
                tower_room,
                queens_quarters,
                dragons_lair,
                hidden_chamber,
            },
        }
    }

    /// Where a new knight begins.
    pub fn start(&self) -> RoomId {
        self.rooms.outside
    }
}
