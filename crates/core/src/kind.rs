//! Kind tag enumeration
//!
//! Every configuration object belongs to exactly one kind. The set of kinds
//! is closed and known at build time: generic tooling dispatches on this tag,
//! and the lookup directory must cover every variant before serving queries.
//!
//! `Time` is the one non-object kind. It names a configuration concept with
//! no addressable entities, so catalog queries against it always come back
//! empty rather than failing.

use serde::{Deserialize, Serialize};

/// The closed set of configuration object kinds
///
/// Used for type discrimination and routing in the catalog dispatcher.
/// Adding a new kind requires adding a variant here and registering a
/// lookup for it in every directory build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Animation definitions
    Animation,
    /// Player classes
    Class,
    /// Items
    Item,
    /// Non-player characters
    Npc,
    /// Projectiles
    Projectile,
    /// Quests
    Quest,
    /// Harvestable resources
    Resource,
    /// Shops
    Shop,
    /// Spells
    Spell,
    /// Crafting benches
    Bench,
    /// Maps
    Map,
    /// Common events
    CommonEvent,
    /// Player-scoped switches
    PlayerSwitch,
    /// Player-scoped variables
    PlayerVariable,
    /// Server-scoped switches
    ServerSwitch,
    /// Server-scoped variables
    ServerVariable,
    /// Tilesets
    Tileset,
    /// Time configuration (no addressable objects)
    Time,
}

impl ObjectKind {
    /// All kinds (for exhaustive iteration)
    pub const ALL: [ObjectKind; 18] = [
        ObjectKind::Animation,
        ObjectKind::Class,
        ObjectKind::Item,
        ObjectKind::Npc,
        ObjectKind::Projectile,
        ObjectKind::Quest,
        ObjectKind::Resource,
        ObjectKind::Shop,
        ObjectKind::Spell,
        ObjectKind::Bench,
        ObjectKind::Map,
        ObjectKind::CommonEvent,
        ObjectKind::PlayerSwitch,
        ObjectKind::PlayerVariable,
        ObjectKind::ServerSwitch,
        ObjectKind::ServerVariable,
        ObjectKind::Tileset,
        ObjectKind::Time,
    ];

    /// Get all kinds as a slice
    pub fn all() -> &'static [ObjectKind] {
        &Self::ALL
    }

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            ObjectKind::Animation => "Animation",
            ObjectKind::Class => "Class",
            ObjectKind::Item => "Item",
            ObjectKind::Npc => "Npc",
            ObjectKind::Projectile => "Projectile",
            ObjectKind::Quest => "Quest",
            ObjectKind::Resource => "Resource",
            ObjectKind::Shop => "Shop",
            ObjectKind::Spell => "Spell",
            ObjectKind::Bench => "Bench",
            ObjectKind::Map => "Map",
            ObjectKind::CommonEvent => "CommonEvent",
            ObjectKind::PlayerSwitch => "PlayerSwitch",
            ObjectKind::PlayerVariable => "PlayerVariable",
            ObjectKind::ServerSwitch => "ServerSwitch",
            ObjectKind::ServerVariable => "ServerVariable",
            ObjectKind::Tileset => "Tileset",
            ObjectKind::Time => "Time",
        }
    }

    /// Short identifier (for serialization, config files, etc.)
    pub const fn id(&self) -> &'static str {
        match self {
            ObjectKind::Animation => "animation",
            ObjectKind::Class => "class",
            ObjectKind::Item => "item",
            ObjectKind::Npc => "npc",
            ObjectKind::Projectile => "projectile",
            ObjectKind::Quest => "quest",
            ObjectKind::Resource => "resource",
            ObjectKind::Shop => "shop",
            ObjectKind::Spell => "spell",
            ObjectKind::Bench => "bench",
            ObjectKind::Map => "map",
            ObjectKind::CommonEvent => "common_event",
            ObjectKind::PlayerSwitch => "player_switch",
            ObjectKind::PlayerVariable => "player_variable",
            ObjectKind::ServerSwitch => "server_switch",
            ObjectKind::ServerVariable => "server_variable",
            ObjectKind::Tileset => "tileset",
            ObjectKind::Time => "time",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().find(|k| k.id() == id).copied()
    }

    /// Backing database table name for this kind
    pub const fn table_name(&self) -> &'static str {
        match self {
            ObjectKind::Animation => "animations",
            ObjectKind::Class => "classes",
            ObjectKind::Item => "items",
            ObjectKind::Npc => "npcs",
            ObjectKind::Projectile => "projectiles",
            ObjectKind::Quest => "quests",
            ObjectKind::Resource => "resources",
            ObjectKind::Shop => "shops",
            ObjectKind::Spell => "spells",
            ObjectKind::Bench => "benches",
            ObjectKind::Map => "maps",
            ObjectKind::CommonEvent => "common_events",
            ObjectKind::PlayerSwitch => "player_switches",
            ObjectKind::PlayerVariable => "player_variables",
            ObjectKind::ServerSwitch => "server_switches",
            ObjectKind::ServerVariable => "server_variables",
            ObjectKind::Tileset => "tilesets",
            ObjectKind::Time => "time",
        }
    }

    /// Whether this kind stores addressable objects
    ///
    /// `Time` is a configuration concept with no per-id entities; catalog
    /// queries against it return empty results rather than errors.
    pub const fn has_objects(&self) -> bool {
        !matches!(self, ObjectKind::Time)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(ObjectKind::all().len(), 18);
        assert_eq!(ObjectKind::ALL.len(), 18);
    }

    #[test]
    fn test_kind_ids_are_unique() {
        use std::collections::HashSet;
        let ids: HashSet<&str> = ObjectKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), ObjectKind::ALL.len());
    }

    #[test]
    fn test_table_names_are_unique() {
        use std::collections::HashSet;
        let tables: HashSet<&str> = ObjectKind::ALL.iter().map(|k| k.table_name()).collect();
        assert_eq!(tables.len(), ObjectKind::ALL.len());
    }

    #[test]
    fn test_from_id_roundtrip() {
        for kind in ObjectKind::all() {
            assert_eq!(ObjectKind::from_id(kind.id()), Some(*kind));
        }
    }

    #[test]
    fn test_from_id_rejects_unknown() {
        assert_eq!(ObjectKind::from_id("dragon"), None);
        assert_eq!(ObjectKind::from_id(""), None);
        assert_eq!(ObjectKind::from_id("Item"), None); // case sensitive
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(format!("{}", ObjectKind::Item), "Item");
        assert_eq!(format!("{}", ObjectKind::CommonEvent), "CommonEvent");
    }

    #[test]
    fn test_only_time_has_no_objects() {
        for kind in ObjectKind::all() {
            assert_eq!(kind.has_objects(), *kind != ObjectKind::Time);
        }
    }

    #[test]
    fn test_kind_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        for kind in ObjectKind::all() {
            set.insert(*kind);
        }
        assert_eq!(set.len(), 18);
    }
}
