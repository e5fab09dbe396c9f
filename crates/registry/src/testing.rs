//! Testing fixtures
//!
//! Concrete object types live outside this system, so tests and examples
//! need stand-ins. The samples here carry a couple of representative fields
//! and serialize with bincode, which is all the registry contract asks of a
//! real object codec.

use gamedata_core::error::{Error, Result};
use gamedata_core::kind::ObjectKind;
use gamedata_core::object::{BackupSlot, GameObject};
use serde::{Deserialize, Serialize};

/// Sample item object for tests and examples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleItem {
    id: i32,
    name: String,
    /// Representative stat field
    pub damage: i32,
    #[serde(skip)]
    backup: BackupSlot,
}

impl SampleItem {
    /// Create an item with a zeroed stat
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            damage: 0,
            backup: BackupSlot::new(),
        }
    }
}

impl GameObject for SampleItem {
    const KIND: ObjectKind = ObjectKind::Item;

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn load(&mut self, data: &[u8]) -> Result<()> {
        let decoded: SampleItem =
            bincode::deserialize(data).map_err(|e| Error::decode(Self::KIND, e))?;
        self.id = decoded.id;
        self.name = decoded.name;
        self.damage = decoded.damage;
        Ok(())
    }

    fn binary_data(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::encode(Self::KIND, e))
    }

    fn backup_slot(&self) -> &BackupSlot {
        &self.backup
    }

    fn backup_slot_mut(&mut self) -> &mut BackupSlot {
        &mut self.backup
    }
}

/// Sample NPC object for tests and examples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleNpc {
    id: i32,
    name: String,
    /// Representative stat field
    pub health: i32,
    #[serde(skip)]
    backup: BackupSlot,
}

impl SampleNpc {
    /// Create an NPC with a zeroed stat
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            health: 0,
            backup: BackupSlot::new(),
        }
    }
}

impl GameObject for SampleNpc {
    const KIND: ObjectKind = ObjectKind::Npc;

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn load(&mut self, data: &[u8]) -> Result<()> {
        let decoded: SampleNpc =
            bincode::deserialize(data).map_err(|e| Error::decode(Self::KIND, e))?;
        self.id = decoded.id;
        self.name = decoded.name;
        self.health = decoded.health;
        Ok(())
    }

    fn binary_data(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::encode(Self::KIND, e))
    }

    fn backup_slot(&self) -> &BackupSlot {
        &self.backup
    }

    fn backup_slot_mut(&mut self) -> &mut BackupSlot {
        &mut self.backup
    }
}
