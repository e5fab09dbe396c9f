//! The contract every stored configuration object implements
//!
//! A `GameObject` has an immutable integer id (unique within its kind), a
//! mutable display name, and an opaque binary serialization of its remaining
//! state. The binary codec belongs to the concrete type; this crate only
//! requires the round-trip law: `load(binary_data())` must leave observable
//! state unchanged.
//!
//! Each object also owns a single backup slot used by editing tools to
//! support cancel of in-place edits: `make_backup` captures the current
//! serialization, `restore_backup` re-applies it, `delete_backup` discards it.

use crate::error::Result;
use crate::kind::ObjectKind;

/// Single held snapshot of an object's serialized state
///
/// At most one snapshot exists per object. Storing a new one overwrites the
/// previous; restoring does not consume it, so repeated restores to the same
/// snapshot are idempotent.
#[derive(Debug, Clone, Default)]
pub struct BackupSlot(Option<Vec<u8>>);

impl BackupSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self(None)
    }

    /// True if a snapshot is currently held
    pub fn is_held(&self) -> bool {
        self.0.is_some()
    }

    /// The held snapshot, if any
    pub fn data(&self) -> Option<&[u8]> {
        self.0.as_deref()
    }

    /// Store a snapshot, overwriting any prior one
    pub fn store(&mut self, data: Vec<u8>) {
        self.0 = Some(data);
    }

    /// Discard the held snapshot without touching current state
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// Contract for a stored configuration object
///
/// Concrete types supply identity, naming, the binary codec, and access to
/// their backup slot; the backup operations themselves are provided.
///
/// Ids are assigned by an external factory before registration and never
/// change. Two objects of the same kind never share an id.
pub trait GameObject: Send + Sync + 'static {
    /// The kind tag for this object type
    const KIND: ObjectKind;

    /// Unique identifier within this object's kind
    fn id(&self) -> i32;

    /// Display name
    fn name(&self) -> &str;

    /// Replace the display name
    fn set_name(&mut self, name: String);

    /// Replace full internal state from a binary blob
    ///
    /// This is a full state replacement, not a merge, and must be safe to
    /// call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if the blob is malformed for this
    /// object's kind.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Serialize current state
    ///
    /// The result must be sufficient to fully reconstruct the object via
    /// [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encode`] if serialization fails.
    fn binary_data(&self) -> Result<Vec<u8>>;

    /// Shared access to the backup slot
    fn backup_slot(&self) -> &BackupSlot;

    /// Exclusive access to the backup slot
    fn backup_slot_mut(&mut self) -> &mut BackupSlot;

    /// The kind tag of this instance
    fn kind(&self) -> ObjectKind {
        Self::KIND
    }

    /// Capture current state into the backup slot
    ///
    /// Overwrites any prior snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails; the prior snapshot is kept
    /// in that case.
    fn make_backup(&mut self) -> Result<()> {
        let data = self.binary_data()?;
        self.backup_slot_mut().store(data);
        Ok(())
    }

    /// Re-apply the held snapshot, if any
    ///
    /// A missing snapshot is a no-op, not an error. The snapshot stays held
    /// after the restore.
    ///
    /// # Errors
    ///
    /// Returns an error if the held snapshot fails to decode.
    fn restore_backup(&mut self) -> Result<()> {
        let Some(data) = self.backup_slot().data().map(<[u8]>::to_vec) else {
            return Ok(());
        };
        self.load(&data)
    }

    /// Discard the held snapshot without affecting current state
    fn delete_backup(&mut self) {
        self.backup_slot_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};

    /// Minimal concrete object for exercising the contract.
    #[derive(Debug, Serialize, Deserialize)]
    struct TestItem {
        id: i32,
        name: String,
        damage: i32,
        #[serde(skip)]
        backup: BackupSlot,
    }

    impl TestItem {
        fn new(id: i32, name: &str, damage: i32) -> Self {
            Self {
                id,
                name: name.to_string(),
                damage,
                backup: BackupSlot::new(),
            }
        }
    }

    impl GameObject for TestItem {
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
            let decoded: TestItem =
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

    #[test]
    fn kind_reported_from_const() {
        let item = TestItem::new(1, "Sword", 10);
        assert_eq!(item.kind(), ObjectKind::Item);
    }

    #[test]
    fn load_roundtrip_is_noop() {
        let mut item = TestItem::new(1, "Sword", 10);
        let before = item.binary_data().unwrap();
        item.load(&before).unwrap();
        assert_eq!(item.binary_data().unwrap(), before);
    }

    #[test]
    fn load_rejects_malformed_blob() {
        let mut item = TestItem::new(1, "Sword", 10);
        let err = item.load(&[0xFF]).unwrap_err();
        assert!(err.is_decode());
        // State untouched on failure
        assert_eq!(item.name(), "Sword");
    }

    #[test]
    fn backup_then_restore_recovers_state() {
        let mut item = TestItem::new(1, "Sword", 10);
        item.make_backup().unwrap();

        let mutated = TestItem::new(1, "Axe", 99).binary_data().unwrap();
        item.load(&mutated).unwrap();
        assert_eq!(item.name(), "Axe");

        item.restore_backup().unwrap();
        assert_eq!(item.name(), "Sword");
        assert_eq!(item.damage, 10);
    }

    #[test]
    fn restore_is_idempotent() {
        let mut item = TestItem::new(1, "Sword", 10);
        item.make_backup().unwrap();
        item.set_name("Axe".to_string());

        item.restore_backup().unwrap();
        assert_eq!(item.name(), "Sword");

        // Snapshot not consumed: a second restore lands on the same state
        item.set_name("Mace".to_string());
        item.restore_backup().unwrap();
        assert_eq!(item.name(), "Sword");
    }

    #[test]
    fn restore_without_backup_is_noop() {
        let mut item = TestItem::new(1, "Sword", 10);
        item.restore_backup().unwrap();
        assert_eq!(item.name(), "Sword");
    }

    #[test]
    fn make_backup_overwrites_prior_snapshot() {
        let mut item = TestItem::new(1, "Sword", 10);
        item.make_backup().unwrap();
        item.set_name("Axe".to_string());
        item.make_backup().unwrap();

        item.set_name("Mace".to_string());
        item.restore_backup().unwrap();
        assert_eq!(item.name(), "Axe");
    }

    #[test]
    fn delete_backup_keeps_current_state() {
        let mut item = TestItem::new(1, "Sword", 10);
        item.make_backup().unwrap();
        item.set_name("Axe".to_string());

        item.delete_backup();
        assert_eq!(item.name(), "Axe");
        assert!(!item.backup_slot().is_held());

        // Restore after delete is a no-op
        item.restore_backup().unwrap();
        assert_eq!(item.name(), "Axe");
    }

    #[test]
    fn backup_slot_store_and_clear() {
        let mut slot = BackupSlot::new();
        assert!(!slot.is_held());
        assert!(slot.data().is_none());

        slot.store(vec![1, 2, 3]);
        assert!(slot.is_held());
        assert_eq!(slot.data(), Some(&[1u8, 2, 3][..]));

        slot.store(vec![4]);
        assert_eq!(slot.data(), Some(&[4u8][..]));

        slot.clear();
        assert!(!slot.is_held());
    }

    proptest! {
        #[test]
        fn roundtrip_idempotence(id in any::<i32>(), name in ".*", damage in any::<i32>()) {
            let mut item = TestItem::new(id, &name, damage);
            let before = item.binary_data().unwrap();
            item.load(&before).unwrap();
            prop_assert_eq!(item.binary_data().unwrap(), before);
        }

        #[test]
        fn restore_recovers_arbitrary_state(
            name_a in ".*", damage_a in any::<i32>(),
            name_b in ".*", damage_b in any::<i32>(),
        ) {
            let mut item = TestItem::new(1, &name_a, damage_a);
            let original = item.binary_data().unwrap();
            item.make_backup().unwrap();

            let other = TestItem::new(1, &name_b, damage_b).binary_data().unwrap();
            item.load(&other).unwrap();
            item.restore_backup().unwrap();

            prop_assert_eq!(item.binary_data().unwrap(), original);
        }
    }
}
