use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An owned copy of a catalog definition. Instances persist across rounds;
/// only a purchase creates one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModifierInstance {
    pub uid: u32,
    pub def_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RackError {
    #[error("no modifier slots left")]
    NoSlots,
}

/// The run's modifier rack, capped at a fixed slot count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rack {
    pub slots: usize,
    pub modifiers: Vec<ModifierInstance>,
}

impl Rack {
    pub fn with_slots(slots: usize) -> Self {
        Self {
            slots,
            modifiers: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.modifiers.len() >= self.slots
    }

    pub fn try_add(&mut self, instance: ModifierInstance) -> Result<(), RackError> {
        if self.is_full() {
            return Err(RackError::NoSlots);
        }
        self.modifiers.push(instance);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}
