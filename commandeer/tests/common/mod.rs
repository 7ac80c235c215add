#![allow(dead_code)]

use commandeer::{CommandDispatcher, TypeInfo};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Commands
// ============================================================================

pub struct Ping;
pub struct Pong;
pub struct Shutdown;

/// Info for a test command type.
pub fn info<T: 'static>() -> TypeInfo {
    TypeInfo::of::<T>()
}

// ============================================================================
// Test Dispatchers
// ============================================================================

/// A dispatcher that appends its label to a shared log on every execution.
pub struct LabelledDispatcher {
    pub label: &'static str,
    pub types: Vec<TypeInfo>,
    pub log: Arc<Mutex<Vec<(&'static str, TypeInfo)>>>,
}

impl CommandDispatcher for LabelledDispatcher {
    fn has_registration(&self, command: &TypeInfo) -> bool {
        self.types.contains(command)
    }

    fn execute(&self, command: &TypeInfo) {
        self.log.lock().unwrap().push((self.label, *command));
    }

    fn registered_types(&self) -> Vec<TypeInfo> {
        self.types.clone()
    }
}
