// Boolean page preferences persisted as string flags.

use crate::constants::*;

/// Key-value string storage backing the preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    SidebarCollapsed,
    DarkMode,
}

impl Preference {
    pub fn key(self) -> &'static str {
        match self {
            Self::SidebarCollapsed => SIDEBAR_COLLAPSED_KEY,
            Self::DarkMode => DARK_MODE_KEY,
        }
    }

    pub fn encode(self, on: bool) -> &'static str {
        match (self, on) {
            (Self::SidebarCollapsed, true) => SIDEBAR_COLLAPSED_ON,
            (Self::SidebarCollapsed, false) => SIDEBAR_COLLAPSED_OFF,
            (Self::DarkMode, true) => DARK_MODE_ON,
            (Self::DarkMode, false) => DARK_MODE_OFF,
        }
    }

    /// `None` for values this preference never writes.
    pub fn decode(self, value: &str) -> Option<bool> {
        let (on, off) = (self.encode(true), self.encode(false));
        if value == on {
            Some(true)
        } else if value == off {
            Some(false)
        } else {
            None
        }
    }

    /// Stored state; only an explicit "on" value enables the preference.
    pub fn load(self, store: &impl PreferenceStore) -> bool {
        store
            .get(self.key())
            .and_then(|v| self.decode(&v))
            .unwrap_or(false)
    }

    pub fn save(self, store: &impl PreferenceStore, on: bool) -> anyhow::Result<()> {
        store.set(self.key(), self.encode(on))
    }
}

/// In-memory store for host-side tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
