// Host-side tests for preference encoding and persistence.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod prefs {
    include!("../src/prefs.rs");
}

use prefs::*;

#[test]
fn keys_match_stored_names() {
    assert_eq!(Preference::SidebarCollapsed.key(), "sidebarCollapsed");
    assert_eq!(Preference::DarkMode.key(), "darkMode");
}

#[test]
fn each_preference_has_its_own_encoding() {
    assert_eq!(Preference::SidebarCollapsed.encode(true), "true");
    assert_eq!(Preference::SidebarCollapsed.encode(false), "false");
    assert_eq!(Preference::DarkMode.encode(true), "enabled");
    assert_eq!(Preference::DarkMode.encode(false), "disabled");
}

#[test]
fn decode_rejects_foreign_values() {
    assert_eq!(Preference::DarkMode.decode("enabled"), Some(true));
    assert_eq!(Preference::DarkMode.decode("disabled"), Some(false));
    assert_eq!(Preference::DarkMode.decode("true"), None);
    assert_eq!(Preference::SidebarCollapsed.decode("enabled"), None);
    assert_eq!(Preference::SidebarCollapsed.decode("TRUE"), None);
}

#[test]
fn unset_preferences_load_as_off() {
    let store = MemoryStore::default();
    assert!(!Preference::SidebarCollapsed.load(&store));
    assert!(!Preference::DarkMode.load(&store));
}

#[test]
fn save_writes_encoded_value_under_key() {
    let store = MemoryStore::default();
    Preference::SidebarCollapsed.save(&store, true).unwrap();
    Preference::DarkMode.save(&store, true).unwrap();
    assert_eq!(store.get("sidebarCollapsed").as_deref(), Some("true"));
    assert_eq!(store.get("darkMode").as_deref(), Some("enabled"));
    assert!(Preference::SidebarCollapsed.load(&store));
    assert!(Preference::DarkMode.load(&store));

    Preference::DarkMode.save(&store, false).unwrap();
    assert_eq!(store.get("darkMode").as_deref(), Some("disabled"));
    assert!(!Preference::DarkMode.load(&store));
    // other preference untouched
    assert!(Preference::SidebarCollapsed.load(&store));
}

#[test]
fn unrecognised_stored_value_loads_as_off() {
    let store = MemoryStore::default();
    store.set("darkMode", "true").unwrap();
    store.set("sidebarCollapsed", "yes").unwrap();
    assert!(!Preference::DarkMode.load(&store));
    assert!(!Preference::SidebarCollapsed.load(&store));
}
