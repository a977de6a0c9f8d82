// Host-side tests for navigation highlighting and menu rules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod nav {
    include!("../src/nav.rs");
}

use nav::*;

fn section(id: &str, top: f64, height: f64) -> Section {
    Section {
        id: id.to_string(),
        top,
        height,
    }
}

fn page() -> Vec<Section> {
    vec![
        section("home", 0.0, 500.0),
        section("about", 500.0, 700.0),
        section("contact", 1200.0, 400.0),
    ]
}

#[test]
fn probe_sits_below_scroll_position() {
    let sections = page();
    // probe = scroll + 100
    assert_eq!(active_section(&sections, 0.0), Some("home"));
    assert_eq!(active_section(&sections, 399.0), Some("home"));
    assert_eq!(active_section(&sections, 400.0), Some("about"));
    assert_eq!(active_section(&sections, 1100.0), Some("contact"));
}

#[test]
fn section_end_is_exclusive() {
    let sections = page();
    assert_eq!(active_section(&sections, 1499.0), Some("contact"));
    assert_eq!(active_section(&sections, 1500.0), None);
}

#[test]
fn no_match_keeps_previous_highlight() {
    let sections = vec![section("about", 800.0, 200.0)];
    assert_eq!(active_section(&sections, 0.0), None);
    assert_eq!(active_section(&[], 300.0), None);
}

#[test]
fn later_overlapping_section_wins() {
    let sections = vec![section("outer", 0.0, 2000.0), section("inner", 300.0, 200.0)];
    assert_eq!(active_section(&sections, 250.0), Some("inner"));
    assert_eq!(active_section(&sections, 500.0), Some("outer"));
}

#[test]
fn href_is_fragment_link() {
    assert_eq!(section_href("projects"), "#projects");
}

#[test]
fn mobile_breakpoint_is_inclusive() {
    assert!(is_mobile_width(320.0));
    assert!(is_mobile_width(768.0));
    assert!(!is_mobile_width(768.5));
    assert!(!is_mobile_width(1024.0));
}

#[test]
fn header_closes_only_on_mobile_outside_clicks() {
    assert!(header_closes_on_click(600.0, true, false));
    assert!(!header_closes_on_click(600.0, true, true));
    assert!(!header_closes_on_click(600.0, false, false));
    assert!(!header_closes_on_click(1024.0, true, false));
}

#[test]
fn header_closes_when_resized_to_desktop() {
    assert!(header_closes_on_resize(1024.0));
    assert!(!header_closes_on_resize(768.0));
}

#[test]
fn initial_highlight_runs_directly_once_page_is_complete() {
    assert!(load_already_fired("complete"));
    // `load` is still ahead in these states and triggers the highlight
    assert!(!load_already_fired("interactive"));
    assert!(!load_already_fired("loading"));
}

#[test]
fn outside_click_is_ignored_until_armed() {
    let watch = OutsideClickWatch::default();
    assert!(!watch.is_armed());
    assert!(!watch.on_document_click(false, false));
}

#[test]
fn armed_watch_closes_on_first_outside_click_then_disarms() {
    let watch = OutsideClickWatch::default();
    watch.arm();

    // clicks on the sidebar or its toggle keep it open and armed
    assert!(!watch.on_document_click(true, false));
    assert!(!watch.on_document_click(false, true));
    assert!(watch.is_armed());

    assert!(watch.on_document_click(false, false));
    assert!(!watch.is_armed());
    assert!(!watch.on_document_click(false, false));
}

#[test]
fn reopening_rearms_the_watch() {
    let watch = OutsideClickWatch::default();
    watch.arm();
    assert!(watch.on_document_click(false, false));
    watch.arm();
    assert!(watch.on_document_click(false, false));
}
