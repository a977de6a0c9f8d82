use crate::constants::{ACTIVE_SECTION_PROBE_OFFSET_PX, MOBILE_BREAKPOINT_PX};

/// Page section geometry in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under the scroll probe. Later sections win when
/// several overlap; `None` means the current highlight should be kept.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

#[inline]
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

#[inline]
pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

/// A document click closes the open header menu only on mobile and only
/// when it lands outside the header.
#[inline]
pub fn header_closes_on_click(width: f64, menu_open: bool, inside_header: bool) -> bool {
    is_mobile_width(width) && menu_open && !inside_header
}

#[inline]
pub fn header_closes_on_resize(width: f64) -> bool {
    !is_mobile_width(width)
}

/// `load` has already fired once the document is `complete`, so a highlight
/// waiting on it has to run directly instead.
#[inline]
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Dismissal watcher for the mobile sidebar. It arms shortly after the
/// sidebar opens; the first armed click outside the sidebar and its toggle
/// closes it and disarms.
#[derive(Debug, Default)]
pub struct OutsideClickWatch {
    armed: std::cell::Cell<bool>,
}

impl OutsideClickWatch {
    #[inline]
    pub fn arm(&self) {
        self.armed.set(true);
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    /// True when this click should close the sidebar.
    pub fn on_document_click(&self, inside_sidebar: bool, inside_toggle: bool) -> bool {
        if !self.armed.get() || inside_sidebar || inside_toggle {
            return false;
        }
        self.armed.set(false);
        true
    }
}
