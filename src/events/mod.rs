pub mod header;
pub mod links;
pub mod pointer;
pub mod sidebar;
pub mod theme;
