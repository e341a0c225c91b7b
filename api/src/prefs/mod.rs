//! User preferences that persist in the local slot.

pub mod theme;
pub mod user_prefs;
