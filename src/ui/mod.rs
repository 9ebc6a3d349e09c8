/// Presentation layer
///
/// Pure view code: every function here takes state by reference and returns
/// an `Element`. No state lives in this module; the state machines under
/// `crate::state` stay unaware of widgets entirely.

pub mod about;
pub mod catalog;
pub mod navbar;
pub mod upload;
