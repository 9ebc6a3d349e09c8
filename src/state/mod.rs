/// State management module
///
/// This module owns the UI-agnostic state machines behind the demo:
/// - Catalog pagination and loading flags (catalog.rs)
/// - Simulated upload/processing pipeline (upload.rs)
/// - Shared data structures (data.rs)
/// - Observer registry used by both machines (observe.rs)

pub mod catalog;
pub mod data;
pub mod observe;
pub mod upload;
