/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the data source and the UI layer.

/// A single entry in the catalog grid
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Unique id within the synthetic dataset
    pub id: u64,
    /// Primary label shown on the card
    pub title: String,
    /// Secondary label shown under the title
    pub subtitle: String,
    /// Opaque reference to the card artwork (e.g. "asset://catalog/007.jpg");
    /// the demo derives a placeholder color from it instead of decoding
    pub image_ref: String,
}
