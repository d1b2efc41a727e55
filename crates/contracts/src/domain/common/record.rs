/// A record kept in a page-local collection.
///
/// Instance data is reduced to the identifier; the associated functions
/// carry the naming used by list pages, modals and log lines.
pub trait Record {
    /// Unique identifier within the owning collection
    fn id(&self) -> &str;

    /// Human readable label for confirmations and notifications
    fn display_name(&self) -> &str;

    /// Record index in the system (e.g. "a001")
    fn record_index() -> &'static str;

    /// Collection name (e.g. "category")
    fn collection_name() -> &'static str;

    /// Singular name for UI (e.g. "Category")
    fn element_name() -> &'static str;

    /// Plural name for UI (e.g. "Categories")
    fn list_name() -> &'static str;

    /// Full name used as a page key (e.g. "a001_category")
    fn full_name() -> String {
        format!("{}_{}", Self::record_index(), Self::collection_name())
    }
}
