use crate::models::ChatEntry;

/// The three display regions a front end exposes to the flows.
///
/// Methods take `&self`: browser implementations write through reactive
/// signals and the others through `RefCell`s, all on one thread.
pub trait ChatView {
    /// Upload-status region.
    fn set_upload_status(&self, text: &str);

    /// Answer-display region. Holds only the latest answer or error.
    fn set_answer(&self, text: &str);

    /// Appends one row to the transcript and brings it into view.
    fn append_entry(&self, entry: ChatEntry);

    /// Drops every transcript row. Leaves the other regions alone.
    fn clear_entries(&self);
}
