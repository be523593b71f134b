use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use docqa::models::ChatEntry;
use docqa::service::{self, Action, ChatView};
use docqa::transcript::Transcript;

use crate::api::{self, FetchBackend};

/// Shared application state, provided via Leptos context.
///
/// Each display region is its own signal, so the answer display and the
/// transcript change independently.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub transcript: ReadSignal<Transcript>,
    pub answer: ReadSignal<String>,
    pub upload_status: ReadSignal<String>,

    // --- Write signals (for mutating state) ---
    pub set_transcript: WriteSignal<Transcript>,
    pub set_answer: WriteSignal<String>,
    pub set_upload_status: WriteSignal<String>,

    backend: FetchBackend,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (transcript, set_transcript) = signal(Transcript::new());
        let (answer, set_answer) = signal(String::new());
        let (upload_status, set_upload_status) = signal(String::new());

        let state = Self {
            transcript,
            answer,
            upload_status,
            set_transcript,
            set_answer,
            set_upload_status,
            backend: FetchBackend::new(api::config()),
        };

        provide_context(state.clone());
        state
    }

    /// Runs `action` on the page's event loop. Actions are never cancelled,
    /// so overlapping requests settle in whatever order they resolve.
    pub fn dispatch(&self, action: Action<File>) {
        let state = self.clone();
        spawn_local(async move {
            service::dispatch(&state.backend, &state, action).await;
        });
    }

    pub fn upload(&self, files: Vec<File>) {
        self.dispatch(Action::Upload(files));
    }

    pub fn ask(&self, question: String) {
        self.dispatch(Action::Ask(question));
    }

    /// Clears synchronously; there is nothing to wait for.
    pub fn clear_chat(&self) {
        service::clear_chat(self);
    }
}

impl ChatView for AppState {
    fn set_upload_status(&self, text: &str) {
        self.set_upload_status.set(text.to_string());
    }

    fn set_answer(&self, text: &str) {
        self.set_answer.set(text.to_string());
    }

    fn append_entry(&self, entry: ChatEntry) {
        self.set_transcript.update(|transcript| transcript.push(entry));
    }

    fn clear_entries(&self) {
        self.set_transcript.update(Transcript::clear);
    }
}
