mod api;
mod components;
mod state;

use leptos::prelude::*;
use leptos::mount::mount_to_body;

use components::ask::AskPanel;
use components::chat::ChatLog;
use components::upload::UploadPanel;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    view! {
        <div class="app-container">
            <h1>"Document Q&A"</h1>
            <UploadPanel />
            <AskPanel />
            <ChatLog />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
