use leptos::html::Div;
use leptos::prelude::*;

use docqa::models::ChatEntry;

use crate::state::AppState;

/// Scrollable chat transcript with its clear button.
#[component]
pub fn ChatLog() -> impl IntoView {
    let state = expect_context::<AppState>();
    let transcript = state.transcript;
    let container = NodeRef::<Div>::new();

    // Keep the newest row in view after every append.
    Effect::new(move |_| {
        transcript.track();
        if let Some(el) = container.get() {
            scroll_to_newest(&el);
        }
    });

    let on_clear = move |_| state.clear_chat();

    view! {
        <section class="chat-panel">
            <div class="chat-header">
                <h2>"Chat"</h2>
                <button id="clearChat" class="clear-btn" on:click=on_clear>
                    "Clear chat"
                </button>
            </div>
            <div id="chat" class="chat" node_ref=container>
                <For
                    each=move || {
                        transcript.with(|t| {
                            t.entries().iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                    }
                    key=|row| row.clone()
                    children=|(_, entry)| view! { <ChatRow entry=entry /> }
                />
            </div>
        </section>
    }
}

fn scroll_to_newest(el: &web_sys::Element) {
    el.set_scroll_top(el.scroll_height());
}

/// A single transcript row. The text is inserted as a text node, never as markup.
#[component]
fn ChatRow(entry: ChatEntry) -> impl IntoView {
    let css_class = format!("chat-row {}", entry.role.as_str());

    view! { <div class=css_class>{entry.line()}</div> }
}
