use leptos::ev;
use leptos::prelude::*;

use crate::state::AppState;

/// Question field, ask button and the answer display.
///
/// The field keeps its text after sending.
#[component]
pub fn AskPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (question, set_question) = signal(String::new());

    let ask = {
        let state = state.clone();
        move || state.ask(question.get_untracked())
    };

    let ask_on_enter = ask.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            ask_on_enter();
        }
    };

    view! {
        <section class="ask-panel">
            <div class="input-row">
                <input
                    id="questionInput"
                    type="text"
                    placeholder="Ask a question about the document…"
                    prop:value=question
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="askBtn" class="send-btn" on:click=move |_| ask()>
                    "Ask"
                </button>
            </div>
            <div id="answerArea" class="answer">{move || state.answer.get()}</div>
        </section>
    }
}
