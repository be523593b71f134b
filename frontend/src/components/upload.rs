use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{File, FileList};

use crate::state::AppState;

/// File picker, upload button and upload-status line.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_input = NodeRef::<Input>::new();

    let on_upload = {
        let state = state.clone();
        move |_| {
            let files = file_input
                .get()
                .and_then(|input| input.files())
                .map(|list| selected_files(&list))
                .unwrap_or_default();
            state.upload(files);
        }
    };

    view! {
        <section class="upload-panel">
            <input id="fileInput" type="file" accept=".pdf,.docx,.pptx,.txt" node_ref=file_input />
            <button id="uploadBtn" on:click=on_upload>"Upload"</button>
            <p id="uploadStatus" class="status">{move || state.upload_status.get()}</p>
        </section>
    }
}

fn selected_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
