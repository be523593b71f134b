use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde_json::Value;
use tokio::sync::oneshot;

use crate::client::Backend;
use crate::errors::TransportError;
use crate::models::{AskRequest, ChatEntry, ServerResponse, UploadRequest};
use crate::service::view::ChatView;
use crate::transcript::Transcript;

type Reply = Result<ServerResponse, TransportError>;

/// Everything the flows did, in the order they did it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Status(String),
    Answer(String),
    Entry(ChatEntry),
    Cleared,
    Uploaded(&'static str),
    Asked(String),
}

/// Scripted backend and recording view in one, so backend calls and display
/// updates share a single ordered log.
#[derive(Default)]
pub struct Harness {
    events: RefCell<Vec<Event>>,
    transcript: RefCell<Transcript>,
    answer: RefCell<String>,
    status: RefCell<String>,
    replies: RefCell<VecDeque<Reply>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
}

impl Harness {
    pub fn ok(body: Value) -> Reply {
        Self::http(200, body)
    }

    pub fn http(status: u16, body: Value) -> Reply {
        Ok(ServerResponse::new(status, body))
    }

    /// Queues the reply for the next ungated request.
    pub fn reply(self, reply: Reply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    /// Holds the answer to `question` until the returned sender fires.
    pub fn gate(&self, question: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(question.to_string(), rx);
        tx
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn transcript(&self) -> Transcript {
        self.transcript.borrow().clone()
    }

    pub fn transcript_lines(&self) -> Vec<String> {
        self.transcript.borrow().lines().collect()
    }

    pub fn answer(&self) -> String {
        self.answer.borrow().clone()
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    fn next_reply(&self) -> Reply {
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("request made with no scripted reply")
    }
}

impl Backend for Harness {
    type File = &'static str;

    async fn upload(&self, request: UploadRequest<&'static str>) -> Reply {
        self.events.borrow_mut().push(Event::Uploaded(request.file));
        self.next_reply()
    }

    async fn ask(&self, request: &AskRequest) -> Reply {
        self.events.borrow_mut().push(Event::Asked(request.question.clone()));
        let gate = self.gates.borrow_mut().remove(&request.question);
        match gate {
            Some(rx) => rx.await.expect("gate sender dropped"),
            None => self.next_reply(),
        }
    }
}

impl ChatView for Harness {
    fn set_upload_status(&self, text: &str) {
        self.events.borrow_mut().push(Event::Status(text.to_string()));
        *self.status.borrow_mut() = text.to_string();
    }

    fn set_answer(&self, text: &str) {
        self.events.borrow_mut().push(Event::Answer(text.to_string()));
        *self.answer.borrow_mut() = text.to_string();
    }

    fn append_entry(&self, entry: ChatEntry) {
        self.events.borrow_mut().push(Event::Entry(entry.clone()));
        self.transcript.borrow_mut().push(entry);
    }

    fn clear_entries(&self) {
        self.events.borrow_mut().push(Event::Cleared);
        self.transcript.borrow_mut().clear();
    }
}
