//! Result-bearing modal dialog.
//!
//! A workflow calls [`Prompter::show`] and suspends until the user picks an
//! outcome, which comes back as a value. [`DialogHost`] is the in-app
//! implementation: it publishes the pending dialog through a signal that
//! [`DialogOverlay`] renders, and completes the caller's future when a button
//! is pressed.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::channel::oneshot;

use crate::views::ModalOverlay;

#[derive(Clone, Debug, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    /// Whether a Cancel button is offered next to the confirm button.
    pub cancellable: bool,
}

impl Dialog {
    /// A question with Cancel and a custom confirm label.
    pub fn confirm(title: &str, text: &str, confirm_label: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            confirm_label: confirm_label.to_string(),
            cancellable: true,
        }
    }

    /// An acknowledgement with a single OK button.
    pub fn notice(title: &str, text: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            text: text.into(),
            confirm_label: "OK".to_string(),
            cancellable: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Dismissed,
}

pub trait Prompter {
    fn show(&self, dialog: Dialog) -> impl std::future::Future<Output = DialogOutcome>;
}

pub struct PendingDialog {
    pub dialog: Dialog,
    reply: oneshot::Sender<DialogOutcome>,
}

/// Signal-backed [`Prompter`] rendered by [`DialogOverlay`].
#[derive(Clone, Copy)]
pub struct DialogHost {
    pending: Signal<Option<PendingDialog>>,
}

impl DialogHost {
    pub fn new(pending: Signal<Option<PendingDialog>>) -> Self {
        Self { pending }
    }

    /// The dialog currently on screen.
    pub fn current(&self) -> Option<Dialog> {
        self.pending.read().as_ref().map(|p| p.dialog.clone())
    }

    /// Close the dialog on screen and hand `outcome` to whoever opened it.
    pub fn resolve(&self, outcome: DialogOutcome) {
        let mut pending = self.pending;
        let taken = pending.write().take();
        if let Some(p) = taken {
            let _ = p.reply.send(outcome);
        }
    }
}

impl Prompter for DialogHost {
    async fn show(&self, dialog: Dialog) -> DialogOutcome {
        let (reply, answer) = oneshot::channel();
        let mut pending = self.pending;
        let replaced = pending.write().replace(PendingDialog { dialog, reply });
        if let Some(previous) = replaced {
            let _ = previous.reply.send(DialogOutcome::Dismissed);
        }
        answer.await.unwrap_or(DialogOutcome::Dismissed)
    }
}

pub fn use_dialogs() -> DialogHost {
    use_context::<DialogHost>()
}

/// Renders the pending dialog, if any.
#[component]
pub fn DialogOverlay() -> Element {
    let host = use_dialogs();
    let Some(dialog) = host.current() else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            dismissible: dialog.cancellable,
            on_backdrop: move |_| host.resolve(DialogOutcome::Dismissed),
            div {
                class: "p-6 text-center",
                h3 { class: "text-lg font-bold text-gray-800 mb-2", "{dialog.title}" }
                p { class: "text-gray-600 mb-6", "{dialog.text}" }
                div {
                    class: "flex justify-center gap-3",
                    if dialog.cancellable {
                        button {
                            class: "px-5 py-2 rounded-lg bg-gray-200 text-gray-800 font-semibold",
                            onclick: move |_| host.resolve(DialogOutcome::Dismissed),
                            "Cancel"
                        }
                    }
                    button {
                        class: "px-5 py-2 rounded-lg bg-orange-500 text-white font-semibold",
                        onclick: move |_| host.resolve(DialogOutcome::Confirmed),
                        "{dialog.confirm_label}"
                    }
                }
            }
        }
    }
}

/// Test prompter: answers from a queue (confirming when it runs dry) and
/// records every dialog shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompter {
    answers: Rc<RefCell<VecDeque<DialogOutcome>>>,
    shown: Rc<RefCell<Vec<Dialog>>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self, outcome: DialogOutcome) -> &Self {
        self.answers.borrow_mut().push_back(outcome);
        self
    }

    pub fn shown(&self) -> Vec<Dialog> {
        self.shown.borrow().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.shown.borrow().iter().map(|d| d.title.clone()).collect()
    }
}

impl Prompter for ScriptedPrompter {
    async fn show(&self, dialog: Dialog) -> DialogOutcome {
        self.shown.borrow_mut().push(dialog);
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(DialogOutcome::Confirmed)
    }
}
