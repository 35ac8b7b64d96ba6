//! Screen-level failure boundary.
//!
//! Views report unrecoverable load failures through a [`FailureReporter`] taken
//! from context. Once a failure is reported the boundary replaces everything it
//! wraps with a fallback showing the message, until the user leaves it.

use std::fmt::Display;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::Page, router::Route};

/// Handle used by views to raise a failure to the nearest [`FailureBoundary`].
#[derive(Clone, Copy, PartialEq)]
pub struct FailureReporter {
    failure: Signal<Option<String>>,
}

impl FailureReporter {
    pub fn report(mut self, error: impl Display) {
        let message = error.to_string();
        tracing::error!("{}", message);

        self.failure.set(Some(message));
    }

    pub fn clear(mut self) {
        self.failure.set(None);
    }
}

/// The [`FailureReporter`] of the enclosing [`FailureBoundary`].
pub fn use_failure_reporter() -> FailureReporter {
    use_context::<FailureReporter>()
}

#[component]
pub fn FailureBoundary(children: Element) -> Element {
    let failure = use_signal(|| None::<String>);
    let reporter = use_context_provider(|| FailureReporter { failure });
    let navigator = use_navigator();

    let Some(message) = failure.read().clone() else {
        return children;
    };

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                h1 { class: "text-2xl font-bold",
                    "Something went wrong!"
                }
                p {
                    "Error: {message}"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        reporter.clear();
                        navigator.push(Route::CharacterList {});
                    },
                    "Back to Character List"
                }
            }
        }
    )
}
