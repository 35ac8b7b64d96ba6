use std::time::Duration;

use dioxus::prelude::*;

use holocron::util::Debouncer;

/// Follow `value`, publishing it only once it has been unchanged for `delay`.
///
/// The returned signal starts at the current value. Pending updates are dropped
/// when the calling component unmounts.
pub fn use_debounce<T>(value: Signal<T>, delay: Duration) -> Signal<T>
where
    T: Clone + PartialEq + 'static,
{
    let mut debounced = use_signal(|| value.peek().clone());
    let debouncer = use_hook(|| Debouncer::new(delay));

    use_effect({
        let debouncer = debouncer.clone();
        move || {
            let next = value.read().clone();
            let ticket = debouncer.bump();
            let debouncer = debouncer.clone();

            spawn(async move {
                if let Some(next) = debouncer.settle(ticket, next).await {
                    if *debounced.peek() != next {
                        debounced.set(next);
                    }
                }
            });
        }
    });

    use_drop(move || debouncer.cancel());

    debounced
}
