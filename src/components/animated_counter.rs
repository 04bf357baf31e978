use std::time::Duration;

use devwrap_core::schedule::run_counter;
use devwrap_core::{CounterAnimation, CounterState, TaskHandle};
use dioxus::prelude::*;

/// Count-up number that starts once it is first mounted and visible.
///
/// A new `animation` prop replaces the target; a counter already on
/// screen restarts its loop from zero.
#[component]
pub fn AnimatedCounter(
    animation: CounterAnimation,
    frame_interval: Duration,
    #[props(default = String::new())] class: String,
) -> Element {
    let mut state = use_signal(|| CounterState::new(animation.clone()));
    let mut shown = use_signal(|| 0u64);
    // Replacing or dropping the handle cancels the loop it owns
    let mut task = use_signal(|| None::<TaskHandle>);

    let mut launch = move || {
        let animation = state.peek().animation().clone();
        let handle = TaskHandle::new();
        let token = handle.token();
        task.set(Some(handle));
        shown.set(0);
        spawn(async move {
            run_counter(&animation, frame_interval, token, move |value| shown.set(value)).await;
        });
    };

    use_effect(use_reactive((&animation,), move |(animation,)| {
        let restart = state.write().retarget(animation, Duration::ZERO);
        if restart {
            tracing::debug!("Counter target changed, restarting");
            launch();
        }
    }));

    let start = move |_| {
        let first = state.write().mark_visible(Duration::ZERO);
        if first {
            launch();
        }
    };

    let text = state.read().animation().text_for(shown());

    rsx! {
        span { class: "counter {class}", onmounted: start, "{text}" }
    }
}
