use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::countdown::{event_start, is_elapsed, time_remaining};

#[derive(Properties, PartialEq)]
struct UnitProps {
    value: u64,
    label: &'static str,
}

#[function_component(CountdownUnit)]
fn countdown_unit(props: &UnitProps) -> Html {
    html! {
        <div class="countdown-unit">
            <span class="countdown-value">{format!("{:02}", props.value)}</span>
            <span class="countdown-label">{props.label}</span>
        </div>
    }
}

/// Days/hours/minutes/seconds until the event, recomputed once per second.
/// The interval is dropped on unmount and once the countdown reaches zero.
#[function_component(Countdown)]
pub fn countdown() -> Html {
    let state = use_state(|| time_remaining(event_start(), Utc::now()));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let interval_handle: Rc<RefCell<Option<gloo_timers::callback::Interval>>> =
                    Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                // An already-started event never ticks.
                if !is_elapsed(event_start(), Utc::now()) {
                    let interval = gloo_timers::callback::Interval::new(1_000, move || {
                        let now = Utc::now();
                        let next = time_remaining(event_start(), now);
                        if is_elapsed(event_start(), now) {
                            // Terminal state, stop ticking. The drop is
                            // deferred to a task so the interval is not torn
                            // down from inside its own callback.
                            let handle = interval_handle.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                if let Some(interval) = handle.borrow_mut().take() {
                                    drop(interval);
                                }
                            });
                        }
                        state.set(next);
                    });
                    *interval_handle_clone.borrow_mut() = Some(interval);
                }

                move || {
                    // Clean up interval on component unmount
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="countdown">
            <CountdownUnit value={state.days} label="Days" />
            <CountdownUnit value={state.hours} label="Hours" />
            <CountdownUnit value={state.minutes} label="Minutes" />
            <CountdownUnit value={state.seconds} label="Seconds" />
        </div>
    }
}
