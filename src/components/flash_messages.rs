//! Server flash messages with timed fade-out.
//!
//! Only the messages handed over at mount are tracked; the fade schedule
//! starts once, when the component hydrates.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::net::types::FlashMessage;
use crate::state::flash::FlashState;

#[cfg(feature = "hydrate")]
fn schedule_fade(flashes: RwSignal<FlashState>, config: &UiConfig) {
    use gloo_timers::callback::Timeout;

    let (visible_ms, fade_ms) = (config.flash_visible_ms, config.flash_fade_ms);
    let lifetime_ms = config.flash_lifetime_ms();
    Timeout::new(visible_ms, move || {
        flashes.try_update(|f| f.advance(visible_ms, visible_ms, fade_ms));
    })
    .forget();
    Timeout::new(lifetime_ms, move || {
        flashes.try_update(|f| f.advance(lifetime_ms, visible_ms, fade_ms));
    })
    .forget();
}

#[component]
pub fn FlashMessages(messages: Vec<FlashMessage>) -> impl IntoView {
    let config = expect_context::<UiConfig>();
    let fade_ms = config.flash_fade_ms;
    let flashes = RwSignal::new(FlashState::from_messages(messages));

    #[cfg(feature = "hydrate")]
    {
        if !flashes.with_untracked(FlashState::is_empty) {
            schedule_fade(flashes, &config);
        }
    }

    view! {
        <div class="flash-messages">
            <For
                each=move || flashes.with(|f| f.entries.clone())
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let alert_class = entry.alert_class();
                    view! {
                        <div
                            class=alert_class
                            style=move || flashes.with(|f| f.alert_style(fade_ms))
                            role="alert"
                        >
                            <span>{entry.message.text}</span>
                            <button
                                type="button"
                                class="alert-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    flashes.update(|f| {
                                        f.dismiss(id);
                                    });
                                }
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
