//! Toast for pipeline notifications.

use leptos::prelude::*;

use crate::util::notify::Notice;

#[cfg(feature = "csr")]
const NOTICE_DISMISS_MS: u32 = 4_000;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    #[cfg(feature = "csr")]
    Effect::new(move |_| {
        let Some(id) = notice.with(|n| n.as_ref().map(|n| n.id)) else {
            return;
        };
        gloo_timers::callback::Timeout::new(NOTICE_DISMISS_MS, move || {
            // A newer notice keeps its own timer.
            if notice.with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id)) {
                notice.set(None);
            }
        })
        .forget();
    });

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="notice-toast" role="alert">
                <span>{move || notice.with(|n| n.as_ref().map(|n| n.text.clone()).unwrap_or_default())}</span>
                <button class="notice-toast__close" on:click=move |_| notice.set(None)>
                    "x"
                </button>
            </div>
        </Show>
    }
}
