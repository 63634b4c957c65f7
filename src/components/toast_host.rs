//! Toast stack rendering the shared notification queue.

use leptos::prelude::*;

use crate::notify::{Severity, ToastState};

/// Fixed-position toast stack. Toasts can be dismissed by hand; in the
/// browser they also expire after a few seconds.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        // Schedule exactly one expiry task per toast id.
        let scheduled_below = RwSignal::new(0u64);
        Effect::new(move || {
            let ids: Vec<u64> = toasts.get().toasts.iter().map(|t| t.id).collect();
            let floor = scheduled_below.get_untracked();
            for id in ids.into_iter().filter(|&id| id >= floor) {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(5_000).await;
                    toasts.update(|state| state.dismiss(id));
                });
                scheduled_below.set(id + 1);
            }
        });
    }

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.note.severity {
                            Severity::Destructive => "toast toast--destructive",
                            Severity::Default => "toast",
                        };
                        view! {
                            <div class=class role="status">
                                <div class="toast__body">
                                    <div class="toast__title">{toast.note.title}</div>
                                    <div class="toast__description">{toast.note.description}</div>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
