use crate::core::capability::ConfirmRequest;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(target) = e.target() {
                            if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                                if element.class_list().contains("backdrop-theme") {
                                    on_close.run(());
                                }
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div class=format!("w-full {} card theme-transition", max_width)>
                // Header
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">{title}</h3>
                        {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
                    </div>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                // Content
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Blocking confirmation dialog over a typed [`ConfirmRequest`].
///
/// The request names the action, its target, and the consequence of
/// accepting; the mutation fires only through `on_confirm`.
#[component]
pub fn ConfirmDialog(
    /// What is being confirmed
    #[prop(into)]
    request: Signal<Option<ConfirmRequest>>,
    /// Callback when confirmed
    on_confirm: Callback<()>,
    /// Callback when cancelled
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || request.get().is_some());
    let action = move || request.get().map(|r| r.action).unwrap_or_default();

    view! {
        <BaseModal
            title="Please confirm".to_string()
            is_open=is_open
            on_close=Callback::new(move |_| on_cancel.run(()))
            max_width="max-w-md"
        >
            <div class="space-y-4">
                {move || {
                    request.get().map(|r| view! {
                        <p class="text-theme-primary">
                            {r.action} " " <span class="font-medium">"\""{r.target}"\""</span> "?"
                        </p>
                        <p class="text-theme-secondary text-sm">
                            {r.consequence} "."
                        </p>
                    })
                }}

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        class="btn-secondary"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn-danger"
                        on:click=move |_| on_confirm.run(())
                    >
                        {action}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
