use leptos::prelude::*;

/// Inline failure notice; renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! {
                <div class="error-banner" role="alert">
                    {m}
                </div>
            }
        })
    }
}
