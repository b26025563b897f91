use leptos::*;
use leptos_router::use_location;

/// Fallback for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        log::error!(
            "404 Error: User attempted to access non-existent route: {}",
            location.pathname.get()
        );
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page not found"</h2>
            <p class="text-muted">"The page you're looking for doesn't exist or has been moved."</p>
            <a class="btn btn-primary" href="/">"Return to Home"</a>
        </div>
    }
}
