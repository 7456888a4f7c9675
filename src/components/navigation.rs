use leptos::prelude::*;

#[component]
pub fn Navigation() -> impl IntoView {
    let nav_items = ["WORK", "ABOUT", "CONTACT"];

    view! {
        <nav class="nav-bar">
            <div class="nav-wordmark">"TRACE_COLLECTIVE"</div>

            <div class="nav-links">
                {nav_items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a class="nav-link" href=format!("#{}", item.to_lowercase())>
                                <span>{item}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="nav-rule"></div>
        </nav>
    }
}
