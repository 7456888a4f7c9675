use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::catalog::{self, Project};
use crate::components::{
    AboutSection, ContactSection, HeroSection, LoadingScreen, Navigation, PortfolioSection,
    ProjectDetail,
};
use crate::state::View;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/trace_collective.css"/>

        <Title text="Trace Collective"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Site/>
            </Routes>
        </Router>
    }
}

/// The whole site behind a single route. Owns the exclusive top-level view
/// (loading / content / project detail) and routes selection events between
/// the portfolio list and the detail overlay.
#[component]
fn Site() -> impl IntoView {
    let (view_state, set_view_state) = signal(View::Loading);

    let on_loading_complete = Callback::new(move |()| {
        set_view_state.update(View::finish_loading);
    });

    let on_select = Callback::new(move |project: Project| {
        set_view_state.update(|v| v.select(project));
        // Opening a case study starts the reader at the top.
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    let on_close = Callback::new(move |()| set_view_state.update(View::close));
    let on_prev = Callback::new(move |()| {
        set_view_state.update(|v| v.step_selection(catalog::prev_before));
    });
    let on_next = Callback::new(move |()| {
        set_view_state.update(|v| v.step_selection(catalog::next_after));
    });

    view! {
        <div class="site">
            {move || match view_state.get() {
                View::Loading => view! {
                    <LoadingScreen on_complete=on_loading_complete/>
                }
                    .into_any(),
                View::Detail(project) => {
                    let prev = catalog::prev_before(project.id).map(|_| on_prev);
                    let next = catalog::next_after(project.id).map(|_| on_next);
                    view! {
                        <ProjectDetail
                            project=project
                            on_close=on_close
                            on_prev=prev
                            on_next=next
                        />
                    }
                        .into_any()
                }
                View::Content => view! {
                    <Navigation/>
                    <main>
                        <HeroSection/>
                        <PortfolioSection projects=catalog::projects() on_select=on_select/>
                        <AboutSection/>
                        <ContactSection/>
                    </main>
                }
                    .into_any(),
            }}
        </div>
    }
}
