use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::{
    set_timeout_with_handle, window_event_listener, TimeoutHandle, WindowListenerHandle,
};
use leptos::prelude::*;

use crate::catalog::Project;
use crate::state::{pointer_fraction, scroll_progress, Carousel};

const DETAIL_IMAGE: &str =
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=1600&q=80";
const SCROLL_LOCK_MS: u64 = 500;

fn set_body_overflow(value: &str) {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Full-screen case study overlay.
///
/// Owns three window listeners (scroll for the progress bar, mousemove for
/// the parallax tilt, keydown for Escape/arrow navigation) plus a timed body
/// scroll lock. Every registration is released in `on_cleanup`, so closing
/// mid-scroll or swapping projects never leaks a listener, and the scroll
/// lock is lifted even when the view dies before the timer fires.
#[component]
pub fn ProjectDetail(
    project: Project,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional_no_strip)] on_prev: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_next: Option<Callback<()>>,
) -> impl IntoView {
    let (scroll, set_scroll) = signal(0.0_f64);
    let (pointer, set_pointer) = signal((0.0_f64, 0.0_f64));
    let (carousel, set_carousel) = signal(Carousel::new(project.images.len()));

    let scroll_listener = StoredValue::new(None::<WindowListenerHandle>);
    let mouse_listener = StoredValue::new(None::<WindowListenerHandle>);
    let key_listener = StoredValue::new(None::<WindowListenerHandle>);
    let unlock_timer = StoredValue::new(None::<TimeoutHandle>);
    let scroll_locked = StoredValue::new(false);

    Effect::new(move |_| {
        let on_scroll = window_event_listener(ev::scroll, move |_| {
            let win = window();
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let doc_height = document()
                .document_element()
                .map_or(0.0, |el| f64::from(el.scroll_height()));
            set_scroll.set(scroll_progress(scroll_y, doc_height, viewport));
        });
        scroll_listener.set_value(Some(on_scroll));

        let on_mouse = window_event_listener(ev::mousemove, move |ev| {
            let win = window();
            let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            set_pointer.set((
                pointer_fraction(f64::from(ev.client_x()), width),
                pointer_fraction(f64::from(ev.client_y()), height),
            ));
        });
        mouse_listener.set_value(Some(on_mouse));

        let on_key = window_event_listener(ev::keydown, move |ev| {
            match ev.key().as_str() {
                "Escape" => on_close.run(()),
                "ArrowLeft" => {
                    if let Some(prev) = on_prev {
                        prev.run(());
                    }
                }
                "ArrowRight" => {
                    if let Some(next) = on_next {
                        next.run(());
                    }
                }
                _ => {}
            }
        });
        key_listener.set_value(Some(on_key));

        // Suppress body scroll while the entry animation settles.
        set_body_overflow("hidden");
        scroll_locked.set_value(true);
        let unlock = set_timeout_with_handle(
            || set_body_overflow("auto"),
            Duration::from_millis(SCROLL_LOCK_MS),
        );
        unlock_timer.set_value(unlock.ok());
    });

    on_cleanup(move || {
        for listener in [scroll_listener, mouse_listener, key_listener] {
            listener.update_value(|handle| {
                if let Some(handle) = handle.take() {
                    handle.remove();
                }
            });
        }
        if let Some(timer) = unlock_timer.get_value() {
            timer.clear();
        }
        // The lock must lift even when the view dies before the timer fires.
        if scroll_locked.get_value() {
            set_body_overflow("auto");
        }
    });

    let image_tilt = move || {
        let (x, y) = pointer.get();
        format!("rotateX({:.2}deg) rotateY({:.2}deg)", y * -10.0, x * 10.0)
    };

    let Project {
        title,
        category,
        year,
        full_description,
        technologies,
        timeline,
        role,
        challenges,
        results,
        images,
        live_url,
        github_url,
        ..
    } = project;

    let image_count = images.len();
    let alt_title = title.clone();

    view! {
        <div class="detail">
            <div class="detail-progress-track">
                <div
                    class="detail-progress-fill"
                    style:width=move || format!("{:.2}%", scroll.get())
                ></div>
            </div>

            <header class="detail-header">
                <button class="detail-back" on:click=move |_| on_close.run(())>
                    <span class="detail-back-arrow">"←"</span>
                    <span>"BACK_TO_PROJECTS"</span>
                </button>

                <div class="detail-siblings">
                    {on_prev.map(|prev| {
                        view! {
                            <button
                                class="detail-sibling"
                                aria-label="Previous project"
                                on:click=move |_| prev.run(())
                            >
                                "←"
                            </button>
                        }
                    })}
                    {on_next.map(|next| {
                        view! {
                            <button
                                class="detail-sibling"
                                aria-label="Next project"
                                on:click=move |_| next.run(())
                            >
                                "→"
                            </button>
                        }
                    })}
                </div>

                <button
                    class="detail-close"
                    aria-label="Close project"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
            </header>

            <div class="detail-body">
                <div class="detail-hero">
                    <div class="detail-meta">
                        <span>{category.clone()}</span>
                        <span class="detail-meta-divider"></span>
                        <span>{year.clone()}</span>
                        <span class="detail-meta-divider"></span>
                        <span>{timeline.clone()}</span>
                    </div>

                    <h1 class="detail-title">{title}</h1>
                    <p class="detail-description">{full_description}</p>

                    <div class="detail-links">
                        {live_url.map(|url| {
                            view! {
                                <a class="detail-link detail-link--primary" href=url
                                    target="_blank" rel="noopener noreferrer">
                                    "LIVE_SITE"
                                </a>
                            }
                        })}
                        {github_url.map(|url| {
                            view! {
                                <a class="detail-link" href=url
                                    target="_blank" rel="noopener noreferrer">
                                    "SOURCE_CODE"
                                </a>
                            }
                        })}
                    </div>
                </div>

                <div class="detail-carousel" style:transform=image_tilt>
                    {images
                        .into_iter()
                        .enumerate()
                        .map(|(index, _)| {
                            let is_current = move || carousel.get().is_current(index);
                            view! {
                                <div
                                    class="detail-carousel-slide"
                                    class=("detail-carousel-slide--current", is_current)
                                >
                                    <img
                                        src=DETAIL_IMAGE
                                        alt=format!("{} - Image {}", alt_title, index + 1)
                                    />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="detail-carousel-scanline" aria-hidden="true"></div>

                    <Show when=move || { image_count > 1 }>
                        <div class="detail-carousel-dots">
                            {(0..image_count)
                                .map(|index| {
                                    let is_current =
                                        move || carousel.get().is_current(index);
                                    view! {
                                        <button
                                            class="detail-carousel-dot"
                                            class=("detail-carousel-dot--current", is_current)
                                            aria-label=format!("Show image {}", index + 1)
                                            on:click=move |_| {
                                                set_carousel.update(|c| c.set(index));
                                            }
                                        ></button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </Show>
                </div>

                <div class="detail-grid">
                    <div class="detail-main">
                        <div class="detail-block">
                            <div class="section-label">"> MY_ROLE"</div>
                            <div class="detail-role">{role}</div>
                            <div class="section-rule"></div>
                        </div>

                        <div class="detail-block">
                            <div class="section-label">"> CHALLENGES_SOLVED"</div>
                            <div class="detail-challenges">
                                {challenges
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, challenge)| {
                                        view! {
                                            <div class="detail-challenge">
                                                <span class="detail-challenge-index">
                                                    {format!("{:02}", index + 1)}
                                                </span>
                                                <p>{challenge}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="section-rule"></div>
                        </div>

                        <div class="detail-block">
                            <div class="section-label">"> RESULTS_ACHIEVED"</div>
                            <div class="detail-results">
                                {results
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, result)| {
                                        view! {
                                            <div class="detail-result">
                                                <div class="detail-result-label">
                                                    {format!("METRIC_{:02}", index + 1)}
                                                </div>
                                                <div class="detail-result-value">{result}</div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="section-rule"></div>
                        </div>
                    </div>

                    <aside class="detail-sidebar">
                        <div class="section-label">"> TECH_STACK"</div>
                        <div class="detail-tech">
                            {technologies
                                .into_iter()
                                .map(|tech| view! { <span class="detail-tech-tag">{tech}</span> })
                                .collect::<Vec<_>>()}
                        </div>

                        <div class="detail-info-box">
                            <div class="detail-info-row">
                                <div class="detail-info-label">"CATEGORY"</div>
                                <div class="detail-info-value">{category}</div>
                            </div>
                            <div class="detail-info-row">
                                <div class="detail-info-label">"YEAR"</div>
                                <div class="detail-info-value">{year}</div>
                            </div>
                            <div class="detail-info-row">
                                <div class="detail-info-label">"TIMELINE"</div>
                                <div class="detail-info-value">{timeline}</div>
                            </div>
                            <div class="detail-info-row">
                                <div class="detail-info-label">"STATUS"</div>
                                <div class="detail-info-value detail-info-value--status">
                                    <span class="detail-status-dot"></span>
                                    "LIVE"
                                </div>
                            </div>
                        </div>
                    </aside>
                </div>

                {on_next.map(|next| {
                    view! {
                        <div class="detail-next">
                            <div class="section-label">"> NEXT_PROJECT"</div>
                            <button class="detail-next-cta" on:click=move |_| next.run(()) >
                                <div class="detail-next-row">
                                    <span class="detail-next-headline">"VIEW_NEXT_PROJECT"</span>
                                    <span class="detail-next-arrow">"→"</span>
                                </div>
                                <div class="detail-next-sub">"CONTINUE_EXPLORING_OUR_WORK"</div>
                            </button>
                        </div>
                    }
                })}
            </div>

            <div class="grid-backdrop grid-backdrop--fixed"></div>
        </div>
    }
}
