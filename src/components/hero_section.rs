use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::{
    set_interval_with_handle, window_event_listener, IntervalHandle, WindowListenerHandle,
};
use leptos::prelude::*;

use crate::state::pointer_fraction;

fn pointer_offsets(client_x: i32, client_y: i32) -> (f64, f64) {
    let win = window();
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (
        pointer_fraction(f64::from(client_x), width),
        pointer_fraction(f64::from(client_y), height),
    )
}

/// Landing hero: oversized headline over a wireframe sphere that tilts with
/// the pointer and "breathes" on a decorative clock. The mouse listener and
/// the clock interval live exactly as long as the section.
#[component]
pub fn HeroSection() -> impl IntoView {
    let (pointer, set_pointer) = signal((0.0_f64, 0.0_f64));
    let (clock, set_clock) = signal(0.0_f64);

    let mouse_listener = StoredValue::new(None::<WindowListenerHandle>);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        let mouse = window_event_listener(ev::mousemove, move |ev| {
            set_pointer.set(pointer_offsets(ev.client_x(), ev.client_y()));
        });
        mouse_listener.set_value(Some(mouse));

        let handle = set_interval_with_handle(
            move || set_clock.update(|t| *t += 0.01),
            Duration::from_millis(16),
        );
        ticker.set_value(handle.ok());
    });

    on_cleanup(move || {
        mouse_listener.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.remove();
            }
        });
        if let Some(h) = ticker.get_value() {
            h.clear();
        }
    });

    let sphere_tilt = move || {
        let (x, y) = pointer.get();
        format!("rotateX({:.2}deg) rotateY({:.2}deg)", y * -30.0, x * 30.0)
    };

    view! {
        <section class="hero" id="hero">
            <div class="grid-backdrop grid-backdrop--coarse"></div>

            <div class="hero-objects" aria-hidden="true">
                <div class="hero-sphere" style:transform=sphere_tilt>
                    {(0..8)
                        .map(|i| {
                            let ring = move || {
                                let wobble = (clock.get() + f64::from(i)).sin() * 10.0;
                                format!(
                                    "rotateY({}deg) rotateX({:.2}deg)",
                                    f64::from(i) * 22.5,
                                    wobble,
                                )
                            };
                            view! { <div class="hero-ring" style:transform=ring></div> }
                        })
                        .collect::<Vec<_>>()}
                </div>

                {(0..5)
                    .map(|i| {
                        let cube_tilt = move || {
                            let (x, y) = pointer.get();
                            let factor = 1.0 + f64::from(i) * 0.3;
                            format!(
                                "rotateX({:.2}deg) rotateY({:.2}deg)",
                                y * -30.0 * factor,
                                x * 30.0 * factor,
                            )
                        };
                        view! {
                            <div
                                class="hero-cube"
                                style:left=format!("{}%", 20 + i * 15)
                                style:top=format!("{}%", 30 + (i % 2) * 40)
                                style:transform=cube_tilt
                            ></div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="hero-content">
                <h1 class="hero-headline">
                    <span class="hero-headline-main">"TRACE"</span>
                    <span class="hero-headline-ghost" aria-hidden="true">"TRACE"</span>
                </h1>
                <h2 class="hero-subheadline">"COLLECTIVE"</h2>

                <div class="hero-tagline">
                    <p>"A BUILDER-LED CREATIVE & VENTURE STUDIO"</p>
                    <div class="hero-dots">
                        <div class="hero-dot"></div>
                        <div class="hero-dot hero-dot--dim"></div>
                        <div class="hero-dot hero-dot--dimmer"></div>
                    </div>
                </div>

                <a class="hero-cta" href="#work">
                    <span>"EXPLORE WORK"</span>
                </a>
            </div>

            <div class="hero-baseline"></div>
            <div class="hero-scroll-hint">
                <span>"SCROLL"</span>
                <div class="hero-scroll-line"></div>
            </div>
        </section>
    }
}
