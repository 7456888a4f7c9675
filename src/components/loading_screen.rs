use std::time::Duration;

use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};
use leptos::prelude::*;

/// Progress counter for the loading screen. Monotonically non-decreasing,
/// clamped to 100, and reports completion exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoadingProgress {
    value: u8,
    step: u8,
    completed: bool,
}

impl LoadingProgress {
    fn new(step: u8) -> Self {
        Self {
            value: 0,
            step,
            completed: false,
        }
    }

    /// Per-tick increment that reaches 100 over `duration_ms` of
    /// `tick_ms`-spaced ticks, never less than 1.
    fn step_for(tick_ms: u64, duration_ms: u64) -> u8 {
        let ticks = (duration_ms / tick_ms.max(1)).max(1);
        u8::try_from((100 / ticks).max(1)).unwrap_or(100)
    }

    /// Advance one tick. Returns `true` on the tick that first reaches 100.
    fn tick(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.value = self.value.saturating_add(self.step).min(100);
        if self.value == 100 {
            self.completed = true;
            return true;
        }
        false
    }

    fn value(&self) -> u8 {
        self.value
    }
}

/// Full-screen boot sequence. Ticks a bounded counter on a fixed interval
/// and, once it hits 100, stops the interval and fires `on_complete` once
/// after the settle delay. Both timer handles are cleared on teardown so an
/// early unmount never fires into a dead view.
#[component]
pub fn LoadingScreen(
    #[prop(into)] on_complete: Callback<()>,
    #[prop(default = 20)] tick_ms: u64,
    #[prop(default = 2000)] duration_ms: u64,
    #[prop(default = 500)] settle_ms: u64,
) -> impl IntoView {
    let step = LoadingProgress::step_for(tick_ms, duration_ms);
    let (progress, set_progress) = signal(LoadingProgress::new(step));

    let interval = StoredValue::new(None::<IntervalHandle>);
    let settle = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || {
                set_progress.update(|p| {
                    if p.tick() {
                        if let Some(h) = interval.get_value() {
                            h.clear();
                        }
                        let timeout = set_timeout_with_handle(
                            move || on_complete.run(()),
                            Duration::from_millis(settle_ms),
                        );
                        settle.set_value(timeout.ok());
                    }
                });
            },
            Duration::from_millis(tick_ms),
        );
        interval.set_value(handle.ok());
    });

    on_cleanup(move || {
        if let Some(h) = interval.get_value() {
            h.clear();
        }
        if let Some(h) = settle.get_value() {
            h.clear();
        }
    });

    let percent = move || progress.get().value();

    view! {
        <div class="loading-screen">
            <div class="loading-logo">
                <span class="loading-wordmark">"TRACE_COLLECTIVE"</span>
                <Show when=move || { percent() > 50 }>
                    <span class="loading-wordmark loading-wordmark--glitch" aria-hidden="true">
                        "TRACE_COLLECTIVE"
                    </span>
                </Show>
            </div>

            <div class="loading-terminal">
                <div>"> INITIALIZING TRACE_COLLECTIVE.CORE"</div>
                <div>"> LOADING ASSETS... [OK]"</div>
                <div>"> COMPILING 3D_RENDERER... [OK]"</div>
                <div>"> ESTABLISHING CONNECTION..."</div>
            </div>

            <div class="loading-bar">
                <div
                    class="loading-bar-fill"
                    style:width=move || format!("{}%", percent())
                >
                    <div class="loading-bar-notches">
                        {(0..20)
                            .map(|i| {
                                view! {
                                    <div
                                        class="loading-bar-notch"
                                        style:left=format!("{}%", i * 5)
                                    ></div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="loading-percent">{move || format!("{:03}%", percent())}</div>

            <Show when=move || percent() == 100>
                <div class="loading-flash" aria-hidden="true"></div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::LoadingProgress;

    #[test]
    fn reaches_bound_and_completes_exactly_once() {
        let mut progress = LoadingProgress::new(1);
        let mut completions = Vec::new();
        let mut previous = 0;

        for tick in 1..=150 {
            if progress.tick() {
                completions.push(tick);
            }
            assert!(progress.value() >= previous, "progress went backwards");
            previous = progress.value();
        }

        assert_eq!(completions, vec![100]);
        assert_eq!(progress.value(), 100);
    }

    #[test]
    fn further_ticks_after_completion_do_nothing() {
        let mut progress = LoadingProgress::new(100);
        assert!(progress.tick());
        for _ in 0..10 {
            assert!(!progress.tick());
            assert_eq!(progress.value(), 100);
        }
    }

    #[test]
    fn step_never_overshoots_the_bound() {
        // Step of 7 doesn't divide 100 evenly; the last tick must clamp.
        let mut progress = LoadingProgress::new(7);
        let mut completed = 0;
        for _ in 0..30 {
            if progress.tick() {
                completed += 1;
            }
            assert!(progress.value() <= 100);
        }
        assert_eq!(completed, 1);
        assert_eq!(progress.value(), 100);
    }

    #[test]
    fn step_is_derived_from_timing() {
        // 2000ms / 20ms = 100 ticks, so one percent per tick.
        assert_eq!(LoadingProgress::step_for(20, 2000), 1);
        assert_eq!(LoadingProgress::step_for(50, 1000), 5);
        // Degenerate configuration still makes forward progress.
        assert_eq!(LoadingProgress::step_for(20, 0), 100);
        assert_eq!(LoadingProgress::step_for(0, 2000), 1);
    }
}
