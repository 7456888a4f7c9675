use leptos::prelude::*;

use crate::state::Accordion;

const SERVICES: [(&str, &str); 6] = [
    (
        "WEB3_DEVELOPMENT",
        "Smart contracts, protocol design, and the decentralized infrastructure \
         that keeps them honest.",
    ),
    (
        "BRAND_IDENTITY",
        "Visual systems with a point of view, from wordmark to motion language.",
    ),
    (
        "DIGITAL_PRODUCTS",
        "End-to-end product design and engineering for web and beyond.",
    ),
    (
        "VENTURE_BUILDING",
        "Co-founding and incubating ventures from first sketch to first users.",
    ),
    (
        "CREATIVE_DIRECTION",
        "Art direction and narrative for teams who want work that gets noticed.",
    ),
    (
        "INFRASTRUCTURE",
        "The unglamorous layers done well: pipelines, observability, scale.",
    ),
];

const STATS: [(&str, &str); 3] = [("50+", "PROJECTS"), ("12", "VENTURES"), ("∞", "IDEAS")];

/// About block: studio introduction, stats row, and the capabilities list.
/// The list is an accordion: at most one capability is expanded at a time
/// and clicking the open row closes it.
#[component]
pub fn AboutSection() -> impl IntoView {
    let (accordion, set_accordion) = signal(Accordion::default());

    view! {
        <section class="about" id="about">
            <div class="section-header">
                <h2>"ABOUT_US"</h2>
                <div class="section-rule"></div>
            </div>

            <div class="about-columns">
                <div class="about-intro">
                    <div class="section-label">"> INTRODUCTION"</div>
                    <div class="about-copy">
                        <p>
                            "We are a collective of builders, designers, and strategists who \
                             create at the intersection of technology and culture."
                        </p>
                        <p class="about-copy--dim">
                            "Our approach is rooted in experimentation, pushing boundaries \
                             between digital infrastructure and creative expression."
                        </p>
                        <p class="about-copy--dimmer">
                            "We don't just build products—we architect ecosystems that empower \
                             communities and redefine possibilities."
                        </p>
                    </div>

                    <div class="about-stats">
                        {STATS
                            .into_iter()
                            .map(|(number, label)| {
                                view! {
                                    <div class="about-stat">
                                        <div class="about-stat-number">{number}</div>
                                        <div class="about-stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="about-services">
                    <div class="section-label">"> CAPABILITIES"</div>
                    <div class="accordion">
                        {SERVICES
                            .into_iter()
                            .enumerate()
                            .map(|(index, (name, blurb))| {
                                let is_open = move || accordion.get().is_open(index);
                                view! {
                                    <div class="accordion-item" class=("accordion-item--open", is_open)>
                                        <button
                                            class="accordion-row"
                                            on:click=move |_| {
                                                set_accordion.update(|a| a.toggle(index));
                                            }
                                        >
                                            <span class="accordion-index">
                                                {format!("{:02}", index + 1)}
                                            </span>
                                            <span class="accordion-name">{name}</span>
                                            <span class="accordion-marker">
                                                <span class="accordion-marker-line"></span>
                                            </span>
                                        </button>
                                        <Show when=is_open>
                                            <p class="accordion-blurb">{blurb}</p>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <a class="about-cta" href="#contact">
                        <div class="section-label">"> START_A_PROJECT"</div>
                        <div class="about-cta-headline">"LET'S BUILD SOMETHING"</div>
                        <div class="about-cta-link">
                            <span>"CONTACT US"</span>
                            <span class="about-cta-arrow">"→"</span>
                        </div>
                    </a>
                </div>
            </div>

            <div class="about-orbit" aria-hidden="true"></div>
        </section>
    }
}
