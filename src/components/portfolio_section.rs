use leptos::prelude::*;

use crate::catalog::Project;

const PREVIEW_OFFSET_PX: i32 = 20;
const PREVIEW_IMAGE: &str = "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&q=80";

/// The SELECTED WORK list. Tracks which row the pointer is over plus the
/// last-known pointer position, and floats a preview card at a fixed offset
/// from the cursor while a row is hovered. Clicking a row raises the project
/// to the view coordinator via `on_select`.
#[component]
pub fn PortfolioSection(
    projects: Vec<Project>,
    #[prop(into)] on_select: Callback<Project>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<Project>);
    let (pointer, set_pointer) = signal((0_i32, 0_i32));

    view! {
        <section
            class="portfolio"
            id="work"
            on:mousemove=move |ev| set_pointer.set((ev.client_x(), ev.client_y()))
        >
            <div class="section-header">
                <div class="section-header-row">
                    <h2>"SELECTED WORK"</h2>
                    <span class="section-header-range">"2023—2025"</span>
                </div>
                <div class="section-rule"></div>
            </div>

            <div class="portfolio-list">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| {
                        let id = project.id;
                        let title = project.title.clone();
                        let category = project.category.clone();
                        let year = project.year.clone();
                        let enter_project = project.clone();
                        let is_hovered =
                            move || hovered.get().is_some_and(|h| h.id == id);

                        view! {
                            <div
                                class="portfolio-row"
                                class=("portfolio-row--hovered", is_hovered)
                                on:mouseenter=move |_| {
                                    set_hovered.set(Some(enter_project.clone()));
                                }
                                on:mouseleave=move |_| set_hovered.set(None)
                                on:click=move |_| on_select.run(project.clone())
                            >
                                <div class="portfolio-index">
                                    {format!("{:02}", index + 1)}
                                </div>
                                <h3 class="portfolio-title">{title}</h3>
                                <div class="portfolio-category">{category}</div>
                                <div class="portfolio-year">{year}</div>
                                <div class="portfolio-arrow">
                                    <div class="portfolio-arrow-box">
                                        <div class="portfolio-arrow-line"></div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || {
                hovered.get().map(|project| {
                    let (x, y) = pointer.get();
                    view! {
                        <div
                            class="preview-card"
                            style:left=format!("{}px", x + PREVIEW_OFFSET_PX)
                            style:top=format!("{}px", y + PREVIEW_OFFSET_PX)
                        >
                            <div class="preview-card-frame"></div>
                            <img
                                class="preview-card-image"
                                src=PREVIEW_IMAGE
                                alt=project.title.clone()
                            />
                            <div class="preview-card-info">
                                <div class="preview-card-category">{project.category}</div>
                                <div class="preview-card-description">{project.description}</div>
                            </div>
                            <div class="preview-card-scanline"></div>
                        </div>
                    }
                })
            }}

            <div class="grid-backdrop"></div>
        </section>
    }
}
