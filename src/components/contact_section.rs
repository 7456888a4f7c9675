use leptos::prelude::*;

/// The known form fields. Tracking focus as an enum rather than a free
/// string keeps a typo from silently never matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Email,
    ProjectType,
    Message,
}

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("TWITTER", "@trace_collective"),
    ("GITHUB", "github.com/trace"),
    ("DISCORD", "discord.gg/trace"),
];

const PROJECT_TYPES: [(&str, &str); 5] = [
    ("web3", "WEB3_DEVELOPMENT"),
    ("brand", "BRAND_IDENTITY"),
    ("product", "DIGITAL_PRODUCT"),
    ("venture", "VENTURE_BUILDING"),
    ("other", "OTHER"),
];

/// Contact block. The form tracks which field has focus to drive the glow
/// treatment; it deliberately has no submission handler — there is no
/// backend to submit to.
#[component]
pub fn ContactSection() -> impl IntoView {
    let (focused, set_focused) = signal(None::<FormField>);

    let field_wrap = move |field: FormField, input: AnyView| {
        let is_focused = move || focused.get() == Some(field);
        view! {
            <div class="form-field" class=("form-field--focused", is_focused)>
                <div class="form-field-glow"></div>
                {input}
            </div>
        }
    };

    view! {
        <section class="contact" id="contact">
            <div class="section-header">
                <h2>"GET_IN_TOUCH"</h2>
                <div class="section-rule"></div>
            </div>

            <div class="contact-columns">
                <div class="contact-form-column">
                    <div class="section-label">"> SEND_MESSAGE"</div>

                    <form class="contact-form">
                        {field_wrap(
                            FormField::Name,
                            view! {
                                <input
                                    type="text"
                                    placeholder="YOUR_NAME"
                                    on:focus=move |_| set_focused.set(Some(FormField::Name))
                                    on:blur=move |_| set_focused.set(None)
                                />
                            }
                                .into_any(),
                        )}
                        {field_wrap(
                            FormField::Email,
                            view! {
                                <input
                                    type="email"
                                    placeholder="EMAIL_ADDRESS"
                                    on:focus=move |_| set_focused.set(Some(FormField::Email))
                                    on:blur=move |_| set_focused.set(None)
                                />
                            }
                                .into_any(),
                        )}
                        {field_wrap(
                            FormField::ProjectType,
                            view! {
                                <select
                                    on:focus=move |_| {
                                        set_focused.set(Some(FormField::ProjectType));
                                    }
                                    on:blur=move |_| set_focused.set(None)
                                >
                                    <option value="">"PROJECT_TYPE"</option>
                                    {PROJECT_TYPES
                                        .into_iter()
                                        .map(|(value, label)| {
                                            view! { <option value=value>{label}</option> }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            }
                                .into_any(),
                        )}
                        {field_wrap(
                            FormField::Message,
                            view! {
                                <textarea
                                    placeholder="MESSAGE_CONTENT"
                                    rows="6"
                                    on:focus=move |_| set_focused.set(Some(FormField::Message))
                                    on:blur=move |_| set_focused.set(None)
                                ></textarea>
                            }
                                .into_any(),
                        )}

                        <button type="submit" class="contact-submit">
                            <span>"SEND_MESSAGE"</span>
                        </button>
                    </form>
                </div>

                <div class="contact-info-column">
                    <div class="contact-direct">
                        <div class="section-label">"> DIRECT_CONTACT"</div>
                        <a class="contact-email" href="mailto:hello@tracecollective.xyz">
                            "hello@tracecollective.xyz"
                        </a>
                        <div class="contact-hours">"Available Mon—Fri, 9:00—18:00 UTC"</div>
                    </div>

                    <div class="contact-social">
                        <div class="section-label">"> SOCIAL_CHANNELS"</div>
                        {SOCIAL_LINKS
                            .into_iter()
                            .enumerate()
                            .map(|(index, (name, handle))| {
                                view! {
                                    <div class="contact-social-row">
                                        <span class="contact-social-index">
                                            {format!("{:02}", index + 1)}
                                        </span>
                                        <div class="contact-social-names">
                                            <div class="contact-social-name">{name}</div>
                                            <div class="contact-social-handle">{handle}</div>
                                        </div>
                                        <span class="contact-social-marker"></span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="contact-location">
                        <div class="section-label">"> LOCATION"</div>
                        <div class="contact-location-name">"DISTRIBUTED_GLOBALLY"</div>
                        <div class="contact-location-detail">
                            "Remote-first • Timezone agnostic"
                        </div>
                        <div class="contact-equalizer" aria-hidden="true">
                            {(0..12)
                                .map(|i| {
                                    view! {
                                        <div
                                            class="contact-equalizer-bar"
                                            style:animation-delay=format!("{}ms", i * 100)
                                        ></div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>

            <footer class="site-footer">
                <div class="site-footer-copyright">
                    "© 2025 TRACE_COLLECTIVE. ALL RIGHTS RESERVED."
                </div>
                <div class="site-footer-links">
                    <a href="#">"PRIVACY_POLICY"</a>
                    <a href="#">"TERMS_OF_SERVICE"</a>
                </div>
            </footer>
        </section>
    }
}
