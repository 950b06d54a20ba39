use std::collections::BTreeSet;
use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::catalogue::data::Catalogue;
use crate::catalogue::models::{CategoryFilter, Treatment};
use crate::catalogue::state::{CatalogueAction, CatalogueState};
use crate::config;
use crate::styles;
use crate::Route;

const QUICK_STATS: &[(&str, &str)] = &[
    ("Consultation-led", "Personalised plans"),
    ("Results-focused", "Skin-first approach"),
    ("Minimal downtime", "When possible"),
];

const TREATMENT_IMAGE: &str = "/assets/treatments/treatment-room.svg";

const FAQS: &[(&str, &str)] = &[
    (
        "I'm not sure what to book. What do I do?",
        "Start with a Skin Consultation. You'll get a clear plan and the right treatment pathway for your goals and skin type.",
    ),
    (
        "Do advanced treatments have downtime?",
        "Some do. Downtime varies by treatment and skin. You'll be guided clearly before booking so you can plan around work, events and travel.",
    ),
    (
        "How many sessions will I need?",
        "Some treatments deliver an instant glow, but the best results often come from a course. Your plan will be tailored during consultation.",
    ),
];

const CARD_CSS: &str = r#"
    border-radius: 1rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    padding: 1.5rem;
    opacity: 0;
    animation: fadeInUp 0.6s ease-in-out forwards;
    transition: border-color 0.3s ease;

    &:hover {
        border-color: rgba(255, 255, 255, 0.2);
    }
    .card-head {
        display: flex;
        align-items: flex-start;
        justify-content: space-between;
        gap: 1rem;
    }
    .card-badge {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 0.5rem;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        opacity: 0.7;
    }
    .card-badge-mark {
        width: 12px;
        height: 12px;
        background: #c9a27e;
        border-radius: 28px 4px 22px 28px;
    }
    .card-chips {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-top: 0.5rem;
        font-size: 0.875rem;
    }
    .card-chip {
        border-radius: 999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 0.25rem 0.75rem;
    }
    .card-toggle {
        flex-shrink: 0;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: transparent;
        color: inherit;
        padding: 0.5rem 0.75rem;
        cursor: pointer;
    }
    .card-details {
        display: grid;
        grid-template-rows: 0fr;
        transition: grid-template-rows 0.3s ease-in-out, margin-top 0.3s ease-in-out;
    }
    .card-details.open {
        grid-template-rows: 1fr;
        margin-top: 1.25rem;
    }
    .card-details > div {
        overflow: hidden;
    }
    .card-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .card-tag {
        font-size: 0.75rem;
        border-radius: 999px;
        background: rgba(0, 0, 0, 0.2);
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 0.25rem 0.75rem;
    }
    .card-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
        margin-top: 1.5rem;
    }
"#;

/// Answers open independently of each other.
fn toggle_answer(open: &BTreeSet<usize>, index: usize) -> BTreeSet<usize> {
    let mut next = open.clone();
    if !next.remove(&index) {
        next.insert(index);
    }
    next
}

#[derive(Properties, PartialEq)]
pub struct TreatmentCardProps {
    pub treatment: Treatment,
    pub expanded: bool,
    pub index: usize,
    pub on_toggle: Callback<String>,
}

#[function_component(TreatmentCard)]
pub fn treatment_card(props: &TreatmentCardProps) -> Html {
    let TreatmentCardProps { treatment, expanded, index, on_toggle } = props;
    let style = styles::scoped(CARD_CSS);
    let panel_id = treatment.panel_id();

    let toggle = {
        let on_toggle = on_toggle.clone();
        let id = treatment.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    html! {
        <div class={classes!(style, "treatment-card")} style={styles::stagger_delay(*index)}>
            <div class="card-head">
                <div>
                    <div class="card-badge">
                        <div class="card-badge-mark"></div>
                        <div>{treatment.category.label()}</div>
                    </div>
                    <h4 class="card-title">{&treatment.title}</h4>
                    <div class="card-chips">
                        <span class="card-chip">{&treatment.duration}</span>
                        <span class="card-chip">{&treatment.price}</span>
                        <span class="card-chip">{format!("Downtime: {}", treatment.downtime)}</span>
                    </div>
                </div>
                <button
                    class="card-toggle"
                    onclick={toggle}
                    aria-expanded={expanded.to_string()}
                    aria-controls={panel_id.clone()}
                >
                    {if *expanded { "Less" } else { "Details" }}
                </button>
            </div>

            <p class="card-summary">{&treatment.summary}</p>

            <div id={panel_id} class={classes!("card-details", expanded.then_some("open"))}>
                <div>
                    <div class="card-section">
                        <div class="card-section-title">{"Best for"}</div>
                        <div class="card-tags">
                            { for treatment.best_for.iter().map(|tag| html! {
                                <span key={tag.clone()} class="card-tag">{tag}</span>
                            }) }
                        </div>
                    </div>

                    <div class="card-section">
                        <div class="card-section-title">{"What's included"}</div>
                        <ul class="card-highlights">
                            { for treatment.highlights.iter().map(|highlight| html! {
                                <li key={highlight.clone()}>{highlight}</li>
                            }) }
                        </ul>
                    </div>

                    <div class="card-actions">
                        <Link<Route> to={Route::Contact} classes="btn">
                            {"Book / Enquire"}
                        </Link<Route>>
                        <a
                            href={config::treatment_enquiry_link(&treatment.title)}
                            class="btn-outline"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Enquire on WhatsApp"
                        >
                            {"WhatsApp enquiry"}
                        </a>
                    </div>

                    <p class="card-note">
                        {"Pricing and suitability can vary. A consultation is recommended for advanced treatments."}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TreatmentsPageProps {
    pub catalogue: Rc<Catalogue>,
}

#[function_component(TreatmentsPage)]
pub fn treatments_page(props: &TreatmentsPageProps) -> Html {
    let state = {
        let catalogue = props.catalogue.clone();
        use_reducer(move || CatalogueState::new(catalogue))
    };

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_answers = use_state(BTreeSet::<usize>::new);

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(CatalogueAction::ToggleExpanded(id)))
    };

    let chips = CategoryFilter::options().map(|option| {
        let active = option == state.filter();
        let onclick = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| {
                state.dispatch(CatalogueAction::SelectCategory(option.label().to_string()))
            })
        };
        html! {
            <button
                key={option.label()}
                class={classes!("filter-chip", active.then_some("active"))}
                aria-pressed={active.to_string()}
                {onclick}
            >
                {option.label()}
            </button>
        }
    });

    let projection = state.projection();
    let grid = if props.catalogue.is_empty() {
        html! {
            <p class="catalogue-notice">
                {"Our treatment list is unavailable right now. Please get in touch and we'll help you choose."}
            </p>
        }
    } else if projection.is_empty() {
        html! {
            <p class="catalogue-notice">
                {format!("No {} treatments listed yet.", state.filter().label())}
            </p>
        }
    } else {
        html! {
            <div class="treatments-grid">
                { for projection.iter().enumerate().map(|(index, item)| html! {
                    <TreatmentCard
                        key={item.treatment.id.clone()}
                        treatment={item.treatment.clone()}
                        expanded={item.expanded}
                        {index}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <section class="treatments-page">
            <div class="treatments-container">
                <div class="treatments-top">
                    <div class="treatments-intro fade-in-left">
                        <h2>{"Treatments designed for real skin results"}</h2>
                        <p class="lead">
                            {format!(
                                "{} offers advanced skin treatments and beauty services focused on healthy skin function, \
                                 visible glow, and confidence. Explore facials, DMK Enzyme Therapy, microdermabrasion, \
                                 dermaplaning, microneedling, chemical peels, and semi-permanent enhancements.",
                                config::BUSINESS_NAME
                            )}
                        </p>

                        <div class="quick-stats">
                            { for QUICK_STATS.iter().enumerate().map(|(index, (key, value))| html! {
                                <div key={*key} class="quick-stat fade-in-up" style={styles::stagger_delay(index)}>
                                    <div class="quick-stat-key">{*key}</div>
                                    <div class="quick-stat-value">{*value}</div>
                                </div>
                            }) }
                        </div>

                        <div class="filter-chips fade-in-up">
                            { for chips }
                        </div>
                    </div>

                    <div class="treatments-image fade-in-right">
                        <img src={TREATMENT_IMAGE} alt="Treatment room aesthetic" />
                    </div>
                </div>

                <div class="treatments-browse">
                    <div class="browse-header">
                        <h3>{"Browse treatments"}</h3>
                        <div class="browse-tip">
                            {"Tip: Start with a "}<strong>{"Skin Consultation"}</strong>{" if you're unsure what to book."}
                        </div>
                    </div>
                    { grid }
                </div>

                <div class="treatments-bottom">
                    <div class="faq-panel fade-in-up">
                        <h3>{"Common questions"}</h3>
                        { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                            let is_open = open_answers.contains(&index);
                            let toggle = {
                                let open_answers = open_answers.clone();
                                Callback::from(move |_: MouseEvent| {
                                    open_answers.set(toggle_answer(&open_answers, index));
                                })
                            };
                            html! {
                                <div key={*question} class={classes!("faq-item", is_open.then_some("open"))}>
                                    <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                                        <span>{*question}</span>
                                        <span>{if is_open { "−" } else { "+" }}</span>
                                    </button>
                                    <p class="faq-answer">{*answer}</p>
                                </div>
                            }
                        }) }
                    </div>

                    <div class="cta-panel fade-in-up">
                        <h3>{"Ready to book?"}</h3>
                        <p>
                            {"If you want visible skin improvements with a calm, professional experience, \
                              book your appointment or send an enquiry. We'll recommend the most suitable \
                              treatment based on your skin goals."}
                        </p>
                        <div class="cta-actions">
                            <Link<Route> to={Route::Contact} classes="btn">
                                {"Book appointment"}
                            </Link<Route>>
                            <a
                                href={config::whatsapp_link(None)}
                                class="btn-outline"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Message on WhatsApp"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(18px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes fadeInLeft {
                    from { opacity: 0; transform: translateX(-40px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes fadeInRight {
                    from { opacity: 0; transform: translateX(40px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .fade-in-up {
                    opacity: 0;
                    animation: fadeInUp 0.7s ease-in-out 0.35s forwards;
                }
                .fade-in-left {
                    opacity: 0;
                    animation: fadeInLeft 0.8s ease-in-out 0.15s forwards;
                }
                .fade-in-right {
                    opacity: 0;
                    animation: fadeInRight 0.8s ease-in-out 0.25s forwards;
                }
                .treatments-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                    color: #fff;
                }
                .treatments-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 9rem 1rem 4rem;
                }
                .treatments-top {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                }
                .treatments-intro {
                    max-width: 680px;
                }
                .quick-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .quick-stat {
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 1rem 1.25rem;
                }
                .quick-stat-key {
                    font-size: 0.875rem;
                    opacity: 0.8;
                }
                .quick-stat-value {
                    font-weight: 600;
                }
                .filter-chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 2.5rem;
                }
                .filter-chip {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: inherit;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .filter-chip:hover {
                    border-color: rgba(255, 255, 255, 0.3);
                }
                .filter-chip.active {
                    background: #c9a27e;
                    border-color: #c9a27e;
                    color: #000;
                }
                .treatments-image {
                    position: relative;
                    width: 420px;
                    height: 560px;
                    border-radius: 28px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                }
                .treatments-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }
                .treatments-browse {
                    margin-top: 3.5rem;
                }
                .browse-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .browse-tip {
                    font-size: 0.875rem;
                    opacity: 0.8;
                }
                .treatments-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.25rem;
                }
                .catalogue-notice {
                    opacity: 0.8;
                    padding: 2rem 0;
                }
                .treatments-bottom {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-top: 4rem;
                }
                .faq-panel, .cta-panel {
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 1.75rem;
                }
                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem;
                    background: transparent;
                    border: none;
                    color: inherit;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    display: none;
                    padding: 0 1.25rem 1.25rem;
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                .faq-item.open .faq-answer {
                    display: block;
                }
                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                @media (max-width: 1200px) {
                    .treatments-image {
                        display: none;
                    }
                    .treatments-intro {
                        text-align: center;
                        margin: 0 auto;
                    }
                    .filter-chips {
                        justify-content: center;
                    }
                    .treatments-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .treatments-bottom {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .quick-stats, .treatments-grid {
                        grid-template-columns: 1fr;
                    }
                    .browse-header {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}

/// Route entry: takes the catalogue from the app context.
#[function_component(TreatmentsRoute)]
pub fn treatments_route() -> Html {
    let catalogue = use_context::<Rc<Catalogue>>().unwrap_or_default();
    html! { <TreatmentsPage {catalogue} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn answers_toggle_independently() {
        let open = toggle_answer(&BTreeSet::new(), 0);
        let open = toggle_answer(&open, 2);
        assert_eq!(open.iter().copied().collect::<Vec<_>>(), [0, 2]);

        let open = toggle_answer(&open, 0);
        assert_eq!(open.iter().copied().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn treatment_image_ships_with_the_assets() {
        let relative = TREATMENT_IMAGE.trim_start_matches('/');
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
        assert!(path.is_file(), "missing {}", path.display());
    }
}
