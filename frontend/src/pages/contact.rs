use yew::prelude::*;

use crate::components::socials::Socials;
use crate::config;

/// Booking destination for every "Book / Enquire" link.
#[function_component(Contact)]
pub fn contact() -> Html {
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

    html! {
        <div class="contact-page">
            <section class="contact-card">
                <h1>{"Book / Enquire"}</h1>
                <p>
                    {"Message us on WhatsApp with the treatment you're interested in and a few times that suit you. \
                      Not sure what to book? Ask for a Skin Consultation and we'll recommend a plan."}
                </p>
                <a
                    href={config::whatsapp_link(Some("Hi, I'd like to book an appointment."))}
                    class="btn"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Message on WhatsApp"}
                </a>
                <div class="contact-socials">
                    <p>{"Or find us on social media"}</p>
                    <Socials container_class={classes!("contact-socials-list")} />
                </div>
            </section>
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    padding: 9rem 1rem 4rem;
                    color: #fff;
                }
                .contact-card {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    text-align: center;
                }
                .contact-card p {
                    color: #bbb;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .contact-socials {
                    margin-top: 2.5rem;
                }
                .contact-socials-list {
                    justify-content: center;
                }
                "#}
            </style>
        </div>
    }
}
