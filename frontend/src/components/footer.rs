use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::socials::Socials;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <Socials container_class={classes!("footer-socials")} />
            <p class="footer-copy">{format!("© {} {}", year, config::BUSINESS_NAME)}</p>
            <style>
                {r#"
                .site-footer {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    padding: 3rem 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: #999;
                }
                .footer-copy {
                    font-size: 0.85rem;
                    margin: 0;
                }
                "#}
            </style>
        </footer>
    }
}
