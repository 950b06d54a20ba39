use yew::prelude::*;

use crate::config::SOCIAL_LINKS;

#[derive(Properties, PartialEq)]
pub struct SocialsProps {
    #[prop_or_default]
    pub container_class: Classes,
}

#[function_component(Socials)]
pub fn socials(props: &SocialsProps) -> Html {
    html! {
        <>
            <ul class={classes!("socials", props.container_class.clone())}>
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <li key={link.name}>
                        <a
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={link.name}
                        >
                            <img src={link.icon} alt="" class="social-icon" />
                        </a>
                    </li>
                }) }
            </ul>
            <style>
                {r#"
                .socials {
                    display: flex;
                    gap: 1rem;
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .socials a {
                    display: inline-flex;
                    opacity: 0.8;
                    transition: opacity 0.3s ease;
                }
                .socials a:hover {
                    opacity: 1;
                }
                .social-icon {
                    width: 22px;
                    height: 22px;
                }
                "#}
            </style>
        </>
    }
}
