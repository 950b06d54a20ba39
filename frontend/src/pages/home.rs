use yew::prelude::*;
use yew_router::components::Link;

use crate::components::modal_video::ModalVideo;
use crate::components::socials::Socials;
use crate::config;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{config::BUSINESS_NAME}</h1>
                <p class="lead">
                    {"Advanced skin treatments and beauty services focused on healthy skin function, visible glow, and confidence."}
                </p>
                <div class="home-actions">
                    <ModalVideo />
                    <Link<Route> to={Route::Treatments} classes="btn-outline">
                        {"Browse treatments"}
                    </Link<Route>>
                </div>
                <Socials container_class={classes!("home-socials")} />
            </section>
            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    color: #fff;
                }
                .home-hero {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 9rem 1rem 4rem;
                    text-align: center;
                }
                .home-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                }
                .home-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .home-socials {
                    justify-content: center;
                }
                @media (max-width: 768px) {
                    .home-hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
