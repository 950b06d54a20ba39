use std::fmt;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod styles;
mod catalogue {
    pub mod data;
    pub mod models;
    pub mod state;
}
mod components {
    pub mod footer;
    pub mod modal_video;
    pub mod socials;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod treatments;
}

use catalogue::data::{embedded_catalogue, Catalogue};
use components::footer::Footer;
use pages::{contact::Contact, home::Home, treatments::TreatmentsRoute};

const SCROLL_THRESHOLD: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/treatments")]
    Treatments,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Treatments => {
            info!("Rendering Treatments page");
            html! { <TreatmentsRoute /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn">{"Back home"}</Link<Route>>
                </div>
            }
        }
    }
}

/// Logs a failed scroll-listener call. Returns whether it succeeded.
fn report_listener<E: fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("failed to {} scroll listener: {:?}", action, e);
            false
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>);

                    report_listener(
                        "attach",
                        window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        report_listener(
                            "detach",
                            window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            ),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BUSINESS_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Treatments} classes="nav-link">
                            {"Treatments"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-book-button">
                            {"Book"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Loads the shipped catalogue; an invalid one is logged and replaced by an empty list.
fn load_catalogue_or_empty() -> Rc<Catalogue> {
    match embedded_catalogue() {
        Ok(catalogue) => {
            info!("Loaded {} treatments", catalogue.items().len());
            Rc::new(catalogue)
        }
        Err(e) => {
            error!("Failed to load treatment catalogue: {}", e);
            Rc::new(Catalogue::default())
        }
    }
}

#[function_component]
fn App() -> Html {
    let catalogue = use_state(load_catalogue_or_empty);

    html! {
        <ContextProvider<Rc<Catalogue>> context={(*catalogue).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ContextProvider<Rc<Catalogue>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_failures_are_reported() {
        assert!(report_listener::<&str>("attach", Ok(())));
        assert!(!report_listener("detach", Err("listener not registered")));
    }
}
