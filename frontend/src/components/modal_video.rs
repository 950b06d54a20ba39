use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::styles;

const MODAL_CSS: &str = r#"
    .services-trigger {
        padding: 0.5rem 1.5rem;
        background: #c9a27e;
        color: #fff;
        border: none;
        border-radius: 8px;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .services-trigger:hover {
        background: rgba(201, 162, 126, 0.9);
    }
    .modal-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.7);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 50;
        animation: modalFadeIn 0.2s ease-in-out;
    }
    .modal-content {
        position: relative;
        width: min(90vw, 800px);
        min-height: 200px;
        background: #1a1a1a;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 16px;
        padding: 2.5rem 1.5rem 1.5rem;
    }
    .modal-close {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        background: transparent;
        border: none;
        color: #fff;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .modal-video {
        width: 100%;
        aspect-ratio: 16 / 9;
        border: 0;
    }
"#;

// Keyframes are global; scoped sheets only carry rules.
const MODAL_KEYFRAMES: &str = r#"
    @keyframes modalFadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
"#;

#[function_component(ModalVideo)]
pub fn modal_video() -> Html {
    let open = use_state_eq(|| false);
    let style = styles::scoped(MODAL_CSS);

    {
        let open = open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                open.set(false);
            }
        });
    }

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    // Clicks inside the dialog must not reach the overlay.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={style}>
            <button class="services-trigger" onclick={show}>
                {"View Services"}
            </button>
            {
                if *open {
                    html! {
                        <div class="modal-overlay" onclick={close.clone()}>
                            <div class="modal-content" role="dialog" aria-modal="true" onclick={keep_open}>
                                <button class="modal-close" aria-label="Close" onclick={close}>
                                    {"×"}
                                </button>
                                {
                                    if let Some(url) = config::SERVICES_VIDEO_URL {
                                        html! {
                                            <iframe
                                                class="modal-video"
                                                src={url}
                                                title="Our services"
                                                allow="autoplay; encrypted-media; picture-in-picture"
                                                allowfullscreen=true
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>{MODAL_KEYFRAMES}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_animation_has_matching_keyframes() {
        assert!(MODAL_CSS.contains("animation: modalFadeIn"));
        assert!(MODAL_KEYFRAMES.contains("@keyframes modalFadeIn"));
    }
}
