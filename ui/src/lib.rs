// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use std::rc::Rc;

use strum::IntoEnumIterator;

use app_state::AppState;
use components::pico::Card;
use components::pico::Container;
use components::toast::ToastHost;
use hooks::use_copy_to_clipboard::use_copy_provider;
use hooks::use_toasts::use_toast_provider;
use payment::config::PaymentConfig;
use payment::tab::PaymentTab;
use screens::bank::BankScreen;
use screens::qr::QrScreen;
use screens::upi::UpiScreen;

/// The tab bar. Selecting a tab only swaps the view below it.
#[component]
fn Tabs(active_tab: Signal<PaymentTab>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for tab in PaymentTab::iter() {
                    li {
                        a {
                            href: "#",
                            class: if active_tab() == tab { "active-tab" } else { "" },
                            "aria-current": if active_tab() == tab { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_tab.set(tab);
                            },
                            "{tab.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .tab-menu ul {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        width: 100%;
        margin: 0 0 1.5rem 0;
        padding: 0;
    }
    .tab-menu li { list-style: none; text-align: center; padding: 0; }
    .tab-menu a {
        display: block;
        padding: 0.5rem;
        text-decoration: none;
        border-bottom: 3px solid transparent;
    }
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-radius: 10px 10px 0 0;
        border-bottom: 3px solid var(--pico-primary);
        background: color-mix(in srgb, var(--pico-primary), transparent 95%);
    }
    .tab-menu a:not(.active-tab) { color: var(--pico-muted-color); }

    .tab-panel { min-height: 360px; display: flex; flex-direction: column; gap: 1rem; }
    .tab-panel.centered { align-items: center; }

    .qr-frame {
        background: white;
        padding: 1rem;
        border-radius: var(--pico-border-radius);
        border: 1px solid var(--pico-muted-border-color);
        margin-bottom: 1rem;
    }
    .qr-caption, .hint { text-align: center; color: var(--pico-muted-color); }

    .detail-box {
        width: 100%;
        padding: 1.5rem;
        border-radius: var(--pico-border-radius);
        background: color-mix(in srgb, var(--pico-primary), transparent 92%);
    }
    .detail-row { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 0; }
    .detail-label { color: var(--pico-muted-color); }
    .detail-value { display: flex; align-items: center; gap: 0.5rem; }
    .copied-check { color: var(--pico-ins-color); font-weight: bold; }
    .note {
        text-align: left;
        font-size: 0.9rem;
        padding: 1rem;
        border-radius: var(--pico-border-radius);
        background: var(--pico-card-sectioning-background-color);
    }

    .toast-host {
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        z-index: 1000;
    }
    .toast { margin: 0; padding: 0.75rem 1rem; min-width: 16rem; cursor: pointer; }
    .toast p { margin: 0; font-size: 0.9rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Loaded once per mount; the config never changes afterwards.
    let config = use_hook(|| PaymentConfig::load().map(AppState::new).map_err(Rc::new));

    match config {
        Ok(app_state) => rsx! {
            LoadedApp {
                app_state,
            }
        },
        Err(e) => {
            dioxus_logger::tracing::error!("invalid payment config: {}", e);
            rsx! {
                Container {
                    p {
                        "An error occurred: {e}"
                    }
                }
            }
        }
    }
}

/// This component holds the main app logic and only runs when the config is valid.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    use_toast_provider();
    // Acknowledgment state lives above the tabs so switching tabs leaves it alone.
    use_copy_provider();

    let active_tab = use_context_provider(|| Signal::new(PaymentTab::default()));

    rsx! {
        Container {
            Card {
                Tabs {
                    active_tab,
                }
                match active_tab() {
                    PaymentTab::Qr => rsx! {
                        QrScreen {}
                    },
                    PaymentTab::Upi => rsx! {
                        UpiScreen {}
                    },
                    PaymentTab::Bank => rsx! {
                        BankScreen {}
                    },
                }
            }
        }
        ToastHost {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use hooks::use_copy_to_clipboard::CopyHandle;
    use payment::field::CopyField;

    fn mount() -> VirtualDom {
        let app_state = AppState::new(PaymentConfig::default());
        let mut dom = VirtualDom::new_with_props(LoadedApp, LoadedAppProps { app_state });
        dom.rebuild_in_place();
        dom
    }

    /// Finds a context value provided anywhere in the mounted tree.
    fn context<T: Clone + 'static>(dom: &VirtualDom) -> T {
        (0..64)
            .map(ScopeId)
            .filter(|id| dom.get_scope(*id).is_some())
            .find_map(|id| dom.runtime().has_context::<T>(id))
            .expect("context not provided")
    }

    #[test]
    fn switching_tabs_keeps_acknowledgement() {
        let mut dom = mount();
        let copy: CopyHandle = context(&dom);
        let mut tab: Signal<PaymentTab> = context(&dom);

        dom.in_runtime(|| {
            let mut ack = copy.ack;
            ack.with_mut(|a| {
                a.acknowledge(CopyField::UpiId);
            });
        });

        for next in [PaymentTab::Bank, PaymentTab::Qr, PaymentTab::Upi] {
            dom.in_runtime(|| tab.set(next));
            dom.render_immediate(&mut NoOpMutations);
            assert_eq!(dom.in_runtime(|| tab()), next);
            assert!(dom.in_runtime(|| copy.is_copied(CopyField::UpiId)));
            assert!(!dom.in_runtime(|| copy.is_copied(CopyField::BankName)));
        }
    }
}
