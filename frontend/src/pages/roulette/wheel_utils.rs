use yew::prelude::*;
use web_sys::window;
use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use shared::constants::TOO_MUCH_DATA_ERROR;
use shared::spin::SpinPlan;
use shared::{RouletteController, RouletteError, TokenStore};
use crate::styles;

/// Start a spin with the strongest randomness the browser offers:
/// `crypto.getRandomValues` when it works, `Math.random` otherwise. The
/// wedge and the turn count come from the same source.
pub fn spin_with_best_rng<S: TokenStore>(controller: &mut RouletteController<S>) -> Option<SpinPlan> {
    let mut os_rng = OsRng;
    let mut probe = [0u8; 4];
    if os_rng.try_fill_bytes(&mut probe).is_ok() {
        return controller.spin_plan(&mut os_rng);
    }

    log::warn!("crypto random source unavailable, using Math.random");
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
    let mut fallback = SmallRng::seed_from_u64(seed);
    controller.spin_plan(&mut fallback)
}

/// Tell the user about an edit that could not be saved.
pub fn report_error(error: &RouletteError) {
    match error {
        RouletteError::OversizeEncoding { length, max } => {
            log::warn!("refusing to store {} chars of state (max {})", length, max);
            if let Some(window) = window() {
                let _ = window.alert_with_message(TOO_MUCH_DATA_ERROR);
            }
        }
        other if !other.is_user_visible() => log::debug!("{}", other),
        other => log::error!("{}", other),
    }
}

// Result modal
#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub label: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let Some(label) = &props.label else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the box should not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div class={styles::MODAL_BOX} onclick={keep_open} role="dialog" aria-modal="true">
                <button class={styles::MODAL_CLOSE} onclick={close} aria-label="close">{"×"}</button>
                <span class="text-[40px] font-bold text-gray-900 dark:text-white break-words">{label}</span>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning..."
    } else if !props.can_spin {
        "Add at least 2 options"
    } else {
        "Start"
    };

    let is_disabled = props.is_spinning || !props.can_spin;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-purple-500 hover:bg-white hover:text-purple-500 text-white shadow-lg hover:shadow-xl"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={classes!(
                "mt-5",
                "w-full",
                "px-8",
                "py-3",
                "rounded-lg",
                "border",
                "border-purple-500",
                "font-bold",
                "text-xl",
                "transition-all",
                "duration-300",
                "focus:outline-none",
                "focus:ring-4",
                "focus:ring-purple-300",
                button_class
            )}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{button_text}</span>
            </div>
        </button>
    }
}
