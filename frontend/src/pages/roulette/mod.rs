mod share;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::constants::{COPY_FAILED_ERROR, COPY_SUCCESS, SPIN_DURATION_MS};
use shared::spin::{ease_out, target_rotation};
use shared::{Mutation, RouletteController, RouletteError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::components::Toast;
use crate::config::{get_origin, get_page_title, get_roulette_config};
use crate::hooks::{use_notification, Notice};
use crate::location::LocationStore;
use crate::styles;

use share::ShareOutcome;
use wheel_canvas::WheelCanvas;
use wheel_utils::{report_error, spin_with_best_rng, ResultModal, SpinButton};

type Controller = Rc<RefCell<RouletteController<LocationStore>>>;

/// Animate the wheel from `start` to `end`, then call `on_done`.
fn animate_spin(start: f64, end: f64, rotation: UseStateHandle<f64>, on_done: impl FnOnce() + 'static) {
    let start_time = js_sys::Date::now();
    let duration = SPIN_DURATION_MS as f64;
    let change = end - start;
    let mut on_done = Some(on_done);

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = js_sys::Date::now() - start_time;
        let progress = (elapsed / duration).min(1.0);
        rotation.set(start + change * ease_out(progress));

        if elapsed < duration {
            if let (Some(window), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        } else {
            rotation.set(end);
            if let Some(done) = on_done.take() {
                done();
            }
        }
    }) as Box<dyn FnMut()>));

    if let (Some(window), Some(cb)) = (web_sys::window(), g.borrow().as_ref()) {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

#[function_component(RoulettePage)]
pub fn roulette_page() -> Html {
    let navigator = use_navigator();
    let config = use_memo((), |_| get_roulette_config());
    let controller: Controller = {
        let config = config.clone();
        use_mut_ref(move || RouletteController::load(LocationStore::new(navigator), &config))
    };
    let redraw = use_force_update();

    let rotation = use_state(|| 0.0f64);
    let add_value = use_state(String::new);
    let add_input = use_node_ref();
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);
    let notification = use_notification();

    let add_option = {
        let controller = controller.clone();
        let add_value = add_value.clone();
        let add_input = add_input.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let result = controller.borrow_mut().add(&add_value);
            match result {
                Ok(Mutation::Applied) => {
                    add_value.set(String::new());
                    if let Some(input) = add_input.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                Ok(Mutation::Ignored) => {}
                Err(e) => report_error(&e),
            }
            redraw.force_update();
        })
    };

    let on_add_click = {
        let add_option = add_option.clone();
        Callback::from(move |_: MouseEvent| add_option.emit(()))
    };

    let on_add_keypress = {
        let add_option = add_option.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_option.emit(());
            }
        })
    };

    let on_add_input = {
        let add_value = add_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                add_value.set(input.value());
            }
        })
    };

    let on_remove = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |index: usize| {
            let result = controller.borrow_mut().remove(index);
            if let Err(e) = result {
                report_error(&e);
            }
            redraw.force_update();
        })
    };

    let on_reset = {
        let controller = controller.clone();
        let rotation = rotation.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let result = controller.borrow_mut().reset();
            match result {
                Ok(Mutation::Applied) => rotation.set(0.0),
                Ok(Mutation::Ignored) => {}
                Err(e) => report_error(&e),
            }
            redraw.force_update();
        })
    };

    let on_dismiss = {
        let controller = controller.clone();
        let dismiss_timer = dismiss_timer.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            dismiss_timer.borrow_mut().take();
            controller.borrow_mut().dismiss_result();
            redraw.force_update();
        })
    };

    let on_spin = {
        let controller = controller.clone();
        let rotation = rotation.clone();
        let dismiss_timer = dismiss_timer.clone();
        let on_dismiss = on_dismiss.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let (plan, count) = {
                let mut c = controller.borrow_mut();
                let Some(plan) = spin_with_best_rng(&mut *c) else {
                    return;
                };
                (plan, c.options().len())
            };
            dismiss_timer.borrow_mut().take();
            redraw.force_update();

            let start = *rotation;
            let end = target_rotation(start, plan.index, count, plan.turns);

            let controller = controller.clone();
            let dismiss_timer = dismiss_timer.clone();
            let on_dismiss = on_dismiss.clone();
            let redraw = redraw.clone();
            animate_spin(start, end, rotation.clone(), move || {
                let auto_dismiss_ms = {
                    let mut c = controller.borrow_mut();
                    c.complete_spin();
                    c.presenter().auto_dismiss_ms()
                };
                if let Some(ms) = auto_dismiss_ms {
                    *dismiss_timer.borrow_mut() = Some(Timeout::new(ms, move || on_dismiss.emit(())));
                }
                redraw.force_update();
            });
        })
    };

    let on_share = {
        let controller = controller.clone();
        let config = config.clone();
        let notify = notification.notify.clone();
        Callback::from(move |_: MouseEvent| {
            let request = match controller.borrow().share_request(&get_origin(), &get_page_title()) {
                Ok(request) => request,
                Err(e) => {
                    report_error(&e);
                    return;
                }
            };
            let endpoint = config.shortener_url.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let request = share::shorten(request, endpoint.as_deref()).await;
                match share::deliver(&request).await {
                    Ok(ShareOutcome::Copied) => notify.emit(Notice::success(COPY_SUCCESS)),
                    Ok(ShareOutcome::Shared) | Ok(ShareOutcome::Cancelled) => {}
                    Err(e @ RouletteError::ShareDelivery(_)) => {
                        log::warn!("{}", e);
                        notify.emit(Notice::error(COPY_FAILED_ERROR));
                    }
                    Err(e) => report_error(&e),
                }
            });
        })
    };

    let c = controller.borrow();
    let is_spinning = c.is_spinning();
    let can_spin = c.options().len() >= shared::constants::MIN_SPIN_OPTIONS;
    let wheel_labels = c.options().wheel_labels();
    let shown = c.presenter().shown().map(str::to_string);

    html! {
        <div class={styles::CONTAINER_LG}>
            <div class="flex flex-col lg:flex-row items-start justify-center gap-12">
                <div class="w-full max-w-[450px] mx-auto text-center">
                    <h1 class={styles::TEXT_H1}>{"Roulette"}</h1>
                    <WheelCanvas labels={wheel_labels} rotation={*rotation} is_spinning={is_spinning} />
                    <SpinButton is_spinning={is_spinning} can_spin={can_spin} onclick={on_spin} />
                </div>

                <div class={classes!(styles::CARD, "w-full", "max-w-md", "mx-auto")}>
                    <div class="flex flex-col justify-center space-y-3 mb-6">
                        if config.share_enabled {
                            <button class={styles::BUTTON_SHARE} onclick={on_share}>
                                <span class="absolute left-3">{"🔗"}</span>
                                {"Share"}
                            </button>
                        }
                        <button class={styles::BUTTON_RESET} onclick={on_reset} disabled={is_spinning}>{"Reset"}</button>
                    </div>

                    <div class="flex flex-row items-center">
                        <input
                            ref={add_input}
                            id="add-text"
                            type="text"
                            class={styles::INPUT}
                            placeholder="Add an option"
                            value={(*add_value).clone()}
                            oninput={on_add_input}
                            onkeypress={on_add_keypress}
                        />
                        <button class={styles::BUTTON_ADD} onclick={on_add_click} disabled={is_spinning}>{"Add"}</button>
                    </div>

                    if c.options().is_empty() {
                        <p class={classes!(styles::TEXT_SMALL, "mt-6", "text-center")}>
                            {"No options yet. Anything you add is saved in the page link."}
                        </p>
                    } else {
                        <ul class="mt-4">
                            { for c.options().iter().enumerate().map(|(index, option)| {
                                let on_remove = on_remove.clone();
                                html! {
                                    <li key={index} class={styles::OPTION_ROW}>
                                        <div class="flex items-center min-w-0">
                                            <span class={styles::OPTION_CHIP}>{index + 1}</span>
                                            <span class={classes!(styles::TEXT_BODY, "truncate")}>{&option.label}</span>
                                        </div>
                                        <button
                                            class={styles::BUTTON_DELETE}
                                            aria-label="delete"
                                            disabled={is_spinning}
                                            onclick={Callback::from(move |_: MouseEvent| on_remove.emit(index))}
                                        >
                                            <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor">
                                                <path fill-rule="evenodd" d="M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z" clip-rule="evenodd" />
                                            </svg>
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </div>
            </div>

            <ResultModal label={shown} on_close={on_dismiss} />
            <Toast notice={notification.current.clone()} on_close={notification.close.clone()} />
        </div>
    }
}
