use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use shared::constants::NOTIFICATION_EVENT;
use shared::shared_game_session::Notification;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit, Event};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{styles, Route};

const NOTIFICATION_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Shows `notification` as a toast on whichever page is mounted.
pub fn dispatch_notification(notification: &Notification) {
    let Some(window) = window() else {
        return;
    };
    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(&notification.message()));
    match CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &event_init) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                log::error!("Failed to dispatch notification: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to create notification event: {:?}", e),
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let notification = use_state(|| None::<String>);
    let show_notification = use_state(|| false);
    let hide_timeout = use_mut_ref(|| None::<Timeout>);

    {
        let notification = notification.clone();
        let show_notification = show_notification.clone();

        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTIFICATION_EVENT, move |event: &Event| {
                    let Some(message) = event
                        .dyn_ref::<CustomEvent>()
                        .and_then(|custom_event| custom_event.detail().as_string())
                    else {
                        return;
                    };
                    notification.set(Some(message));
                    show_notification.set(true);

                    let show_notification = show_notification.clone();
                    // Replacing the handle cancels the previous toast's timer.
                    *hide_timeout.borrow_mut() = Some(Timeout::new(NOTIFICATION_MS, move || {
                        show_notification.set(false);
                    }));
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class={styles::CONTAINER}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_CONTENT}>
                    <Link<Route> to={Route::Dashboard} classes={classes!(styles::NAV_BRAND)}>{"LevelUp"}</Link<Route>>
                    <div class={styles::NAV_ITEMS}>
                        <Link<Route> to={Route::Dashboard} classes={classes!(styles::NAV_LINK)}>{"Dashboard"}</Link<Route>>
                        <Link<Route> to={Route::SpinWheel} classes={classes!(styles::NAV_LINK)}>{"Spin Wheel"}</Link<Route>>
                    </div>
                </div>
            </nav>

            <main class="pt-20 pb-8">
                { props.children.clone() }
            </main>

            if *show_notification {
                if let Some(message) = &*notification {
                    <div class={styles::TOAST}>
                        <p class="text-white">{message}</p>
                    </div>
                }
            }
        </div>
    }
}
