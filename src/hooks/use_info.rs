use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::info::Info;
use crate::services::api::fetch_overlay_info;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loaded(Rc<Info>),
    Error(String),
}

impl DataState {
    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<Info>> {
        match self {
            DataState::Loaded(info) => Some(info),
            DataState::Error(_) => None,
        }
    }

    /// Returns the failure message for the last poll, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            DataState::Loaded(_) => None,
        }
    }
}

#[hook]
pub fn use_info() -> UseStateHandle<DataState> {
    // Built-in sample is displayed until the first poll completes
    let state = use_state(|| DataState::Loaded(Rc::new(Info::sample())));
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let state = state.clone();
            let trigger = trigger.clone();
            let cancelled = Rc::new(Cell::new(false));
            let cancel = cancelled.clone();

            spawn_local(async move {
                // Fetch data; a failed poll replaces the whole state
                match fetch_overlay_info().await {
                    Ok(info) => {
                        if !cancelled.get() {
                            state.set(DataState::Loaded(Rc::new(info)));
                        }
                    }
                    Err(e) => {
                        gloo::console::warn!(&format!("Poll cycle failed: {e}"));
                        if !cancelled.get() {
                            state.set(DataState::Error(e.to_string()));
                        }
                    }
                }

                // Schedule next poll if enabled and still mounted
                if crate::config::Config::ENABLE_AUTO_REFRESH {
                    TimeoutFuture::new(crate::config::Config::POLLING_INTERVAL_MS).await;
                    if !cancelled.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || cancel.set(true) // Cleanup stops the poll loop
        });
    }

    state
}
