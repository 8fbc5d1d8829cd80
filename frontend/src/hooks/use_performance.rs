use gloo_net::http::Request;
use shared::constants::PERFORMANCE_ENDPOINT;
use shared::performance::{fallback_week, DailyXp, PerformanceResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::api_url;

#[derive(Clone, PartialEq)]
pub struct PerformanceState {
    pub loading: bool,
    /// Set when `series` is the fallback week rather than real data.
    pub error: bool,
    pub series: Vec<DailyXp>,
}

async fn fetch_performance() -> Result<Vec<DailyXp>, String> {
    let response = Request::get(&api_url(PERFORMANCE_ENDPOINT))
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("API request failed with status {}", response.status()));
    }

    response
        .json::<PerformanceResponse>()
        .await
        .map_err(|e| format!("Error parsing performance response: {:?}", e))?
        .into_series()
}

#[hook]
pub fn use_performance() -> PerformanceState {
    let state = use_state(|| PerformanceState {
        loading: true,
        error: false,
        series: Vec::new(),
    });

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let next = match fetch_performance().await {
                    Ok(series) => PerformanceState {
                        loading: false,
                        error: false,
                        series,
                    },
                    Err(e) => {
                        log::error!("Failed to fetch performance data: {}", e);
                        let today = chrono::Local::now().date_naive();
                        PerformanceState {
                            loading: false,
                            error: true,
                            series: fallback_week(today, &mut rand::thread_rng()),
                        }
                    }
                };
                state.set(next);
            });

            || ()
        });
    }

    (*state).clone()
}
