use shared::performance::ChartKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::PerformanceChart;
use crate::hooks::use_performance::use_performance;
use crate::{styles, Route};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let performance = use_performance();

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <h1 class={classes!(styles::TEXT_H1, "mb-6")}>{"Your Progress"}</h1>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::TEXT_H3, "mb-4")}>{"XP over time"}</h2>
                        <PerformanceChart kind={ChartKind::Line} performance={performance.clone()} />
                    </div>
                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::TEXT_H3, "mb-4")}>{"Daily XP"}</h2>
                        <PerformanceChart kind={ChartKind::Bar} {performance} />
                    </div>
                </div>
                <div class={classes!(styles::CARD, "mt-6", "text-center")}>
                    <p class={classes!(styles::TEXT_BODY, "mb-4")}>{"Take a break and earn up to 10 XP on the wheel."}</p>
                    <Link<Route> to={Route::SpinWheel} classes={classes!(styles::BUTTON_PRIMARY)}>{"Play Spin Wheel"}</Link<Route>>
                </div>
            </div>
        </Base>
    }
}
