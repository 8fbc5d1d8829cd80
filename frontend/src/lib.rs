pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{dashboard::Dashboard, games::spin_wheel::SpinWheel};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Dashboard,
   #[at("/games/spin-wheel")] SpinWheel,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Dashboard => html! { <Dashboard /> },
       Route::SpinWheel => html! { <SpinWheel /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
   }
}
