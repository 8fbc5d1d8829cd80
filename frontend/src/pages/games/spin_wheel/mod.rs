mod wheel_canvas;

use gloo_timers::callback::Interval;
use log::debug;
use shared::constants::WHEEL_CANVAS_SIZE;
use shared::shared_wheel_game::SpinWheelGame;
use yew::prelude::*;

use crate::base::{dispatch_notification, Base};
use crate::pages::games::game_wrapper::GameWrapper;
use crate::styles;
use wheel_canvas::WheelCanvas;

pub enum Msg {
    StartGame,
    Spin,
    Tick,
    EndGame,
}

/// Spin wheel mini-game page. Owns the only timer driving the wheel; the
/// timer exists exactly while a spin is in flight.
pub struct SpinWheel {
    game: SpinWheelGame,
    spin_interval: Option<Interval>,
}

impl SpinWheel {
    fn stop_ticking(&mut self) {
        if let Some(interval) = self.spin_interval.take() {
            drop(interval);
        }
    }
}

impl Component for SpinWheel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            game: SpinWheelGame::default(),
            spin_interval: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartGame => {
                self.stop_ticking();
                self.game.start_game();
                true
            }
            Msg::Spin => {
                if !self.game.session.is_active() || !self.game.start_spin(&mut rand::thread_rng()) {
                    return false;
                }
                let link = ctx.link().clone();
                self.spin_interval = Some(Interval::new(self.game.tuning.tick_interval_ms, move || {
                    link.send_message(Msg::Tick)
                }));
                true
            }
            Msg::Tick => {
                if !self.game.is_spinning() {
                    self.stop_ticking();
                    return false;
                }
                if let Some(result) = self.game.tick() {
                    debug!("Spin landed on {} XP, score now {}", result.value, self.game.score());
                    self.stop_ticking();
                }
                true
            }
            Msg::EndGame => {
                self.stop_ticking();
                let outcome = self.game.end_game();
                dispatch_notification(&outcome.notification());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_start = ctx.link().callback(|()| Msg::StartGame);
        let on_spin = ctx.link().callback(|_: MouseEvent| Msg::Spin);
        let on_end = ctx.link().callback(|_: MouseEvent| Msg::EndGame);
        let spinning = self.game.is_spinning();
        let size = WHEEL_CANVAS_SIZE as f64;

        let custom_controls = html! {
            <div class="mt-4 flex justify-between">
                <button class={styles::BUTTON_SPIN} onclick={on_spin} disabled={spinning}>
                    { if spinning { "Spinning..." } else { "Spin" } }
                </button>
                <button class={styles::BUTTON_END} onclick={on_end}>
                    {"End Game"}
                </button>
            </div>
        };

        html! {
            <Base>
                <div class={styles::CONTAINER_LG}>
                    <GameWrapper
                        title={self.game.session.title.clone()}
                        description={self.game.session.description.clone()}
                        game_started={self.game.session.started}
                        game_over={self.game.session.over}
                        score={self.game.score()}
                        on_start={on_start}
                        custom_controls={custom_controls}
                    >
                        <div class="relative">
                            <WheelCanvas frame={self.game.frame(size, size)} />
                            if let Some(result) = self.game.last_result {
                                <div class="absolute inset-0 flex items-center justify-center">
                                    <div class={styles::RESULT_OVERLAY}>
                                        <div class="text-2xl font-bold text-[#4cc9f0]">{ format!("{} XP", result.value) }</div>
                                        <p class="text-white">{"You won!"}</p>
                                    </div>
                                </div>
                            }
                        </div>
                    </GameWrapper>
                </div>
            </Base>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.stop_ticking();
    }
}
