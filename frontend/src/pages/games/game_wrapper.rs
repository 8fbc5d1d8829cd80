use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct GameWrapperProps {
    pub title: String,
    pub description: String,
    pub game_started: bool,
    pub game_over: bool,
    pub score: u32,
    pub on_start: Callback<()>,
    #[prop_or_default]
    pub custom_controls: Html,
    #[prop_or_default]
    pub children: Html,
}

/// Card shared by the mini-games: title, start/replay button, the game surface
/// while running and the final score once over.
#[function_component(GameWrapper)]
pub fn game_wrapper(props: &GameWrapperProps) -> Html {
    let on_start = {
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };

    html! {
        <div class={styles::GAME_CARD}>
            <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-2")}>{ props.title.clone() }</h1>
            <p class={classes!(styles::TEXT_BODY, "text-center", "mb-6")}>{ props.description.clone() }</p>

            if props.game_started {
                <div class="flex flex-col items-center">
                    { props.children.clone() }
                    <p class="text-xl text-gray-700 dark:text-gray-300 mt-4">
                        { format!("Score: {}", props.score) }
                    </p>
                    <div class="w-full">
                        { props.custom_controls.clone() }
                    </div>
                </div>
            } else {
                <div class="flex flex-col items-center space-y-4">
                    if props.game_over {
                        <p class="text-xl text-gray-700 dark:text-gray-300">
                            { format!("Final score: {}", props.score) }
                        </p>
                    }
                    <button onclick={on_start} class={styles::BUTTON_PRIMARY}>
                        { if props.game_over { "Play Again" } else { "Start Game" } }
                    </button>
                </div>
            }
        </div>
    }
}
