use yew::prelude::*;

use gtb_overlay::components::{MysteryList, RoundBanner, Scoreboard, VotableList};
use gtb_overlay::hooks::use_info::use_info;

#[function_component(App)]
fn app() -> Html {
    let state = use_info();

    // A failed poll replaces the whole overlay with the error text until
    // the next successful poll repopulates it.
    if let Some(msg) = state.error() {
        return html! { {msg} };
    }

    html! {
        <div class="overlay-container">
            if let Some(info) = state.data() {
                if info.round_end {
                    <RoundBanner />
                }

                <section class="mystery-section">
                    <MysteryList bots={info.mystery_bots.clone()} />
                </section>

                <section class="votable-section">
                    <h2>{"Who is it? Vote with !guess <letter> <number>"}</h2>
                    <VotableList
                        votable_bots={info.votable_bots.clone()}
                        mystery_bots={info.mystery_bots.clone()}
                    />
                </section>

                <section class="score-section">
                    <Scoreboard entries={info.scoreboard.clone()} />
                </section>
            }

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
