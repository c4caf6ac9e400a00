use crate::models::info::MysteryBot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MysteryListProps {
    pub bots: Vec<MysteryBot>,
}

#[function_component(MysteryList)]
pub fn mystery_list(props: &MysteryListProps) -> Html {
    html! {
        <div class="mystery-list">
            {
                props.bots.iter().map(mystery_card).collect::<Html>()
            }
        </div>
    }
}

fn mystery_card(bot: &MysteryBot) -> Html {
    let card_class = format!("mystery-card team-{}", bot.team);

    html! {
        <div class={card_class} key={bot.identifier.clone()}>
            <h3>{"Mystery Bot "}{&bot.identifier}</h3>
            {
                if let Some(name) = bot.revealed_name() {
                    html! {
                        <>
                            <p class="mystery-name">{name}</p>
                            if let Some(guesser) = &bot.guessed_by {
                                <p class="mystery-guesser">{"guessed by "}{guesser}</p>
                            }
                        </>
                    }
                } else {
                    html! { <p class="mystery-name unknown">{"???"}</p> }
                }
            }
        </div>
    }
}
