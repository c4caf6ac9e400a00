use crate::models::info::ScoreEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScoreboardProps {
    pub entries: Vec<ScoreEntry>,
}

/// Viewer scores, already sorted by the producer (highest first).
#[function_component(Scoreboard)]
pub fn scoreboard(props: &ScoreboardProps) -> Html {
    if props.entries.is_empty() {
        return html! {};
    }

    html! {
        <div class="scoreboard">
            <h2>{"Scoreboard"}</h2>
            <ol>
                {
                    props.entries.iter().map(|entry| html! {
                        <li key={entry.name.clone()}>
                            <span class="score-name">{&entry.name}</span>
                            <span class="score-value">{entry.score}</span>
                        </li>
                    }).collect::<Html>()
                }
            </ol>
        </div>
    }
}
