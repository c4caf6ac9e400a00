use yew::prelude::*;

/// Banner shown while the producer is tearing down the current round.
#[function_component(RoundBanner)]
pub fn round_banner() -> Html {
    html! {
        <div class="round-banner">
            <p>{"Round over! Next match starting..."}</p>
        </div>
    }
}
