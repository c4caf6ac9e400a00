use crate::models::info::{MysteryBot, VotableBot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VotableListProps {
    pub votable_bots: Vec<VotableBot>,
    /// Needed for the per-mystery-bot marker columns
    pub mystery_bots: Vec<MysteryBot>,
}

/// Marker shown for one vote slot.
pub fn vote_marker(status: Option<bool>) -> &'static str {
    match status {
        Some(true) => "✔️",
        Some(false) => "❌",
        None => "",
    }
}

#[function_component(VotableList)]
pub fn votable_list(props: &VotableListProps) -> Html {
    html! {
        <table class="votable-list">
            <thead>
                <tr>
                    <th class="votable-command">{"!guess"}</th>
                    <th class="votable-name">{"Bot"}</th>
                    {
                        props.mystery_bots.iter().map(|m| html! {
                            <th class="votable-slot">{&m.identifier}</th>
                        }).collect::<Html>()
                    }
                </tr>
            </thead>
            <tbody>
                {
                    props.votable_bots.iter().map(|bot| {
                        let row_class = if bot.identified() { "votable-row identified" } else { "votable-row" };
                        html! {
                            <tr class={row_class} key={bot.command.clone()}>
                                <td class="votable-command">{&bot.command}</td>
                                <td class="votable-name">{&bot.name}</td>
                                {
                                    bot.vote_status.iter().map(|s| html! {
                                        <td class="votable-slot">{vote_marker(*s)}</td>
                                    }).collect::<Html>()
                                }
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
