pub mod mystery_list;
pub mod round_banner;
pub mod scoreboard;
pub mod votable_list;

pub use mystery_list::MysteryList;
pub use round_banner::RoundBanner;
pub use scoreboard::Scoreboard;
pub use votable_list::{VotableList, vote_marker};
