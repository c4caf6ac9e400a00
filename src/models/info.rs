use serde::Deserialize;

/// A bot that viewers can vote for with the chat `!guess` command.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotableBot {
    pub name: String,
    /// Number typed after `!guess <letter>` in chat
    pub command: String,
    /// One slot per mystery bot: `Some(true)` correct, `Some(false)` wrong,
    /// `None` if nobody has tried this combination yet
    pub vote_status: Vec<Option<bool>>,
}

impl VotableBot {
    /// Returns true if any vote slot holds a confirmed correct guess.
    pub fn identified(&self) -> bool {
        self.vote_status.iter().any(|s| *s == Some(true))
    }
}

/// A participant whose identity is hidden until guessed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MysteryBot {
    pub identifier: String,
    pub team: String,
    pub actual_name: Option<String>,
    pub guessed: bool,
    pub guessed_by: Option<String>,
}

impl MysteryBot {
    /// The true identity, exposed only once a guess has been accepted.
    pub fn revealed_name(&self) -> Option<&str> {
        if self.guessed {
            self.actual_name.as_deref()
        } else {
            None
        }
    }
}

/// One scoreboard row; the producer emits rows sorted by descending score.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Complete snapshot of overlay data, replaced wholesale on every poll.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub votable_bots: Vec<VotableBot>,
    pub mystery_bots: Vec<MysteryBot>,
    /// Set by the producer while a round is being torn down
    #[serde(default)]
    pub round_end: bool,
    #[serde(default)]
    pub scoreboard: Vec<ScoreEntry>,
}

impl Info {
    /// Built-in sample shown before the first poll completes.
    pub fn sample() -> Self {
        Self {
            votable_bots: vec![
                VotableBot {
                    name: "BotimusPrime".to_string(),
                    command: "0".to_string(),
                    vote_status: vec![None, Some(false)],
                },
                VotableBot {
                    name: "Wildfire".to_string(),
                    command: "1".to_string(),
                    vote_status: vec![Some(true), Some(false)],
                },
            ],
            mystery_bots: vec![
                MysteryBot {
                    identifier: "A".to_string(),
                    team: "blue".to_string(),
                    actual_name: None,
                    guessed: false,
                    guessed_by: None,
                },
                MysteryBot {
                    identifier: "B".to_string(),
                    team: "orange".to_string(),
                    actual_name: Some("Wildfire".to_string()),
                    guessed: true,
                    guessed_by: Some("Robbie".to_string()),
                },
            ],
            round_end: false,
            scoreboard: vec![],
        }
    }
}
