use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of one resolved round. `number` is the 1-based position in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    #[serde(deserialize_with = "lenient_number")]
    pub number: u64,
    pub win: bool,
}

/// Accept any JSON number for `number` so one odd record does not void a whole log.
/// Negative values read as 0, fractions are truncated, huge values saturate.
fn lenient_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    Ok(n.as_u64()
        .or_else(|| n.as_i64().map(|_| 0))
        .or_else(|| n.as_f64().map(|f| f as u64))
        .unwrap_or(0))
}

/// Rounds in play order. Serialized verbatim as a JSON array of [`Round`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Append the next round and return it. Numbering continues from the current length.
    pub fn record(&mut self, win: bool) -> Round {
        let number = u64::try_from(self.rounds.len()).map_or(u64::MAX, |n| n.saturating_add(1));
        let round = Round { number, win };
        self.rounds.push(round);
        round
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn wins(&self) -> usize {
        self.rounds.iter().filter(|r| r.win).count()
    }
}

impl From<Vec<Round>> for History {
    fn from(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }
}
