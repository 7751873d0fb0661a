use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::seats::TeamId;

/// Points per team, used both for one hand and for the running match score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamScores([u32; 2]);

impl TeamScores {
    pub const fn new(team1: u32, team2: u32) -> Self {
        Self([team1, team2])
    }

    pub fn get(&self, team: TeamId) -> u32 {
        self.0[team.index()]
    }

    pub fn add(&mut self, team: TeamId, points: u32) {
        let slot = &mut self.0[team.index()];
        *slot = slot.saturating_add(points);
    }

    /// Add another set of team totals (a finished hand) into these.
    pub fn absorb(&mut self, other: TeamScores) {
        for team in TeamId::ALL {
            self.add(team, other.get(team));
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Whether either team has reached `target`.
    pub fn any_reached(&self, target: u32) -> bool {
        self.0.iter().any(|s| *s >= target)
    }

    /// Strictly leading team, `None` on a tie.
    pub fn leader(&self) -> Option<TeamId> {
        let [t1, t2] = self.0;
        match t1.cmp(&t2) {
            std::cmp::Ordering::Greater => Some(TeamId::Team1),
            std::cmp::Ordering::Less => Some(TeamId::Team2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// {"TEAM1": n, "TEAM2": m}
impl Serialize for TeamScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        for team in TeamId::ALL {
            map.serialize_entry(&team, &self.get(team))?;
        }
        map.end()
    }
}
