use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::event::LiveUpdate;

use super::{Leaderboard, LeaderboardEntry, LeaderboardError, ScoreSubmission};

/// A player's best result as stored by the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlayerRecord {
    pub player_id: String,
    pub display_name: String,
    pub high_score: u32,
}

/// In-process leaderboard.
///
/// Keeps the best score per player id and publishes [`LiveUpdate`]s to the
/// subscribers returned by [`subscribe`](Self::subscribe).
#[derive(Debug, Default)]
pub struct MemoryLeaderboard {
    players: HashMap<String, PlayerRecord>,
    subscribers: Vec<Sender<LiveUpdate>>,
}

impl MemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_records(records: Vec<PlayerRecord>) -> Self {
        Self {
            players: records.into_iter().map(|r| (r.player_id.clone(), r)).collect(),
            subscribers: Vec::new(),
        }
    }

    /// All records, ranked.
    pub(crate) fn records(&self) -> Vec<PlayerRecord> {
        rank(self.players.values().cloned().collect())
    }

    /// All records as they would be once `staged` is committed, ranked.
    pub(crate) fn records_with(&self, staged: &PlayerRecord) -> Vec<PlayerRecord> {
        let mut records: Vec<_> =
            self.players.values().filter(|r| r.player_id != staged.player_id).cloned().collect();
        records.push(staged.clone());
        rank(records)
    }

    /// The record `s` would leave behind and the update it would publish.
    /// Nothing changes until [`commit`](Self::commit).
    pub(crate) fn stage(&self, s: &ScoreSubmission) -> (PlayerRecord, Option<LiveUpdate>) {
        let (high_score, update) = match self.players.get(&s.player_id) {
            None => (s.score, Some(LiveUpdate::PlayerRegistered)),
            Some(existing) if s.score > existing.high_score => (s.score, Some(LiveUpdate::HighScoreUpdated)),
            Some(existing) => (existing.high_score, None),
        };
        let record = PlayerRecord {
            player_id: s.player_id.clone(),
            display_name: s.display_name.clone(),
            high_score,
        };
        (record, update)
    }

    pub(crate) fn commit(&mut self, record: PlayerRecord, update: Option<LiveUpdate>) {
        let id = record.player_id.clone();
        self.players.insert(id.clone(), record);
        if let Some(update) = update {
            log::debug!("leaderboard: {update:?} for {id}");
            self.publish(update);
        }
    }

    /// Registers a live-update listener.
    pub fn subscribe(&mut self) -> Receiver<LiveUpdate> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Best score recorded for `player_id`.
    pub fn best_of(&self, player_id: &str) -> Option<u32> {
        self.players.get(player_id).map(|r| r.high_score)
    }

    fn publish(&mut self, update: LiveUpdate) {
        // Drop listeners whose receiving end has gone away.
        self.subscribers.retain(|tx| tx.send(update).is_ok());
    }
}

impl Leaderboard for MemoryLeaderboard {
    fn top(&mut self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(self
            .records()
            .into_iter()
            .take(limit)
            .map(|r| LeaderboardEntry { display_name: r.display_name, high_score: r.high_score })
            .collect())
    }

    fn submit(&mut self, s: &ScoreSubmission) -> Result<(), LeaderboardError> {
        let (record, update) = self.stage(s);
        self.commit(record, update);
        Ok(())
    }
}

fn rank(mut records: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    records.sort_by(|a, b| {
        b.high_score
            .cmp(&a.high_score)
            .then_with(|| a.display_name.cmp(&b.display_name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    records
}
