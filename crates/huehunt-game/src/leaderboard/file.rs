use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};

use crate::event::LiveUpdate;

use super::memory::{MemoryLeaderboard, PlayerRecord};
use super::{Leaderboard, LeaderboardEntry, LeaderboardError, ScoreSubmission};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    players: Vec<PlayerRecord>,
}

/// A [`MemoryLeaderboard`] persisted as JSON after every submission.
#[derive(Debug)]
pub struct FileLeaderboard {
    path: PathBuf,
    inner: MemoryLeaderboard,
}

impl FileLeaderboard {
    /// Opens the leaderboard stored at `path`; a missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LeaderboardError> {
        let path = path.into();
        let snapshot = match fs::read_to_string(&path) {
            Ok(src) => serde_json::from_str::<Snapshot>(&src)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Snapshot::default(),
            Err(e) => return Err(e.into()),
        };
        log::debug!("leaderboard loaded from {}: {} players", path.display(), snapshot.players.len());
        Ok(Self { path, inner: MemoryLeaderboard::from_records(snapshot.players) })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn subscribe(&mut self) -> Receiver<LiveUpdate> {
        self.inner.subscribe()
    }

    fn save(&self, players: Vec<PlayerRecord>) -> Result<(), LeaderboardError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let snapshot = Snapshot { players };
        fs::write(&self.path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }
}

impl Leaderboard for FileLeaderboard {
    fn top(&mut self, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.inner.top(limit)
    }

    /// Writes the updated board first; memory and subscribers only see the
    /// submission once it is on disk.
    fn submit(&mut self, submission: &ScoreSubmission) -> Result<(), LeaderboardError> {
        let (record, update) = self.inner.stage(submission);
        self.save(self.inner.records_with(&record))?;
        self.inner.commit(record, update);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: &str, score: u32) -> ScoreSubmission {
        ScoreSubmission { player_id: id.into(), display_name: id.to_uppercase(), score }
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut lb = FileLeaderboard::open(dir.path().join("board.json")).unwrap();
        assert!(lb.top(10).unwrap().is_empty());
    }

    #[test]
    fn submissions_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("board.json");

        let mut lb = FileLeaderboard::open(&path).unwrap();
        lb.submit(&sub("a", 4)).unwrap();
        lb.submit(&sub("b", 9)).unwrap();
        drop(lb);

        let mut reopened = FileLeaderboard::open(&path).unwrap();
        let top = reopened.top(10).unwrap();
        assert_eq!(top[0], LeaderboardEntry { display_name: "B".into(), high_score: 9 });
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(FileLeaderboard::open(&path), Err(LeaderboardError::Json(_))));
    }

    #[test]
    fn failed_write_leaves_board_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        let mut lb = FileLeaderboard::open(&path).unwrap();
        lb.submit(&sub("a", 2)).unwrap();
        let rx = lb.subscribe();

        // A directory where the file should be makes every write fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(lb.submit(&sub("b", 9)), Err(LeaderboardError::Io(_))));
        assert!(matches!(lb.submit(&sub("a", 5)), Err(LeaderboardError::Io(_))));
        assert_eq!(lb.top(10).unwrap(), vec![LeaderboardEntry { display_name: "A".into(), high_score: 2 }]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn forwards_live_updates() {
        let dir = tempfile::tempdir().unwrap();
        let mut lb = FileLeaderboard::open(dir.path().join("board.json")).unwrap();
        let rx = lb.subscribe();
        lb.submit(&sub("a", 1)).unwrap();
        assert_eq!(rx.try_recv().unwrap(), LiveUpdate::PlayerRegistered);
    }
}
