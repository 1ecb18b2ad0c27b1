pub(crate) mod leaderboard;
