mod clients;

pub use clients::leaderboard::{
    HttpLeaderboardClient, GROUPS_PATH, LEADERBOARD_PATH, REFRESH_PATH,
};
