pub mod player_stats;
