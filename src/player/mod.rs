pub mod lifecycle;
pub mod player_model;
