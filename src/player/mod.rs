pub mod details;
pub mod history;
pub mod rank;
pub mod riot_id;
