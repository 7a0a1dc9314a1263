pub mod lane;
pub mod scorer;
