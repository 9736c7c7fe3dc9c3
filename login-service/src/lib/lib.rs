pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::login;
pub use outbound::repositories;
