pub mod connection;
pub mod preferences_repository;

pub use connection::YamlConnection;
pub use preferences_repository::PreferencesRepository;
