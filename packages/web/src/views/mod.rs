mod shell;
pub use shell::Shell;

mod guarded;
pub use guarded::Guarded;

mod auth;
pub use auth::Auth;

mod home;
pub use home::Home;
