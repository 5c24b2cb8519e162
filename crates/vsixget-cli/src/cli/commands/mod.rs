mod get;
mod interactive;

pub use get::run_get;
pub use interactive::run_interactive;
