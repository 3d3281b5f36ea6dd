pub mod command;
pub mod headless;
pub mod repl;
pub mod state;

pub use command::{Command, CommandError};
pub use headless::{run_headless, HeadlessSummary};
pub use state::App;
