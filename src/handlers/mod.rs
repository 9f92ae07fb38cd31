mod lookup;

pub use lookup::run_command;
