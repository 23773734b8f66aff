pub mod config;
pub mod console_interface;
pub mod core;
pub mod game_loop;
pub mod models;

#[cfg(test)]
mod test;
