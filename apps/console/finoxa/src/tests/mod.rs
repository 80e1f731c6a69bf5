mod command;
mod error;
mod terminal;
