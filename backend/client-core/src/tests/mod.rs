mod config;
mod pages;
mod session;
