mod api_client;
mod app;
mod helpers;
mod stores;
