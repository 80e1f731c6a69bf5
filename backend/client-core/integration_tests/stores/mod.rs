mod auth_store;
mod user_store;
