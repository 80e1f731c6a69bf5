mod auth;
mod envelope;
mod user_record;
