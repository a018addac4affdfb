pub mod database;
pub mod record;
