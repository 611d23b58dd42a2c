pub mod database;
pub mod db;
pub mod security;
