pub mod config;
pub mod db;
pub mod routes;
pub mod types;
pub mod views;
