pub mod database;
pub mod db;
pub mod domain;
pub mod models;
pub mod services;
