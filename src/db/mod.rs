pub mod db_service;
pub mod token;
pub mod user;
