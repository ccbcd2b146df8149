pub mod config;
pub mod icon;
pub mod images;
pub mod logger;
pub mod models;
pub mod network;
