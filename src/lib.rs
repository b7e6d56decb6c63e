pub mod config;
pub mod context;
pub mod controllers;
pub mod cors;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod swagger;
