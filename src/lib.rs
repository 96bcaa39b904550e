pub mod auth;
pub mod cli;
pub mod collectors;
pub mod config;
pub mod error;
pub mod lang;
pub mod web;
