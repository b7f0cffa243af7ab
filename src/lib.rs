#![allow(non_snake_case)]

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod view;
