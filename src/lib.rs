pub mod db;
pub mod domain;
pub mod models;
pub mod rest;
pub mod storage;
