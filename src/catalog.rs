pub mod bootstrap;
pub mod command;
pub mod controller;
pub mod domain;
pub mod factory;
