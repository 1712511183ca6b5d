//! SpaceX launch records dashboard.
//!
//! A fixed launch dataset is loaded once and filtered by two controls (launch
//! site, payload range) into a pie and a scatter chart. The same state feeds
//! an HTTP front-end ([`web`]) and a native egui viewer ([`app`]).

pub mod app;
pub mod color;
pub mod config;
pub mod controls;
pub mod data;
pub mod figure;
pub mod state;
pub mod ui;
pub mod web;
