pub mod fragments;
pub mod views;
