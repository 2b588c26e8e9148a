pub mod calculator_controller;
