pub mod processor_controller;
