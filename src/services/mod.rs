pub mod answer_prober;
pub mod quiz_api;
pub mod quiz_runner;
pub mod solver_service;
