mod config_test;
mod scheduler_test;
