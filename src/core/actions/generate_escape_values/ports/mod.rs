pub mod escape_time_algorithm;
