pub mod cell_algorithm;
