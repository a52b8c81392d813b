//! Terminal output formatting
//!
//! Colored row rendering and printers for command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_combination_count, print_combinations_result, print_error, print_rows,
    print_solve_result, print_words,
};
pub use formatters::{format_positions, format_row};
