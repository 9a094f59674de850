pub mod error;
pub mod password;

pub use error::RangeError;
pub use password::{
    count_in_range, has_adjacent_pair, has_any_adjacent_pair, is_non_increasing, is_valid,
    AdjacencyRule, Digits, PasswordRange,
};
