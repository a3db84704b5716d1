mod comparison;
mod errors;
mod operator;

pub use comparison::{equal, greater, greater_or_equal, less, less_or_equal, like, Comparison};
pub use operator::Operator;
