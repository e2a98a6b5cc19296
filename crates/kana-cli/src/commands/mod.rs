/// Unwrap a `Result` or print the error to stderr and exit 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod corpus_ops;
pub mod expand_ops;
pub mod play_ops;
