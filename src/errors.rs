// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
// Other modules `use errors::*;` to get access to everything `error_chain!` creates.
use error_chain::*;

error_chain! {
    errors {
        InvalidDimensions(rows: i64, columns: i64) {
            description("maze dimensions must be positive")
            display("invalid maze dimensions: {} rows by {} columns", rows, columns)
        }
        InvalidArea(width: f32, height: f32) {
            description("layout area must be positive and finite")
            display("invalid layout area: {} by {} pixels", width, height)
        }
    }
}
