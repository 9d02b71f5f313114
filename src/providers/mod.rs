pub mod gemini;
pub mod traits;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
