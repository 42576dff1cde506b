pub mod error;
pub mod parameter;
pub mod structure;
pub mod task;

#[cfg(test)]
mod testing;
