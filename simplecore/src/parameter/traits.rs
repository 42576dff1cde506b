use serde_json::Value;

use crate::{
    error::ValidationError,
    parameter::Tokens,
};

pub trait Shape: Sized {
    /// Human readable name used in error messages.
    const NAME: &'static str;

    /// Whether the record has exactly the fields of this shape. Never
    /// fails; anything that is not an object is simply not a match.
    fn check(record: &Value) -> bool;

    fn load(record: &Value) -> Result<Self, ValidationError>;

    /// The minimal record that `load` turns back into `self`.
    fn to_record(&self) -> Value;

    fn tokens(&self) -> Tokens<'_>;
}
