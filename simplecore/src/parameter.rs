//! The closed set of command-line fragment shapes a task is built from.
//!
//! Each shape maps to exactly one structured record form:
//!
//! | shape            | record                            | tokens                |
//! |------------------|-----------------------------------|-----------------------|
//! | `Argument`       | `{"key": k, "value": v}`          | `k v`                 |
//! | `MultiArguments` | `{"key": k, "values": [v1, v2]}`  | `k v1 k v2`           |
//! | `Opt`            | `{"value": v}`                    | `v`                   |
//! | `MultiOptions`   | `{"values": [v1, v2]}`            | `v1 v2`               |

/// A flag followed by its value, e.g. `-m 90`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    key: String,
    value: String,
}

/// A flag repeated once per value, e.g. `-i a.txt -i b.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiArguments {
    key: String,
    values: Vec<String>,
}

/// A bare positional value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opt {
    value: String,
}

/// A run of bare positional values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiOptions {
    values: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parameter {
    Argument(Argument),
    MultiArguments(MultiArguments),
    Opt(Opt),
    MultiOptions(MultiOptions),
}

/// Builds a `Parameter` from whichever shape a record has.
pub struct ParameterCreator;

/// Ordered tokens contributed to a command line; borrowed from the
/// parameter so a fresh iterator may be requested at any time.
pub type Tokens<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

mod creator;
pub(crate) mod display;
mod impls;
pub mod traits;
