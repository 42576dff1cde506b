use serde_json::Value;

use crate::{
    error::ValidationError,
    parameter::{
        traits::Shape,
        *,
    },
};

impl ParameterCreator {
    /// Checks the shapes in a fixed order (`Argument`, `MultiArguments`,
    /// `Opt`, `MultiOptions`) and loads the record as the first match.
    pub fn create(record: &Value) -> Result<Parameter, ValidationError> {
        if Argument::check(record) {
            Ok(Argument::load(record)?.into())
        } else if MultiArguments::check(record) {
            Ok(MultiArguments::load(record)?.into())
        } else if Opt::check(record) {
            Ok(Opt::load(record)?.into())
        } else if MultiOptions::check(record) {
            Ok(MultiOptions::load(record)?.into())
        } else {
            log::debug!("no parameter shape matched record {record}");
            Err(ValidationError::UnknownShape(record.to_string()))
        }
    }
}
