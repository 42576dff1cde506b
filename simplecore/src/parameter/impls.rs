use serde_json::{
    json,
    Map,
    Value,
};

use crate::{
    error::ValidationError,
    parameter::{
        traits::Shape,
        *,
    },
};

const KEY: &str = "key";
const VALUE: &str = "value";
const VALUES: &str = "values";

fn has_exactly(fields: &Map<String, Value>, names: &[&str]) -> bool {
    fields.len() == names.len()
        && names.iter().all(|name| fields.contains_key(*name))
}

fn is_string(fields: &Map<String, Value>, name: &str) -> bool {
    matches!(fields.get(name), Some(Value::String(_)))
}

fn is_array(fields: &Map<String, Value>, name: &str) -> bool {
    matches!(fields.get(name), Some(Value::Array(_)))
}

// Returns the fields of the record if the field names are exactly `names`;
// the types of the values are checked by the extractors below.
fn shaped<'a, S: Shape>(
    record: &'a Value,
    names: &[&str],
) -> Result<&'a Map<String, Value>, ValidationError> {
    let fields = record.as_object()
        .ok_or_else(|| ValidationError::NotARecord(record.to_string()))?;
    if has_exactly(fields, names) {
        Ok(fields)
    } else {
        Err(ValidationError::ShapeMismatch {
            expected: S::NAME,
            record: record.to_string(),
        })
    }
}

fn string_field(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<String, ValidationError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::NotAString(name)),
    }
}

fn strings_field(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<Vec<String>, ValidationError> {
    match fields.get(name) {
        Some(Value::Array(items)) => items.iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ValidationError::ElementNotAString(name, i)),
            })
            .collect(),
        _ => Err(ValidationError::NotAnArray(name)),
    }
}

impl Argument {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Shape for Argument {
    const NAME: &'static str = "Argument";

    fn check(record: &Value) -> bool {
        record.as_object()
            .map(|fields| has_exactly(fields, &[KEY, VALUE])
                && is_string(fields, KEY)
                && is_string(fields, VALUE))
            .unwrap_or(false)
    }

    fn load(record: &Value) -> Result<Self, ValidationError> {
        let fields = shaped::<Self>(record, &[KEY, VALUE])?;
        Ok(Self {
            key: string_field(fields, KEY)?,
            value: string_field(fields, VALUE)?,
        })
    }

    fn to_record(&self) -> Value {
        json!({ KEY: self.key, VALUE: self.value })
    }

    fn tokens(&self) -> Tokens<'_> {
        Box::new([self.key.as_str(), self.value.as_str()].into_iter())
    }
}

impl MultiArguments {
    pub fn new<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Shape for MultiArguments {
    const NAME: &'static str = "MultiArguments";

    fn check(record: &Value) -> bool {
        record.as_object()
            .map(|fields| has_exactly(fields, &[KEY, VALUES])
                && is_string(fields, KEY)
                && is_array(fields, VALUES))
            .unwrap_or(false)
    }

    fn load(record: &Value) -> Result<Self, ValidationError> {
        let fields = shaped::<Self>(record, &[KEY, VALUES])?;
        Ok(Self {
            key: string_field(fields, KEY)?,
            values: strings_field(fields, VALUES)?,
        })
    }

    fn to_record(&self) -> Value {
        json!({ KEY: self.key, VALUES: self.values })
    }

    fn tokens(&self) -> Tokens<'_> {
        let key = self.key.as_str();
        Box::new(self.values.iter().flat_map(move |value| [key, value.as_str()]))
    }
}

impl Opt {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Shape for Opt {
    const NAME: &'static str = "Option";

    fn check(record: &Value) -> bool {
        record.as_object()
            .map(|fields| has_exactly(fields, &[VALUE])
                && is_string(fields, VALUE))
            .unwrap_or(false)
    }

    fn load(record: &Value) -> Result<Self, ValidationError> {
        let fields = shaped::<Self>(record, &[VALUE])?;
        Ok(Self {
            value: string_field(fields, VALUE)?,
        })
    }

    fn to_record(&self) -> Value {
        json!({ VALUE: self.value })
    }

    fn tokens(&self) -> Tokens<'_> {
        Box::new(std::iter::once(self.value.as_str()))
    }
}

impl MultiOptions {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Shape for MultiOptions {
    const NAME: &'static str = "MultiOptions";

    fn check(record: &Value) -> bool {
        record.as_object()
            .map(|fields| has_exactly(fields, &[VALUES])
                && is_array(fields, VALUES))
            .unwrap_or(false)
    }

    fn load(record: &Value) -> Result<Self, ValidationError> {
        let fields = shaped::<Self>(record, &[VALUES])?;
        Ok(Self {
            values: strings_field(fields, VALUES)?,
        })
    }

    fn to_record(&self) -> Value {
        json!({ VALUES: self.values })
    }

    fn tokens(&self) -> Tokens<'_> {
        Box::new(self.values.iter().map(String::as_str))
    }
}

impl Shape for Parameter {
    const NAME: &'static str = "Parameter";

    fn check(record: &Value) -> bool {
        Argument::check(record)
            || MultiArguments::check(record)
            || Opt::check(record)
            || MultiOptions::check(record)
    }

    fn load(record: &Value) -> Result<Self, ValidationError> {
        ParameterCreator::create(record)
    }

    fn to_record(&self) -> Value {
        match self {
            Parameter::Argument(p) => p.to_record(),
            Parameter::MultiArguments(p) => p.to_record(),
            Parameter::Opt(p) => p.to_record(),
            Parameter::MultiOptions(p) => p.to_record(),
        }
    }

    fn tokens(&self) -> Tokens<'_> {
        match self {
            Parameter::Argument(p) => p.tokens(),
            Parameter::MultiArguments(p) => p.tokens(),
            Parameter::Opt(p) => p.tokens(),
            Parameter::MultiOptions(p) => p.tokens(),
        }
    }
}

impl Parameter {
    pub fn kind(&self) -> &'static str {
        match self {
            Parameter::Argument(_) => Argument::NAME,
            Parameter::MultiArguments(_) => MultiArguments::NAME,
            Parameter::Opt(_) => Opt::NAME,
            Parameter::MultiOptions(_) => MultiOptions::NAME,
        }
    }
}

impl From<Argument> for Parameter {
    fn from(value: Argument) -> Self {
        Self::Argument(value)
    }
}

impl From<MultiArguments> for Parameter {
    fn from(value: MultiArguments) -> Self {
        Self::MultiArguments(value)
    }
}

impl From<Opt> for Parameter {
    fn from(value: Opt) -> Self {
        Self::Opt(value)
    }
}

impl From<MultiOptions> for Parameter {
    fn from(value: MultiOptions) -> Self {
        Self::MultiOptions(value)
    }
}

impl TryFrom<&Value> for Parameter {
    type Error = ValidationError;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        ParameterCreator::create(record)
    }
}

impl From<&Parameter> for Value {
    fn from(parameter: &Parameter) -> Self {
        parameter.to_record()
    }
}
