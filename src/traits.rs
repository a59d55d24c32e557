use serde::Serialize;
use serde_json::Value;

use crate::validate::ValidationError;
use crate::{AndreaniResult, Operation, Parameters};

/// Trait for the AndreaniRequest derive macro.
///
/// A request struct names the operation it is sent to and the remote name of each of its
/// fields, in the order the service expects them.
pub trait AndreaniRequest: Serialize {
    /// The operation this request is sent to.
    const OPERATION: Operation;

    /// Remote field names, in declaration order.
    fn field_names() -> Vec<&'static str>;

    /// Local checks run before the request is dispatched.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Converts the request into ordered parameters.
    ///
    /// Absent optional fields are left out. Numbers and booleans are written as text.
    fn to_parameters(&self) -> AndreaniResult<Parameters> {
        let mut parameters = Parameters::new();
        let fields = match serde_json::to_value(self)? {
            Value::Object(fields) => fields,
            _ => return Ok(parameters),
        };

        for name in Self::field_names() {
            match fields.get(name) {
                None | Some(Value::Null) => {}
                Some(Value::String(text)) => parameters.insert(name, text.as_str()),
                Some(Value::Number(number)) => parameters.insert(name, number.to_string()),
                Some(Value::Bool(flag)) => parameters.insert(name, flag.to_string()),
                Some(other) => parameters.insert(name, other.to_string()),
            }
        }
        Ok(parameters)
    }
}
