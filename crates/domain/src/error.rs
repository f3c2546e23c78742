#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Time must be one of 10, 20, 30, 45 or 60 min ({0})")]
    InvalidTime(u32),
    #[error("Unknown {field} \"{value}\"")]
    UnknownValue { field: &'static str, value: String },
}

impl InputError {
    pub(crate) fn unknown(field: &'static str, value: &str) -> Self {
        InputError::UnknownValue {
            field,
            value: value.to_string(),
        }
    }
}
