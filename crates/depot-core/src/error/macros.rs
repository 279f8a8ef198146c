//! Error macros for depot

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::DepotError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::DepotError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting an edge endpoint that is not registered
#[macro_export]
macro_rules! bail_unknown_point {
    ($id:expr) => {
        return Err($crate::error::DepotError::unknown_point($id))
    };
}
