use core::fmt;

/// Report rendering error.
#[derive(Debug)]
pub enum RenderError {
    /// Rendering backend could not be provisioned.
    BackendLoad(String),
    /// Non-positive width or height reached a layout routine.
    InvalidLayout { what: &'static str, value: f32 },
    /// Backend failed while measuring or drawing.
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackendLoad(detail) => {
                write!(f, "rendering backend unavailable: {}", detail)
            }
            Self::InvalidLayout { what, value } => {
                write!(f, "invalid layout geometry: {}={}", what, value)
            }
            Self::Backend(detail) => write!(f, "backend draw/measure failed: {}", detail),
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::RenderError;

    #[test]
    fn display_names_the_failing_dimension() {
        let err = RenderError::InvalidLayout {
            what: "wrap width",
            value: -3.0,
        };
        assert_eq!(err.to_string(), "invalid layout geometry: wrap width=-3");
    }
}
