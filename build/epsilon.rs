// Shared between build.rs and the precision tests.

#[derive(Debug, PartialEq)]
enum EpsilonError {
    NotANumber,
    NotPositive,
}

impl std::fmt::Display for EpsilonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EpsilonError::NotANumber => write!(f, "is not a number"),
            EpsilonError::NotPositive => write!(f, "must be a finite number greater than zero"),
        }
    }
}

/// Parses an epsilon for `ty` and renders it back as a float literal. Debug
/// formatting always yields a valid literal (`1e-6`, `0.5`, `1.0`).
fn parse_epsilon(ty: &str, raw: &str) -> Result<String, EpsilonError> {
    let raw = raw.trim();

    match ty {
        "f32" => {
            let v: f32 = raw.parse().map_err(|_| EpsilonError::NotANumber)?;
            if !(v.is_finite() && v > 0.0) {
                return Err(EpsilonError::NotPositive);
            }
            Ok(format!("{:?}", v))
        }
        _ => {
            let v: f64 = raw.parse().map_err(|_| EpsilonError::NotANumber)?;
            if !(v.is_finite() && v > 0.0) {
                return Err(EpsilonError::NotPositive);
            }
            Ok(format!("{:?}", v))
        }
    }
}

/// One line of the generated `precision.rs`.
fn render_override(name: &str, ty: &str, literal: Option<&str>) -> String {
    match literal {
        Some(v) => format!("pub(crate) const {}: Option<{}> = Some({});\n", name, ty, v),
        None => format!("pub(crate) const {}: Option<{}> = None;\n", name, ty),
    }
}
