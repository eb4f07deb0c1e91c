use std::env;
use std::fs;
use std::path::PathBuf;

include!("build/epsilon.rs");

/// (env var, rust type, const name)
const TUNABLES: &[(&str, &str, &str)] = &[
    ("SCALAR_TRAITS_EPSILON_F32", "f32", "F32_OVERRIDE"),
    ("SCALAR_TRAITS_EPSILON_F64", "f64", "F64_OVERRIDE"),
    ("SCALAR_TRAITS_EPSILON_EXTENDED", "f64", "EXTENDED_OVERRIDE"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/epsilon.rs");

    let mut out = String::new();

    for (var, ty, name) in TUNABLES {
        println!("cargo:rerun-if-env-changed={}", var);

        let literal = match env::var(var) {
            Ok(raw) => match parse_epsilon(ty, &raw) {
                Ok(v) => {
                    println!("cargo:warning={} overridden to {}", var, v);
                    Some(v)
                }
                Err(e) => panic!("{}={:?} {}", var, raw, e),
            },
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => panic!("{} is not valid unicode", var),
        };

        out.push_str(&render_override(name, ty, literal.as_deref()));
    }

    let dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR set by cargo"));
    fs::write(dir.join("precision.rs"), out).expect("write precision.rs");
}
