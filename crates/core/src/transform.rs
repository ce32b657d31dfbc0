//! Source-generation helpers

use std::path::Path;

use serde_json::Value as JsonValue;

use crate::print::pretty_json;
use crate::types::WsGraphResult;

const MODULE_PREFIX: &str = "export default ";
const MODULE_SUFFIX: &str = " as const";

/// `package-name` and `package_name` both become `packageName`
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if matches!(c, '-' | '_') {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Wrap JSON text as a `const` TypeScript module body
pub fn json_to_module(json: &str) -> WsGraphResult<String> {
    let value: JsonValue = serde_json::from_str(json)?;
    let pretty = pretty_json(&value)?;
    Ok(format!("{MODULE_PREFIX}{}{MODULE_SUFFIX}", pretty.trim()))
}

/// Read a JSON file and write it back out as a `const` module
pub fn to_metadata(read_path: &Path, write_path: &Path) -> WsGraphResult<()> {
    let json = std::fs::read_to_string(read_path)?;
    let module = json_to_module(&json)?;
    std::fs::write(write_path, module)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WsGraphError;

    #[test]
    fn camel_cases_dashes_and_underscores() {
        assert_eq!(to_camel_case("vite-plugin"), "vitePlugin");
        assert_eq!(to_camel_case("key_separator"), "keySeparator");
        assert_eq!(to_camel_case("already"), "already");
    }

    #[test]
    fn trailing_or_uppercase_separators_are_kept() {
        assert_eq!(to_camel_case("trailing-"), "trailing-");
        assert_eq!(to_camel_case("a-B"), "a-B");
    }

    #[test]
    fn module_wraps_pretty_json() {
        let module = json_to_module(r#"{"name":"@acme/core","version":"1.0.0"}"#).unwrap();
        assert_eq!(
            module,
            "export default {\n  \"name\": \"@acme/core\",\n  \"version\": \"1.0.0\"\n} as const"
        );
    }

    #[test]
    fn writes_metadata_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("package.json");
        let output = temp_dir.path().join("__generated__.ts");
        std::fs::write(&input, r#"{ "version": "2.0.0" }"#).unwrap();

        to_metadata(&input, &output).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "export default {\n  \"version\": \"2.0.0\"\n} as const"
        );
    }

    #[test]
    fn unreadable_input_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.json");
        let output = temp_dir.path().join("out.ts");

        let err = to_metadata(&missing, &output).unwrap_err();
        assert!(matches!(err, WsGraphError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(json_to_module("{"), Err(WsGraphError::Json(_))));
    }
}
