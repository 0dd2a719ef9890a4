/// Declaration emitted for the version constant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionOptions {
    /// C type of the constant.
    pub variable_type: String,
    /// Exported symbol name.
    pub variable_name: String,
}

impl Default for VersionOptions {
    fn default() -> Self {
        Self {
            variable_type: String::from("const char*"),
            variable_name: String::from("GEN_BUILD_VERSION"),
        }
    }
}

/// Renders the single-definition C source, e.g.
/// `const char* GEN_BUILD_VERSION = "1.0.34+91ec25f";`.
pub fn render_version_source(version: &str, options: &VersionOptions) -> String {
    format!(
        "{} {} = {};\n",
        options.variable_type,
        options.variable_name,
        emit::quote(version)
    )
}
