/// Indentation applied to declarations inside a namespace block.
pub const INDENT: &str = "    ";

/// Line terminator used when rendering a [`SourceUnit`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`, matching what firmware toolchains on Windows hosts expect.
    #[default]
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Banner comment placed at the top of every generated file.
pub fn generated_banner(source: &str) -> String {
    format!("// Automatically generated from {source}. Do not edit.")
}

/// A generated C/C++ translation unit.
///
/// Rendered layout: banner, optional `#pragma once`, include directives, a
/// blank line, then the body lines wrapped in `namespace <name> { ... }` when
/// a namespace is set.
#[derive(Clone, Debug, Default)]
pub struct SourceUnit {
    banner: String,
    pragma_once: bool,
    includes: Vec<String>,
    namespace: Option<String>,
    body: Vec<String>,
    line_ending: LineEnding,
}

impl SourceUnit {
    /// Starts a unit with the given banner line.
    pub fn new(banner: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
            ..Self::default()
        }
    }

    /// Emits `#pragma once` after the banner.
    pub fn pragma_once(&mut self) -> &mut Self {
        self.pragma_once = true;
        self
    }

    /// Adds an include. `<stdint.h>` and `"app.h"` are prefixed with
    /// `#include`; anything already starting with `#` is kept verbatim.
    pub fn include(&mut self, target: &str) -> &mut Self {
        let target = target.trim();
        if target.starts_with('#') {
            self.includes.push(target.to_owned());
        } else {
            self.includes.push(format!("#include {target}"));
        }
        self
    }

    /// Wraps the body in `namespace name { ... }`.
    pub fn namespace(&mut self, name: &str) -> &mut Self {
        self.namespace = Some(name.to_owned());
        self
    }

    /// Selects the line terminator.
    pub fn line_ending(&mut self, ending: LineEnding) -> &mut Self {
        self.line_ending = ending;
        self
    }

    /// Appends a body line. Embedded `\n` characters split the text into
    /// several lines so the configured terminator is used consistently.
    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        let line = line.into();
        self.body.extend(line.split('\n').map(str::to_owned));
        self
    }

    /// Body lines pushed so far.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Renders the unit; the last line is terminated too.
    pub fn render(&self) -> String {
        let open = self
            .namespace
            .as_ref()
            .map(|name| format!("namespace {name} {{"));

        let mut lines: Vec<&str> = Vec::with_capacity(self.body.len() + self.includes.len() + 5);
        lines.push(&self.banner);
        if self.pragma_once {
            lines.push("#pragma once");
        }
        lines.extend(self.includes.iter().map(String::as_str));
        lines.push("");

        if let Some(open) = &open {
            lines.push(open);
        }
        lines.extend(self.body.iter().map(String::as_str));
        if self.namespace.is_some() {
            lines.push("}");
        }

        let terminator = self.line_ending.as_str();
        let mut out = String::new();
        for line in lines {
            out.push_str(line);
            out.push_str(terminator);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lays_out_header() {
        let mut unit = SourceUnit::new(generated_banner("secrets.json"));
        unit.pragma_once()
            .include("<stdint.h>")
            .include("#include <IPAddress.h>")
            .namespace("secrets")
            .line_ending(LineEnding::Lf)
            .push_line("    extern uint16_t mqtt_port;");

        assert_eq!(
            unit.render(),
            "// Automatically generated from secrets.json. Do not edit.\n\
             #pragma once\n\
             #include <stdint.h>\n\
             #include <IPAddress.h>\n\
             \n\
             namespace secrets {\n\
             \x20   extern uint16_t mqtt_port;\n\
             }\n"
        );
    }

    #[test]
    fn render_defaults_to_crlf() {
        let mut unit = SourceUnit::new("// x");
        unit.push_line("int a;");
        assert_eq!(unit.render(), "// x\r\n\r\nint a;\r\n");
    }

    #[test]
    fn push_line_splits_embedded_newlines() {
        let mut unit = SourceUnit::new("// x");
        unit.push_line("a =\n    \"b\";");
        assert_eq!(unit.body(), ["a =", "    \"b\";"]);
    }
}
