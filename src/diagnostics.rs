use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where there is an
/// obvious one, how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::Io(e) => format!("\
# Error: I/O

{e}
"),

        Error::Json(e) => format!("\
# Error: JSON Serialization

{e}
"),

        Error::RootNotFound { path } => format!("\
# Error: Corpus Root Not Found

`{}` does not exist.

## Fix

Pass the root of your markdown tree:

    linkvet check path/to/docs
", path.display()),

        Error::TomlDe(e) => format!("\
# Error: Invalid TOML

`.linkvet.toml` could not be parsed:

{e}
"),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn root_not_found_names_the_path_and_a_fix() {
        let md = render_error(&Error::RootNotFound {
            path: PathBuf::from("docs"),
        });
        assert!(md.contains("# Error: Corpus Root Not Found"));
        assert!(md.contains("`docs` does not exist."));
        assert!(md.contains("## Fix"));
    }
}
