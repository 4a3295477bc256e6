//! listmark CLI - nested list markup to HTML or LaTeX
//!
//! Usage: `listmark [--latex] [--no-wrap] [FILE|-]`

use std::io::{self, Read, Write};

use listmark::{Format, Options};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut format = Format::Html;
    let mut options = Options::default();
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--latex" => format = Format::Latex,
            "--no-wrap" => options.wrap_content = false,
            "-" => path = None,
            _ => path = Some(arg),
        }
    }

    // Read from stdin or file
    let input = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let output = match format {
        Format::Html => listmark::to_html_with_options(&input, &options),
        Format::Latex => listmark::to_latex_with_options(&input, &options),
    }
    .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    io::stdout().write_all(output.as_bytes())?;

    Ok(())
}
