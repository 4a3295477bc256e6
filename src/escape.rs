//! Escaping of literal text for the output formats.
//!
//! Fast path: scan for the first escapable byte, then bulk-copy the
//! segments between escapes.

use memchr::{memchr, memchr3};

/// Bytes that need escaping in HTML text content.
const HTML_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Bytes with special meaning in LaTeX text.
const LATEX_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    let specials = b"\\{}$&#^_%~";
    while i < specials.len() {
        table[specials[i] as usize] = true;
        i += 1;
    }
    table
};

/// Escape HTML text content into an output buffer.
///
/// # Example
/// ```
/// use listmark::escape::escape_html_into;
///
/// let mut out = Vec::new();
/// escape_html_into(&mut out, b"a < b & c");
/// assert_eq!(out, b"a &lt; b &amp; c");
/// ```
#[inline]
pub fn escape_html_into(out: &mut Vec<u8>, input: &[u8]) {
    let first = min_opt(memchr3(b'<', b'>', b'&', input), memchr(b'"', input));
    escape_with_table(out, input, first, &HTML_ESCAPE_TABLE, html_entity);
}

/// Escape LaTeX special characters into an output buffer.
///
/// # Example
/// ```
/// use listmark::escape::escape_latex_into;
///
/// let mut out = Vec::new();
/// escape_latex_into(&mut out, b"50% of $x_1$");
/// assert_eq!(out, br"50\% of \$x\_1\$");
/// ```
#[inline]
pub fn escape_latex_into(out: &mut Vec<u8>, input: &[u8]) {
    let first = input.iter().position(|&b| LATEX_ESCAPE_TABLE[b as usize]);
    escape_with_table(out, input, first, &LATEX_ESCAPE_TABLE, latex_command);
}

#[inline]
fn escape_with_table(
    out: &mut Vec<u8>,
    input: &[u8],
    first: Option<usize>,
    table: &[bool; 256],
    replacement: fn(u8) -> &'static [u8],
) {
    let Some(mut pos) = first else {
        out.extend_from_slice(input);
        return;
    };
    out.extend_from_slice(&input[..pos]);

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !table[input[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }
        if pos < input.len() {
            out.extend_from_slice(replacement(input[pos]));
            pos += 1;
        }
    }
}

fn html_entity(b: u8) -> &'static [u8] {
    match b {
        b'<' => b"&lt;" as &[u8],
        b'>' => b"&gt;",
        b'&' => b"&amp;",
        _ => b"&quot;",
    }
}

fn latex_command(b: u8) -> &'static [u8] {
    match b {
        b'\\' => br"\textbackslash{}" as &[u8],
        b'{' => br"\{",
        b'}' => br"\}",
        b'$' => br"\$",
        b'&' => br"\&",
        b'#' => br"\#",
        b'^' => br"\textasciicircum{}",
        b'_' => br"\_",
        b'%' => br"\%",
        _ => br"\textasciitilde{}",
    }
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
