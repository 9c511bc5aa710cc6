//! Preamble and closing lines for a standalone, compilable LaTeX document.

/// Packages required by the figure markup: `\includegraphics` and `\subfloat`.
const PACKAGES: [&str; 2] = ["graphicx", "subfig"];

pub fn document_preamble() -> Vec<String> {
    let mut lines = vec!["\\documentclass{article}".to_string()];
    lines.extend(PACKAGES.iter().map(|p| format!("\\usepackage{{{p}}}")));
    lines.push(String::new());
    lines.push("\\begin{document}".to_string());
    lines
}

pub fn document_postamble() -> Vec<String> {
    vec!["\\end{document}".to_string()]
}
