use tracing::debug;

use crate::error::FigureError;
use crate::juxtapose::emit_juxtaposition;

/// Emit a `\section` with a single `figure` holding every frame of the dataset.
///
/// `title` and `name` are interpolated as-is; LaTeX special characters are not escaped.
pub fn emit_figure(
    title: &str,
    name: &str,
    size: u32,
    step: u32,
) -> Result<Vec<String>, FigureError> {
    let body = emit_juxtaposition(name, size, step)?;

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(format!("\t\\section{{{title}}}"));
    lines.push("\t\t\\begin{figure}[h]".to_string());
    lines.extend(body);
    lines.push(format!("\t\t\\caption{{Time Juxtaposing {title}}}"));
    lines.push("\t\t\\end{figure}".to_string());

    debug!(title, name, line_count = lines.len(), "figure emitted");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanding_circle_end_to_end() {
        let lines = emit_figure("Expanding Circle", "circle", 120, 10).unwrap();

        assert_eq!(lines[0], "\t\\section{Expanding Circle}");
        assert_eq!(lines[1], "\t\t\\begin{figure}[h]");

        let labels: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.trim().strip_prefix("\\label{fig:circle_t"))
            .collect();
        let expected: Vec<String> = (0..12).map(|i| format!("{}}}%", i * 10)).collect();
        assert_eq!(labels, expected);

        let n = lines.len();
        assert_eq!(lines[n - 2], "\t\t\\caption{Time Juxtaposing Expanding Circle}");
        assert_eq!(lines[n - 1], "\t\t\\end{figure}");
    }

    #[test]
    fn body_is_emitted_verbatim() {
        let lines = emit_figure("Spinning", "spinning", 64, 5).unwrap();
        let body = emit_juxtaposition("spinning", 64, 5).unwrap();
        assert_eq!(lines.len(), body.len() + 4);
        assert_eq!(&lines[2..lines.len() - 2], body.as_slice());
    }

    #[test]
    fn title_is_not_escaped() {
        let lines = emit_figure("Beating Heart (2D) & 50%", "heart2D", 60, 5).unwrap();
        assert_eq!(lines[0], "\t\\section{Beating Heart (2D) & 50%}");
    }

    #[test]
    fn zero_size_propagates() {
        let err = emit_figure("Broken", "broken", 0, 5).unwrap_err();
        assert_eq!(err.to_string(), "size divisor for dataset 'broken' must be non-zero");
    }
}
