use tracing::debug;

use crate::error::FigureError;
use crate::frame::FrameDescriptor;

/// Number of frames laid out in one figure.
pub const FRAME_COUNT: u32 = 12;
/// Number of sub-figures per centered row.
pub const FRAMES_PER_ROW: u32 = 3;
/// Width of each image as a fraction of `\textwidth`.
const IMAGE_WIDTH: &str = "0.325";

const ROW_OPEN: &str = "\t\t\t\\makebox[\\textwidth][c]{%";
const SUBFLOAT_CLOSE: &str = "\t\t\t}%";
const ROW_CLOSE: &str = "\t\t\t}";
/// Closes the last row. Keeps the trailing `%` so no space leaks before the caption.
const LAST_ROW_CLOSE: &str = "\t\t\t}%";

/// Lay out the frames of one dataset as rows of `\subfloat`s.
///
/// Frames 0, 3, 6 and 9 open a `\makebox` row. Rows ending at frames 2, 5 and 8
/// are closed with a plain brace; the row ending at the final frame gets the
/// `%`-terminated form instead.
pub fn emit_juxtaposition(name: &str, size: u32, step: u32) -> Result<Vec<String>, FigureError> {
    if size == 0 {
        return Err(FigureError::ZeroSizeDivisor {
            name: name.to_string(),
        });
    }

    let mut lines = Vec::new();
    for index in 0..FRAME_COUNT {
        let frame = FrameDescriptor::new(index, size, step, name)?;
        debug!(name, index, frame_label = frame.frame_label, time = frame.time, "emitting frame");

        if index % FRAMES_PER_ROW == 0 {
            lines.push(ROW_OPEN.to_string());
        }

        push_subfloat(&mut lines, name, &frame);

        if index == FRAME_COUNT - 1 {
            lines.push(LAST_ROW_CLOSE.to_string());
        } else if index % FRAMES_PER_ROW == FRAMES_PER_ROW - 1 {
            lines.push(ROW_CLOSE.to_string());
        }
    }

    Ok(lines)
}

fn push_subfloat(lines: &mut Vec<String>, name: &str, frame: &FrameDescriptor) {
    let label = frame.frame_label;
    lines.push(format!("\t\t\t\\subfloat[$t={}$]{{%", frame.time_text()));
    lines.push(format!(
        "\t\t\t\t\\includegraphics[width={IMAGE_WIDTH}\\textwidth]{{images/datasets/{name}/t{label}.png}}%"
    ));
    lines.push(format!("\t\t\t\t\\label{{fig:{name}_t{label}}}%"));
    lines.push(SUBFLOAT_CLOSE.to_string());
}
