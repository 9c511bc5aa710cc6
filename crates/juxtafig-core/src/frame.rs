use crate::error::FigureError;

/// A single time-sampled frame of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDescriptor {
    /// Position of the frame within the figure (0-based).
    pub index: u32,
    /// Raw frame number, `index * step`. Used verbatim in image paths and labels.
    pub frame_label: u64,
    /// Simulation time shown in the caption, `index * step / size`.
    pub time: f64,
}

impl FrameDescriptor {
    pub fn new(index: u32, size: u32, step: u32, name: &str) -> Result<Self, FigureError> {
        if size == 0 {
            return Err(FigureError::ZeroSizeDivisor {
                name: name.to_string(),
            });
        }

        let frame_label = index as u64 * step as u64;
        Ok(Self {
            index,
            frame_label,
            time: frame_label as f64 / size as f64,
        })
    }

    /// Caption time with exactly four decimal places.
    pub fn time_text(&self) -> String {
        format!("{:.4}", self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_undivided_frame_number() {
        let f = FrameDescriptor::new(3, 64, 5, "square").unwrap();
        assert_eq!(f.frame_label, 15);
    }

    #[test]
    fn time_has_four_decimals() {
        let f = FrameDescriptor::new(1, 250, 20, "droplet").unwrap();
        assert_eq!(f.time_text(), "0.0800");

        let f = FrameDescriptor::new(0, 64, 5, "star").unwrap();
        assert_eq!(f.time_text(), "0.0000");

        // 55 / 64 = 0.859375
        let f = FrameDescriptor::new(11, 64, 5, "star").unwrap();
        assert_eq!(f.time_text(), "0.8594");
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = FrameDescriptor::new(1, 0, 5, "broken").unwrap_err();
        assert_eq!(
            err,
            FigureError::ZeroSizeDivisor {
                name: "broken".to_string()
            }
        );
    }
}
