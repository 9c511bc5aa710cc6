/// A simulated dataset whose frames are rendered into one figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset {
    /// Human-readable title used for the section and caption.
    pub title: &'static str,
    /// Directory and label namespace under `images/datasets/`.
    pub name: &'static str,
    /// Divisor turning a frame number into simulation time.
    pub size: u32,
    /// Frame-number stride between consecutive sub-figures.
    pub step: u32,
}

const fn dataset(title: &'static str, name: &'static str, size: u32, step: u32) -> Dataset {
    Dataset {
        title,
        name,
        size,
        step,
    }
}

/// Every dataset, in document order.
pub static DATASETS: [Dataset; 9] = [
    dataset("Droplet Collision", "droplet", 250, 20),
    dataset("Beating Heart (2D)", "heart2D", 60, 5),
    dataset("Beating Heart (3D)", "heart3D", 64, 5),
    dataset("Expanding Circle", "circle", 120, 10),
    dataset("Expanding Sphere", "sphere", 120, 10),
    dataset("Spinning", "spinning", 64, 5),
    dataset("Sliding Square", "square", 64, 5),
    dataset("Sliding Cube", "cube", 64, 5),
    dataset("Twinkling Star", "star", 64, 5),
];

pub fn find_dataset(name: &str) -> Option<&'static Dataset> {
    DATASETS.iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in DATASETS.iter().enumerate() {
            for b in &DATASETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn every_size_is_non_zero() {
        assert!(DATASETS.iter().all(|d| d.size > 0));
    }

    #[test]
    fn find_by_name() {
        let d = find_dataset("heart3D").unwrap();
        assert_eq!(d.title, "Beating Heart (3D)");
        assert_eq!((d.size, d.step), (64, 5));
        assert!(find_dataset("Heart3D").is_none());
    }
}
