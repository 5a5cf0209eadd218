use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct LengthSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: usize,
    pub median: f64,
    pub max: usize,
}

/// Standard deviation uses the sample form (n - 1).
pub fn describe(word_counts: &[usize]) -> LengthSummary {
    if word_counts.is_empty() {
        return LengthSummary {
            count: 0,
            mean: 0.0,
            std: 0.0,
            min: 0,
            median: 0.0,
            max: 0,
        };
    }

    let count = word_counts.len();
    let sum: usize = word_counts.iter().sum();
    let mean = sum as f64 / count as f64;
    let std = if count > 1 {
        let squared: f64 = word_counts
            .iter()
            .map(|&n| {
                let d = n as f64 - mean;
                d * d
            })
            .sum();
        (squared / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    let mut sorted = word_counts.to_vec();
    sorted.sort_unstable();
    let median = if count % 2 == 1 {
        sorted[count / 2] as f64
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) as f64 / 2.0
    };

    LengthSummary {
        count,
        mean,
        std,
        min: sorted[0],
        median,
        max: sorted[count - 1],
    }
}

impl fmt::Display for LengthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} mean={:.1} std={:.1} min={} median={:.1} max={}",
            self.count, self.mean, self.std, self.min, self.median, self.max
        )
    }
}
