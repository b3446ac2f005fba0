use crate::types::Measurement;

/// Arithmetic mean, kept within `[min, max]` despite rounding in the sum.
pub fn mean(samples: &[f64]) -> Option<f64> {
    let lo = min(samples)?;
    let hi = max(samples)?;
    let avg = samples.iter().sum::<f64>() / samples.len() as f64;
    Some(avg.clamp(lo, hi))
}

/// Middle value of the sorted samples; the average of the two middle values
/// for even lengths.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

pub fn min(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::min)
}

pub fn max(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::max)
}

/// Aggregate raw samples (milliseconds) into a `Measurement`.
pub fn summarize(name: &str, samples: &[f64]) -> Option<Measurement> {
    Some(Measurement {
        name: name.to_string(),
        avg: mean(samples)?,
        median: median(samples)?,
        min: min(samples)?,
        max: max(samples)?,
    })
}
