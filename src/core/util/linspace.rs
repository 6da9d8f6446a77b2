/// `count` evenly spaced samples over `[start, end]`, both ends included.
///
/// Matches numpy's `linspace`: sample `i` is `start + i * step`, the last
/// sample is pinned to `end`, and a single sample is `start`.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    if count == 1 {
        return vec![start];
    }

    let step = (end - start) / (count - 1) as f64;
    let mut samples: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    samples[count - 1] = end;

    samples
}
