// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" linear ticks and stepped year ranges.

/// Round-number ticks covering `[start, stop]`, aiming for about `count` of them.
/// Steps are 1, 2, 5 or 10 times a power of ten.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let mut ticks: Vec<f64> = if power >= 0.0 {
        let step = factor * 10f64.powf(power);
        let (i0, i1) = ((lo / step).ceil() as i64, (hi / step).floor() as i64);
        (i0..=i1).map(|i| i as f64 * step).collect()
    } else {
        // Divide by the inverse step so e.g. 0.1 steps stay exact.
        let inv = 10f64.powf(-power) / factor;
        let (i0, i1) = ((lo * inv).ceil() as i64, (hi * inv).floor() as i64);
        (i0..=i1).map(|i| i as f64 / inv).collect()
    };
    if start > stop {
        ticks.reverse();
    }
    ticks
}

/// Years `start, start + step, ...` strictly below `end`, followed by `end` itself
/// so the axis never ends with a gap shorter than one step.
pub fn year_ticks(start: i32, end: i32, step: u32) -> Vec<i32> {
    let step = step.max(1) as usize;
    let mut years: Vec<i32> = (start..end).step_by(step).collect();
    years.push(end);
    years
}
