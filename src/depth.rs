use log::info;

/// Depth calculates minimum, maximum, average and percentile of the
/// depth of null links in the [`Llrb`] tree, that is, the number of
/// nodes walked from root before falling off the tree.
///
/// [`Llrb`]: crate::Llrb
#[derive(Clone, Debug, Default)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    histogram: Vec<u64>, // histogram[depth] = number of samples
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        if self.histogram.len() <= depth {
            self.histogram.resize(depth + 1, 0);
        }
        self.histogram[depth] += 1;
    }

    /// Return number of null links sampled.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth, zero if nothing was sampled.
    pub fn mean(&self) -> usize {
        self.total.checked_div(self.samples).unwrap_or(0)
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth), for percentiles starting from 90. Only
    /// depths at which the percentile steps up are listed.
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        let (mut acc, mut prev_perc) = (0_u64, 90_u8);
        let iter = self.histogram.iter().enumerate().filter(|(_, n)| **n > 0);
        for (depth, n) in iter {
            acc += *n;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            if perc >= prev_perc {
                percentiles.push((perc, depth));
                prev_perc = perc + 1;
            }
        }
        percentiles
    }

    /// Log depth statistics in human readable format.
    pub fn pretty_print(&self, prefix: &str) {
        info!(
            "{}depth (min, avg, max): {:?}",
            prefix,
            (self.min, self.mean(), self.max)
        );
        for (perc, depth) in self.percentiles().into_iter() {
            info!("{}  {} percentile = {}", prefix, perc, depth);
        }
    }

    /// Convert depth statistics to JSON format, useful for plotting.
    pub fn json(&self) -> String {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(perc, depth)| format!("\"{}\": {}", perc, depth))
            .collect();
        format!(
            "{{ \"min\": {}, \"mean\": {}, \"max\": {}, \"percentiles\": {{ {} }} }}",
            self.min,
            self.mean(),
            self.max,
            ps.join(", ")
        )
    }
}
