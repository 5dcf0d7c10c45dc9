use log::info;

#[allow(unused_imports)]
use crate::RbTree;

/// Depth tracks how deep the absent-child boundaries sit in an
/// [`RbTree`] instance. Collected by [`RbTree::validate`], one sample
/// per missing left or right child.
#[derive(Clone, Debug, Default)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    histogram: Vec<u64>, // histogram[depth] = number of boundaries at depth
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

    /// Return number of boundaries sampled.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return the depth of the shallowest boundary.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return the depth of the deepest boundary.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average boundary depth, zero when nothing was sampled.
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            n => self.total / n,
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Returned percentiles range from 90 up to and
    /// including 100, only depths that cross into a new percentile are
    /// listed. The deepest boundary always reports 100.
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles = vec![];
        if self.samples == 0 {
            return percentiles;
        }

        let (mut acc, mut floor) = (0_u64, 90_u8);
        for (depth, count) in self.histogram.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            acc += count;
            let perc = ((acc * 100) / (self.samples as u64)) as u8;
            if perc >= floor {
                percentiles.push((perc, depth));
                floor = perc + 1;
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
            .map(|(p, d)| format!("\"{}\": {}", p, d))
            .collect();
        format!(
            "{{ \"samples\": {}, \"min\": {}, \"mean\": {}, \"max\": {}, \"percentiles\": {{ {} }} }}",
            self.samples,
            self.min,
            self.mean(),
            self.max,
            ps.join(", ")
        )
    }
}
