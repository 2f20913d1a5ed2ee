use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Sample – one data line of the capture
// ---------------------------------------------------------------------------

/// One row of the capture reduced to its two differential channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Seconds since the start of the capture.
    pub time: f64,
    /// `chanA - chanB`
    pub v1: f64,
    /// `chanC - chanD`
    pub v2: f64,
}

impl Sample {
    /// Build a sample from the raw `time, chanA, chanB, chanC, chanD` fields.
    pub fn from_fields(fields: [f64; 5]) -> Self {
        let [time, a, b, c, d] = fields;
        Sample {
            time,
            v1: a - b,
            v2: c - d,
        }
    }
}

// ---------------------------------------------------------------------------
// Traces – the plotted series
// ---------------------------------------------------------------------------

/// Parallel `time`, `v1` and `v2` sequences in file order.
///
/// The vectors only grow together through [`Traces::push`], so they always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Traces {
    time: Vec<f64>,
    v1: Vec<f64>,
    v2: Vec<f64>,
}

impl Traces {
    pub fn with_capacity(capacity: usize) -> Self {
        Traces {
            time: Vec::with_capacity(capacity),
            v1: Vec::with_capacity(capacity),
            v2: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.time.push(sample.time);
        self.v1.push(sample.v1);
        self.v2.push(sample.v2);
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn v1(&self) -> &[f64] {
        &self.v1
    }

    pub fn v2(&self) -> &[f64] {
        &self.v2
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether no samples were read.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.time
            .iter()
            .zip(&self.v1)
            .zip(&self.v2)
            .map(|((&time, &v1), &v2)| Sample { time, v1, v2 })
    }
}

impl FromIterator<Sample> for Traces {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut traces = Traces::with_capacity(iter.size_hint().0);
        for sample in iter {
            traces.push(sample);
        }
        traces
    }
}

// ---------------------------------------------------------------------------
// Capture – a fully loaded file
// ---------------------------------------------------------------------------

/// A capture file after loading.
#[derive(Debug, Clone)]
pub struct Capture {
    /// Absolute path the capture was read from.
    pub source: PathBuf,
    /// Header lines skipped before the data, kept verbatim for display.
    pub preamble: Vec<String>,
    pub traces: Traces,
}
