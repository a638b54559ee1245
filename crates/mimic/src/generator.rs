use {
    crate::{
        error::{MimicError, Result},
        transforms::{remove_non_speech, reset_start},
    },
    base::{Annotation, Segment},
    rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom},
    serde::{Deserialize, Serialize},
    std::path::Path,
};

/// Configuration for synthetic annotation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MimicConfig {
    /// Keep non-speech gaps in the reference annotations instead of
    /// collapsing them at load time.
    pub keep_non_speech: bool,
    /// Maximum per-segment duration jitter, as a fraction of the segment
    /// duration. Must be in [0.0, 1.0].
    pub duration_noise: f64,
    /// Probability of reassigning a segment's label to a random one.
    pub label_noise: f64,
    /// Length of every generated sample, in seconds.
    pub length: f64,
    /// Use only the first N reference annotations of the file.
    pub max_files: Option<usize>,
    /// Random seed. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for MimicConfig {
    fn default() -> Self {
        Self {
            keep_non_speech: false,
            duration_noise: 0.2,
            label_noise: 0.05,
            length: 6.0,
            max_files: None,
            seed: None,
        }
    }
}

/// Generates an unbounded sequence of fixed-length synthetic annotations
/// from a collection of reference annotations.
///
/// References are visited in shuffled order and reshuffled after every full
/// pass, so each reference is used exactly once per cycle. Every sample is
/// a uniformly random crop of one reference, optionally perturbed, starting
/// at 0 and relabeled to sequential integer labels. Samples keep the uri of
/// their source reference.
#[derive(Debug)]
pub struct MimicGenerator {
    config: MimicConfig,
    references: Vec<Annotation>,
    order: Vec<usize>,
    cursor: usize,
    rng: StdRng,
}

impl MimicGenerator {
    /// Build a generator from the SPEAKER records of an RTTM file.
    pub fn open(path: impl AsRef<Path>, config: MimicConfig) -> Result<Self> {
        let references = rttm::load_rttm(path)?;
        Self::from_annotations(references, config)
    }

    /// Build a generator from already-loaded reference annotations.
    ///
    /// Applies the `max_files` cap, removes non-speech from every reference
    /// unless `keep_non_speech` is set, and errors if nothing is left.
    pub fn from_annotations(references: Vec<Annotation>, config: MimicConfig) -> Result<Self> {
        let mut references = references;
        if let Some(max_files) = config.max_files {
            references.truncate(max_files);
        }
        if !config.keep_non_speech {
            references = references.iter().map(remove_non_speech).collect();
        }
        if references.is_empty() {
            return Err(MimicError::NoReferences);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        log::info!("loaded {} reference annotations", references.len());

        let count = references.len();
        Ok(Self {
            config,
            references,
            order: (0..count).collect(),
            // exhausted cursor forces a shuffle on the first advance
            cursor: count,
            rng,
        })
    }

    pub fn config(&self) -> &MimicConfig {
        &self.config
    }

    /// Number of reference annotations in the collection.
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Index of the next reference in the shuffled cycle.
    fn next_reference(&mut self) -> usize {
        if self.cursor >= self.order.len() {
            self.order.shuffle(&mut self.rng);
            self.cursor = 0;
        }
        let index = self.order[self.cursor];
        self.cursor += 1;
        index
    }

    /// Take a uniformly random crop of the configured length, shifted to
    /// start at 0 and support-merged.
    fn random_crop(&mut self, reference: usize) -> Result<Annotation> {
        let annotation = &self.references[reference];
        let extent = annotation.timeline().extent();

        let bound = extent.end - self.config.length;
        if bound < 0.0 {
            return Err(MimicError::ReferenceTooShort {
                uri: annotation.uri.clone().unwrap_or_default(),
                duration: extent.end,
                length: self.config.length,
            });
        }

        let start = self.rng.random_range(0.0..=bound);
        let window = Segment::new(start, start + self.config.length);
        let cropped = annotation.crop(&window);
        if cropped.is_empty() {
            // only reachable with keep_non_speech: the window landed on a gap
            return Err(MimicError::EmptyCrop {
                uri: annotation.uri.clone().unwrap_or_default(),
            });
        }

        Ok(reset_start(&cropped, 0.0).support())
    }

    /// Produce the next synthetic sample.
    pub fn generate(&mut self) -> Result<Annotation> {
        let reference = self.next_reference();
        let cropped = self.random_crop(reference)?;

        if self.config.duration_noise == 0.0 && self.config.label_noise == 0.0 {
            return Ok(cropped.relabel_sequential());
        }

        let labels = cropped.labels();
        let mut perturbed = cropped.empty_copy();
        let mut last_label = String::new();
        for (segment, label) in cropped.itertracks() {
            // reassign to a random label with probability label_noise
            let mut label = label.to_string();
            if self.rng.random::<f64>() < self.config.label_noise {
                label = labels[self.rng.random_range(0..labels.len())].clone();
            }

            // jitter the duration by up to ±duration_noise of itself,
            // recentered on the original midpoint, clipped to [0, length]
            let jitter = self.config.duration_noise * (2.0 * self.rng.random::<f64>() - 1.0);
            let duration = segment.duration() * (1.0 + jitter);
            let middle = segment.middle();
            let start = (middle - duration / 2.0).max(0.0);
            let end = (middle + duration / 2.0).min(self.config.length);
            perturbed.insert(Segment::new(start, end), label.clone());
            last_label = label;
        }

        // jitter opens gaps; collapse them and re-anchor at 0, then pad or
        // truncate to the configured length
        let mut result = remove_non_speech(&reset_start(&perturbed, 0.0));
        let end = result.timeline().extent().end;
        if end > self.config.length {
            result = result.crop(&Segment::new(0.0, self.config.length));
        } else if end < self.config.length {
            result.insert(Segment::new(end, self.config.length), last_label);
        }

        log::debug!(
            "sample from {}: {} tracks",
            result.uri.as_deref().unwrap_or("<NA>"),
            result.len()
        );

        Ok(result.support().relabel_sequential())
    }
}

impl Iterator for MimicGenerator {
    type Item = Result<Annotation>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}
