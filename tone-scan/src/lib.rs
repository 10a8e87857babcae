use clap::ValueEnum;
use goertzel_purity::{Detector, DetectorConfig, GoertzelError, WindowMode};
use hound::{SampleFormat, WavReader};
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Full scale used when float WAV data is quantized for the detector.
const FLOAT_FULL_SCALE: f32 = i16::MAX as f32;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanWindow {
    None,
    Hamming,
    ExactBlackman,
}

impl From<ScanWindow> for WindowMode {
    fn from(w: ScanWindow) -> Self {
        match w {
            ScanWindow::None => WindowMode::None,
            ScanWindow::Hamming => WindowMode::Hamming,
            ScanWindow::ExactBlackman => WindowMode::ExactBlackman,
        }
    }
}

/// Score of one full block of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockScore {
    pub index: usize,
    /// Offset of the block's first sample in the mono stream.
    pub start: usize,
    pub purity: Result<f32, GoertzelError>,
}

impl BlockScore {
    pub fn exceeds(&self, threshold: f32) -> bool {
        matches!(self.purity, Ok(p) if p >= threshold)
    }
}

impl fmt::Display for BlockScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.purity {
            Ok(p) => write!(f, "{}\t{}\t{:.4}", self.index, self.start, p),
            Err(GoertzelError::SilentBlock) => write!(f, "{}\t{}\tsilent", self.index, self.start),
            Err(e) => write!(f, "{}\t{}\t{}", self.index, self.start, e),
        }
    }
}

/// Read a WAV file as mono integer samples.
///
/// Integer PCM keeps its native scale; float PCM is scaled to 16-bit. Frames
/// with several channels are averaged.
pub fn read_wav(path: &Path) -> Result<(Vec<i32>, u32), Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let interleaved: Vec<i32> = match spec.sample_format {
        SampleFormat::Int => reader.samples::<i32>().collect::<Result<_, _>>()?,
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * FLOAT_FULL_SCALE).round() as i32))
            .collect::<Result<_, _>>()?,
    };
    let channels = usize::from(spec.channels.max(1));
    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| {
                let sum: i64 = frame.iter().map(|&s| i64::from(s)).sum();
                (sum / frame.len() as i64) as i32
            })
            .collect()
    };
    log::debug!(
        "read {} mono samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.display()
    );
    Ok((samples, spec.sample_rate))
}

/// Score every full `block_len` block of `samples`. A trailing partial block
/// is not scored.
pub fn scan(
    samples: &[i32],
    config: DetectorConfig,
    block_len: usize,
) -> Result<Vec<BlockScore>, GoertzelError> {
    if block_len == 0 {
        return Err(GoertzelError::EmptyBlock);
    }
    let mut det: Detector = Detector::new(config.with_block_len(block_len))?;
    Ok(samples
        .chunks_exact(block_len)
        .enumerate()
        .map(|(index, block)| BlockScore {
            index,
            start: index * block_len,
            purity: det.detect_batch(block),
        })
        .collect())
}
