//! Typed builder for the append filter graph.
//!
//! The graph has a fixed topology: two segments (source, still), each with
//! one video chain and one audio chain, feeding a single `concat` node with
//! one video and one audio output. Callers only supply the chain bodies; the
//! graph owns every intermediate label, so a chain can never be wired to the
//! wrong concat pad.

use std::fmt;

/// Kind of elementary stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    fn specifier(self) -> &'static str {
        match self {
            MediaKind::Video => "v",
            MediaKind::Audio => "a",
        }
    }
}

/// A stream of one of the command's input files, e.g. `[1:v]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputStream {
    pub file_index: usize,
    pub kind: MediaKind,
}

impl InputStream {
    #[must_use]
    pub fn new(file_index: usize, kind: MediaKind) -> Self {
        Self { file_index, kind }
    }
}

impl fmt::Display for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.file_index, self.kind.specifier())
    }
}

/// Named intermediate and output pads of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamLabel {
    SourceVideo,
    SourceAudio,
    StillVideo,
    StillAudio,
    OutputVideo,
    OutputAudio,
}

impl StreamLabel {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StreamLabel::SourceVideo => "v0",
            StreamLabel::SourceAudio => "a0",
            StreamLabel::StillVideo => "v1",
            StreamLabel::StillAudio => "a1",
            StreamLabel::OutputVideo => "v",
            StreamLabel::OutputAudio => "a",
        }
    }
}

impl fmt::Display for StreamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name())
    }
}

/// A single filter with its option string, e.g. `scale=1920:1080`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    name: &'static str,
    options: String,
}

impl Filter {
    #[must_use]
    pub fn new(name: &'static str, options: impl Into<String>) -> Self {
        Self {
            name,
            options: options.into(),
        }
    }

    #[must_use]
    pub fn scale(width: u32, height: u32) -> Self {
        Self::new("scale", format!("{width}:{height}"))
    }

    #[must_use]
    pub fn fps(rate: f64) -> Self {
        Self::new("fps", format!("{rate:.6}"))
    }

    #[must_use]
    pub fn format(pixel_format: &str) -> Self {
        Self::new("format", pixel_format)
    }

    #[must_use]
    pub fn setsar(ratio: u32) -> Self {
        Self::new("setsar", ratio.to_string())
    }

    /// `trim` for video, `atrim` for audio. `duration` is already formatted.
    #[must_use]
    pub fn trim(kind: MediaKind, duration: &str) -> Self {
        let name = match kind {
            MediaKind::Video => "trim",
            MediaKind::Audio => "atrim",
        };
        Self::new(name, format!("duration={duration}"))
    }

    /// `setpts`/`asetpts` resetting the timestamp origin to zero.
    #[must_use]
    pub fn reset_pts(kind: MediaKind) -> Self {
        let name = match kind {
            MediaKind::Video => "setpts",
            MediaKind::Audio => "asetpts",
        };
        Self::new(name, "PTS-STARTPTS")
    }

    #[must_use]
    pub fn aresample(sample_rate: u32) -> Self {
        Self::new("aresample", sample_rate.to_string())
    }

    #[must_use]
    pub fn aformat_layout(layout: &str) -> Self {
        Self::new("aformat", format!("channel_layouts={layout}"))
    }

    /// Silent audio source.
    #[must_use]
    pub fn anullsrc(sample_rate: u32, layout: &str) -> Self {
        Self::new("anullsrc", format!("r={sample_rate}:cl={layout}"))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.options)
    }
}

/// A linear chain of filters, optionally fed by an input stream.
///
/// Chains without an input start with a source filter such as `anullsrc`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChain {
    input: Option<InputStream>,
    filters: Vec<Filter>,
}

impl FilterChain {
    #[must_use]
    pub fn from_input(input: InputStream) -> Self {
        Self {
            input: Some(input),
            filters: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_source(source: Filter) -> Self {
        Self {
            input: None,
            filters: vec![source],
        }
    }

    #[must_use]
    pub fn then(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn input(&self) -> Option<InputStream> {
        self.input
    }

    fn render(&self, output: StreamLabel) -> String {
        let body = self
            .filters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        match self.input {
            Some(input) => format!("{input}{body}{output}"),
            None => format!("{body}{output}"),
        }
    }
}

/// Video and audio chains of one concat segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub video: FilterChain,
    pub audio: FilterChain,
}

/// The complete two-segment concatenation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGraph {
    source: Segment,
    still: Segment,
}

impl FilterGraph {
    /// Joins the source segment followed by the still segment.
    #[must_use]
    pub fn concat(source: Segment, still: Segment) -> Self {
        Self { source, still }
    }

    #[must_use]
    pub fn source(&self) -> &Segment {
        &self.source
    }

    #[must_use]
    pub fn still(&self) -> &Segment {
        &self.still
    }

    /// The merged video pad, for `-map`.
    #[must_use]
    pub fn video_output(&self) -> StreamLabel {
        StreamLabel::OutputVideo
    }

    /// The merged audio pad, for `-map`.
    #[must_use]
    pub fn audio_output(&self) -> StreamLabel {
        StreamLabel::OutputAudio
    }

    /// Renders the `-filter_complex` expression.
    #[must_use]
    pub fn to_filter_complex(&self) -> String {
        let concat = format!(
            "{}{}{}{}concat=n=2:v=1:a=1{}{}",
            StreamLabel::SourceVideo,
            StreamLabel::SourceAudio,
            StreamLabel::StillVideo,
            StreamLabel::StillAudio,
            StreamLabel::OutputVideo,
            StreamLabel::OutputAudio,
        );
        [
            self.source.video.render(StreamLabel::SourceVideo),
            self.source.audio.render(StreamLabel::SourceAudio),
            self.still.video.render(StreamLabel::StillVideo),
            self.still.audio.render(StreamLabel::StillAudio),
            concat,
        ]
        .join(";")
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_filter_complex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_stream_display() {
        assert_eq!(InputStream::new(0, MediaKind::Video).to_string(), "[0:v]");
        assert_eq!(InputStream::new(1, MediaKind::Audio).to_string(), "[1:a]");
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::scale(1280, 720).to_string(), "scale=1280:720");
        assert_eq!(Filter::fps(29.97002997).to_string(), "fps=29.970030");
        assert_eq!(Filter::trim(MediaKind::Audio, "0.5").to_string(), "atrim=duration=0.5");
        assert_eq!(Filter::reset_pts(MediaKind::Video).to_string(), "setpts=PTS-STARTPTS");
        assert_eq!(Filter::anullsrc(44100, "mono").to_string(), "anullsrc=r=44100:cl=mono");
    }

    #[test]
    fn test_graph_wires_labels_in_segment_order() {
        let graph = FilterGraph::concat(
            Segment {
                video: FilterChain::from_input(InputStream::new(0, MediaKind::Video)).then(Filter::setsar(1)),
                audio: FilterChain::from_input(InputStream::new(0, MediaKind::Audio)).then(Filter::aresample(48000)),
            },
            Segment {
                video: FilterChain::from_input(InputStream::new(1, MediaKind::Video)).then(Filter::setsar(1)),
                audio: FilterChain::from_source(Filter::anullsrc(48000, "stereo")),
            },
        );

        assert_eq!(
            graph.to_filter_complex(),
            "[0:v]setsar=1[v0];[0:a]aresample=48000[a0];[1:v]setsar=1[v1];anullsrc=r=48000:cl=stereo[a1];\
             [v0][a0][v1][a1]concat=n=2:v=1:a=1[v][a]"
        );
        assert_eq!(graph.video_output().to_string(), "[v]");
        assert_eq!(graph.audio_output().to_string(), "[a]");
    }
}
