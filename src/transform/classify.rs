//! Endpoint classification for HTTP sampler port lines.

/// Property key marking a sampler's path line.
pub const PATH_MARKER: &str = "HTTPSampler.path";

/// The service a sampler talks to, judged from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// A path containing `/api`.
    Rest,
    /// A path containing `/graph`.
    GraphQl,
    /// A path containing neither marker. The port is left alone without a warning.
    Unrecognized,
}

impl Endpoint {
    /// Classifies a single path line.
    ///
    /// `/api` wins over `/graph` when a line contains both.
    pub fn from_path_line(line: &str) -> Self {
        if line.contains("/api") {
            Endpoint::Rest
        } else if line.contains("/graph") {
            Endpoint::GraphQl
        } else {
            Endpoint::Unrecognized
        }
    }
}

/// Decides which endpoint the port on a given line belongs to.
pub trait EndpointClassifier: Send + Sync {
    /// Classifies the port found at `lines[port_line]`.
    ///
    /// Returns `None` when no path could be associated with the port.
    fn classify(&self, lines: &[&str], port_line: usize) -> Option<Endpoint>;

    /// Number of lines searched after the port, if the classifier is window based.
    fn window_hint(&self) -> Option<usize> {
        None
    }

    /// Returns a description of the classifier.
    fn describe(&self) -> String;
}

/// Classifies a port by the first path line found in the following lines.
///
/// JMeter writes a sampler's properties in a fixed order, so the path of an
/// `HTTPSamplerProxy` shows up a few lines after its port.
#[derive(Debug, Clone, Copy)]
pub struct LookaheadClassifier {
    window: usize,
}

impl LookaheadClassifier {
    /// Creates a classifier that inspects up to `window` lines after the port.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Default for LookaheadClassifier {
    fn default() -> Self {
        Self::new(crate::config::LOOKAHEAD_WINDOW)
    }
}

impl EndpointClassifier for LookaheadClassifier {
    fn classify(&self, lines: &[&str], port_line: usize) -> Option<Endpoint> {
        lines
            .iter()
            .skip(port_line + 1)
            .take(self.window)
            .find(|line| line.contains(PATH_MARKER))
            .map(|line| Endpoint::from_path_line(line))
    }

    fn window_hint(&self) -> Option<usize> {
        Some(self.window)
    }

    fn describe(&self) -> String {
        format!("First {} within {} lines after the port", PATH_MARKER, self.window)
    }
}
