//! Rewrites HTTP sampler ports according to the endpoint each sampler hits.

use super::classify::{Endpoint, EndpointClassifier, LookaheadClassifier};
use super::{RewriteWarning, Transform, TransformOutput};
use crate::config::PortConfig;
use crate::error::Result;
use regex::{NoExpand, Regex};
use std::path::Path;

/// Property key preceding a sampler's port value.
pub const PORT_KEY: &str = r#"HTTPSampler.port">"#;

// Unescaped dot: any character between "HTTPSampler" and "port" matches.
const PORT_VALUE_PATTERN: &str = r#"HTTPSampler.port">\d+"#;

/// Line-oriented port rewriter.
///
/// Every line carrying one of the legacy port markers is handed to an
/// [`EndpointClassifier`]; REST samplers get the REST port, GraphQL samplers
/// get the GraphQL port, and everything else is left untouched.
pub struct PortRewriter<C = LookaheadClassifier> {
    classifier: C,
    markers: Vec<String>,
    value: Regex,
    rest_port: u16,
    graphql_port: u16,
}

impl PortRewriter<LookaheadClassifier> {
    /// Creates a rewriter using the given configuration and the lookahead heuristic.
    pub fn new(config: &PortConfig) -> Result<Self> {
        Self::with_classifier(config, LookaheadClassifier::new(config.lookahead))
    }
}

impl<C: EndpointClassifier> PortRewriter<C> {
    /// Creates a rewriter with a custom endpoint classifier.
    pub fn with_classifier(config: &PortConfig, classifier: C) -> Result<Self> {
        Ok(Self {
            classifier,
            markers: config
                .legacy_ports
                .iter()
                .map(|port| format!("{PORT_KEY}{port}"))
                .collect(),
            value: Regex::new(PORT_VALUE_PATTERN)?,
            rest_port: config.rest_port,
            graphql_port: config.graphql_port,
        })
    }

    /// Returns true if the line holds a port this rewriter is responsible for.
    pub fn is_port_line(&self, line: &str) -> bool {
        self.markers.iter().any(|marker| line.contains(marker.as_str()))
    }

    fn port_for(&self, endpoint: Endpoint) -> Option<u16> {
        match endpoint {
            Endpoint::Rest => Some(self.rest_port),
            Endpoint::GraphQl => Some(self.graphql_port),
            Endpoint::Unrecognized => None,
        }
    }
}

impl<C: EndpointClassifier> Transform for PortRewriter<C> {
    fn apply(&self, source: &str, path: &Path) -> Result<TransformOutput> {
        // split keeps a trailing empty segment, so join restores the file byte for byte
        let lines: Vec<&str> = source.split('\n').collect();
        let mut result = Vec::with_capacity(lines.len());
        let mut warnings = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if !self.is_port_line(line) {
                result.push(line.to_string());
                continue;
            }

            match self.classifier.classify(&lines, i) {
                Some(endpoint) => match self.port_for(endpoint) {
                    Some(port) => {
                        let replacement = format!("{PORT_KEY}{port}");
                        let rewritten = self.value.replace_all(line, NoExpand(&replacement));
                        tracing::debug!(
                            path = %path.display(),
                            line = i + 1,
                            ?endpoint,
                            port,
                            "rewrote sampler port"
                        );
                        result.push(rewritten.into_owned());
                    }
                    None => {
                        tracing::debug!(
                            path = %path.display(),
                            line = i + 1,
                            "path matches no known endpoint, port left as is"
                        );
                        result.push(line.to_string());
                    }
                },
                None => {
                    warnings.push(RewriteWarning {
                        line: i + 1,
                        window: self.classifier.window_hint(),
                    });
                    result.push(line.to_string());
                }
            }
        }

        Ok(TransformOutput {
            content: result.join("\n"),
            warnings,
        })
    }

    fn describe(&self) -> String {
        format!(
            "Set REST ports to {} and GraphQL ports to {} ({})",
            self.rest_port,
            self.graphql_port,
            self.classifier.describe()
        )
    }
}
