//! Port conventions and discovery defaults.

/// Port used by the REST (write) service.
pub const REST_PORT: u16 = 3034;

/// Port used by the GraphQL (read) service.
pub const GRAPHQL_PORT: u16 = 3035;

/// Ports a sampler may carry before it is rewritten.
pub const LEGACY_PORTS: [u16; 3] = [3033, 3034, 3035];

/// Number of lines inspected after a port line when looking for its path.
pub const LOOKAHEAD_WINDOW: usize = 9;

/// Test plans rewritten by the `fix-ports` binary.
pub const DEFAULT_PATTERN: &str = "test-plans/*.jmx";

/// Settings for a rewrite run.
///
/// The defaults reproduce the convention used by the performance suite:
/// `/api` samplers go to 3034 and `/graph` samplers go to 3035.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortConfig {
    /// Port assigned to samplers whose path contains `/api`.
    pub rest_port: u16,

    /// Port assigned to samplers whose path contains `/graph`.
    pub graphql_port: u16,

    /// Port values that mark a line as a candidate for rewriting.
    pub legacy_ports: Vec<u16>,

    /// Lines after a port line searched for the matching path line.
    pub lookahead: usize,

    /// Glob, relative to the run root, selecting the files to rewrite.
    pub pattern: String,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            rest_port: REST_PORT,
            graphql_port: GRAPHQL_PORT,
            legacy_ports: LEGACY_PORTS.to_vec(),
            lookahead: LOOKAHEAD_WINDOW,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl PortConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the REST port.
    pub fn rest_port(mut self, port: u16) -> Self {
        self.rest_port = port;
        self
    }

    /// Sets the GraphQL port.
    pub fn graphql_port(mut self, port: u16) -> Self {
        self.graphql_port = port;
        self
    }

    /// Replaces the set of recognized legacy ports.
    pub fn legacy_ports(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.legacy_ports = ports.into_iter().collect();
        self
    }

    /// Sets the lookahead window.
    pub fn lookahead(mut self, lines: usize) -> Self {
        self.lookahead = lines;
        self
    }

    /// Sets the discovery glob.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Summary lines printed after a run.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("  - REST endpoints (/api) → port {}", self.rest_port),
            format!("  - GraphQL endpoints (/graph) → port {}", self.graphql_port),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortConfig::default();
        assert_eq!(config.rest_port, 3034);
        assert_eq!(config.graphql_port, 3035);
        assert_eq!(config.legacy_ports, vec![3033, 3034, 3035]);
        assert_eq!(config.lookahead, 9);
        assert_eq!(config.pattern, "test-plans/*.jmx");
    }

    #[test]
    fn test_summary_lines() {
        let [rest, graph] = PortConfig::default().summary_lines();
        assert_eq!(rest, "  - REST endpoints (/api) → port 3034");
        assert_eq!(graph, "  - GraphQL endpoints (/graph) → port 3035");
    }

    #[test]
    fn test_builder() {
        let config = PortConfig::new()
            .rest_port(8080)
            .graphql_port(8081)
            .legacy_ports([80])
            .lookahead(3)
            .pattern("plans/**/*.jmx");

        assert_eq!(config.rest_port, 8080);
        assert_eq!(config.graphql_port, 8081);
        assert_eq!(config.legacy_ports, vec![80]);
        assert_eq!(config.lookahead, 3);
        assert_eq!(config.pattern, "plans/**/*.jmx");
    }
}
