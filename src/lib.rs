//! # jmx-ports
//!
//! Rewrites the ports of HTTP samplers in JMeter test plans so that REST and
//! GraphQL traffic reach separate services.
//!
//! A sampler whose path contains `/api` is pointed at the REST port (3034),
//! one whose path contains `/graph` at the GraphQL port (3035). Test plans
//! are handled as plain text: each `HTTPSampler.port` line is tied to the
//! first `HTTPSampler.path` line within the next nine lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jmx_ports::prelude::*;
//!
//! // Rewrite test-plans/*.jmx below the current directory
//! let report = PortFixer::current_dir()?.run(&mut std::io::stdout())?;
//! println!("{}", report.summary);
//! # Ok::<(), jmx_ports::error::FixPortsError>(())
//! ```
//!
//! ## Rewriting text directly
//!
//! ```rust
//! use jmx_ports::prelude::*;
//! use std::path::Path;
//!
//! let plan = "<stringProp name=\"HTTPSampler.port\">3033</stringProp>\n\
//!             <stringProp name=\"HTTPSampler.path\">/graph</stringProp>";
//!
//! let output = PortRewriter::new(&PortConfig::default())?
//!     .apply(plan, Path::new("plan.jmx"))?;
//!
//! assert!(output.content.contains("HTTPSampler.port\">3035"));
//! # Ok::<(), jmx_ports::error::FixPortsError>(())
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod fixer;
pub mod logging;
pub mod matcher;
pub mod transform;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::PortConfig;
    pub use crate::diff::DiffSummary;
    pub use crate::error::{FixPortsError, Result};
    pub use crate::fixer::{FixReport, PortFixer};
    pub use crate::matcher::FileMatcher;
    pub use crate::transform::{
        Endpoint, EndpointClassifier, FileChange, LookaheadClassifier, PortRewriter,
        RewriteWarning, Transform, TransformOutput,
    };
}

pub use prelude::*;
