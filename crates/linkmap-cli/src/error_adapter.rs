//! Error adapter for converting LinkMapError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use linkmap::LinkMapError;

/// Adapter giving every [`LinkMapError`] a stable code and, where one helps,
/// a hint on how to fix the input.
pub struct ErrorAdapter<'a>(pub &'a LinkMapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            LinkMapError::Io(_) => "linkmap::io",
            LinkMapError::Json(_) => "linkmap::json",
            LinkMapError::Config(_) => "linkmap::config",
            LinkMapError::EmptyGraph => "linkmap::empty_graph",
            LinkMapError::RootNotFound { .. } => "linkmap::root_not_found",
            LinkMapError::AmbiguousRoot { .. } => "linkmap::ambiguous_root",
            LinkMapError::DanglingEdge { .. } => "linkmap::dangling_edge",
            LinkMapError::DuplicateNode { .. } => "linkmap::duplicate_node",
            LinkMapError::DepthLimitExceeded { .. } => "linkmap::depth_limit",
            LinkMapError::CycleDetected { .. } => "linkmap::cycle",
            LinkMapError::UnreachableNode { .. } => "linkmap::unreachable_node",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            LinkMapError::Json(err) => format!(
                "expected {{ \"nodes\": [...], \"edges\": [...] }} (line {}, column {})",
                err.line(),
                err.column()
            ),
            LinkMapError::RootNotFound { .. } => {
                "pass the exact url of one node with --root-url".to_string()
            }
            LinkMapError::DepthLimitExceeded { .. } => {
                "raise `max_depth` in the [tree] or [layout] section of the config".to_string()
            }
            LinkMapError::CycleDetected { .. } => {
                "`linkmap layout-tree` cuts cycles before laying out".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
