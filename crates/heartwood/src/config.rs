//! Rendering and processing configuration

/// Configuration for DOT output.
///
/// Controls the graph header; node and edge lines are fixed by the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotConfig {
    /// Name written after `digraph`
    pub graph_name: String,

    /// Font used for node and edge labels
    pub font_name: String,

    /// Node label font size
    pub node_font_size: u32,

    /// Edge label font size
    pub edge_font_size: u32,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: "ast".to_string(),
            font_name: "Helvetica".to_string(),
            node_font_size: 11,
            edge_font_size: 10,
        }
    }
}

impl DotConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom graph name.
    pub fn with_graph_name(name: impl Into<String>) -> Self {
        Self {
            graph_name: name.into(),
            ..Default::default()
        }
    }
}

/// Configuration for a bottom-up processor run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Emit a `trace` event for every visited node
    pub trace: bool,
}

impl ProcessConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that traces every visit.
    pub fn traced() -> Self {
        Self { trace: true }
    }
}
