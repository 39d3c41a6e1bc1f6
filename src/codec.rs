//! # Codec registry
//!
//! Maps file extensions to parse/unparse function pairs. `write` and `load`
//! resolve the codec once, from the path, before touching the filesystem.
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `gdf` | GDF |
//! | `json` | JSON |
//! | `dot`, `gv` | DOT placeholder |
//! | `yml`, `yaml`, none | YAML fallback |

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::CodecOptions;
use crate::dot::GraphNamer;
use crate::graph::Graph;
use crate::{dot, gdf, json, yaml};
use crate::{Error, Result};

/// Serialization formats known to the standard registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Gdf,
    Json,
    Dot,
    Yaml,
}

/// State threaded through a write: codec options and the DOT name counter.
#[derive(Debug, Clone, Default)]
pub struct WriteContext {
    pub options: CodecOptions,
    pub namer: GraphNamer,
}

impl WriteContext {
    pub fn with_options(options: CodecOptions) -> Self {
        Self { options, namer: GraphNamer::default() }
    }
}

pub type ParseFn = fn(&str) -> Result<Graph>;
pub type UnparseFn = fn(&Graph, &mut WriteContext) -> Result<String>;

/// A parse/unparse pair for one format.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    pub format: Format,
    pub parse: ParseFn,
    pub unparse: UnparseFn,
}

impl Codec {
    pub fn for_format(format: Format) -> Self {
        let (parse, unparse): (ParseFn, UnparseFn) = match format {
            Format::Gdf => (gdf::parse, |g, ctx| Ok(gdf::unparse(g, &ctx.options))),
            Format::Json => (json::parse, |g, _| json::unparse(g)),
            Format::Dot => (dot::parse, |g, ctx| Ok(dot::unparse(g, &mut ctx.namer))),
            Format::Yaml => (yaml::parse, |g, _| yaml::unparse(g)),
        };
        Self { format, parse, unparse }
    }
}

/// Extension → codec table.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    by_extension: HashMap<String, Codec>,
    fallback: Option<Codec>,
}

impl Default for CodecRegistry {
    /// Every built-in format, with YAML for extension-less paths.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("gdf", Codec::for_format(Format::Gdf));
        registry.register("json", Codec::for_format(Format::Json));
        registry.register("dot", Codec::for_format(Format::Dot));
        registry.register("gv", Codec::for_format(Format::Dot));
        registry.register("yml", Codec::for_format(Format::Yaml));
        registry.register("yaml", Codec::for_format(Format::Yaml));
        registry.fallback = Some(Codec::for_format(Format::Yaml));
        registry
    }
}

impl CodecRegistry {
    /// A registry with no codec and no fallback.
    pub fn empty() -> Self {
        Self { by_extension: HashMap::new(), fallback: None }
    }

    /// Register `codec` for `extension` (case-insensitive, without the dot).
    pub fn register(&mut self, extension: &str, codec: Codec) -> Option<Codec> {
        self.by_extension.insert(extension.to_ascii_lowercase(), codec)
    }

    /// Codec used for paths without an extension.
    pub fn set_fallback(&mut self, codec: Option<Codec>) {
        self.fallback = codec;
    }

    /// Codec for `path`, chosen from its extension.
    pub fn resolve(&self, path: &Path) -> Result<Codec> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self
                .by_extension
                .get(&ext.to_ascii_lowercase())
                .copied()
                .ok_or_else(|| Error::NoHandler(ext.to_owned())),
            None => self
                .fallback
                .ok_or_else(|| Error::NoHandler(String::new())),
        }
    }

    /// Serialize `graph` in memory, then write the whole buffer to `path`.
    ///
    /// Fails with [`Error::NoHandler`] before creating any file when the
    /// extension has no codec.
    pub fn write(&self, graph: &Graph, path: impl AsRef<Path>, ctx: &mut WriteContext) -> Result<()> {
        let path = path.as_ref();
        let codec = self.resolve(path)?;
        let text = (codec.unparse)(graph, ctx)?;
        info!(path = %path.display(), format = ?codec.format, bytes = text.len(), "writing graph");
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Read the whole file at `path`, then parse it with the matching codec.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Graph> {
        let path = path.as_ref();
        let codec = self.resolve(path)?;
        debug!(path = %path.display(), format = ?codec.format, "loading graph");
        let content = std::fs::read_to_string(path)?;
        (codec.parse)(&content)
    }
}

impl Graph {
    /// Write this graph to `path` in the format its extension names.
    pub fn write(&self, path: impl AsRef<Path>, ctx: &mut WriteContext) -> Result<()> {
        CodecRegistry::default().write(self, path, ctx)
    }

    /// Load a graph from `path` in the format its extension names.
    pub fn load(path: impl AsRef<Path>) -> Result<Graph> {
        CodecRegistry::default().load(path)
    }
}
