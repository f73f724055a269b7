//! Layered configuration resolution engine for infrastructure-as-code
//! components.
//!
//! Every component in a catalog translates a declarative configuration
//! object into cloud resource definitions, hardened per compliance tier.
//! This crate is the one piece of real design logic those components share:
//! a deterministic pipeline that merges five ranked configuration layers
//! (hardcoded fallbacks, compliance-framework defaults, environment-scoped
//! defaults, manifest overrides, governance policy overrides), validates the
//! merged tree against the component's schema, and normalizes the result
//! into a [`ResolvedConfiguration`] that resource-wiring code consumes
//! without further guarding.
//!
//! Data flows strictly one way: schema + layers → merge → validate →
//! normalize → resolved configuration. Merging never fails; validation
//! collects every violation in one pass and resolution is all-or-nothing;
//! normalization is idempotent. [`resolve`] is a pure function of its
//! inputs, so any number of component instances may resolve concurrently.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::{Value, json};
//! use strata_config::{
//!     ComplianceFramework, ComponentModel, ResolutionContext, SchemaNode,
//! };
//!
//! struct Cluster {
//!     schema: SchemaNode,
//! }
//!
//! impl ComponentModel for Cluster {
//!     fn name(&self) -> &str {
//!         "cluster"
//!     }
//!
//!     fn schema(&self) -> &SchemaNode {
//!         &self.schema
//!     }
//!
//!     fn compliance_defaults(&self, framework: ComplianceFramework) -> Value {
//!         match framework {
//!             ComplianceFramework::Commercial => json!({}),
//!             ComplianceFramework::FedrampModerate | ComplianceFramework::FedrampHigh => {
//!                 json!({"capacity": {"min": 2, "max": 10}})
//!             }
//!         }
//!     }
//! }
//!
//! let cluster = Cluster {
//!     schema: SchemaNode::object([(
//!         "capacity",
//!         SchemaNode::object([
//!             ("min", SchemaNode::number().min(1u64).required()),
//!             ("max", SchemaNode::number().min(1u64).required()),
//!         ])
//!         .required(),
//!     )]),
//! };
//! let context = ResolutionContext::new(ComplianceFramework::FedrampHigh, "search", "api");
//! let resolved = cluster.resolve(&context, json!({"capacity": {"min": 1}}))?;
//!
//! // The manifest's min wins by rank; max falls back to the compliance
//! // default because the manifest did not set it.
//! assert_eq!(
//!     resolved.tree(),
//!     &json!({"capacity": {"min": 1, "max": 10}})
//! );
//! # Ok::<_, strata_config::StrataError>(())
//! ```

mod compliance;
mod context;
mod error;
mod layer;
mod merge;
mod normalize;
mod path;
mod resolver;
mod schema;
mod validate;

pub use compliance::ComplianceFramework;
pub use context::ResolutionContext;
pub use error::{StrataError, StrataResult, Violation, ViolationKind, Violations};
pub use layer::{ConfigLayer, LayerProvenance, LayerStack};
pub use merge::{merge_layers, merge_value};
pub use normalize::normalize;
pub use path::{FieldPath, PathSegment};
pub use resolver::{ComponentModel, ResolvedConfiguration, resolve};
pub use schema::{FieldKind, RangePolicy, SchemaNode, TextNormalization, ValueKind};
pub use validate::validate;
