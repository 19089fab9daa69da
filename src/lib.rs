#![doc = "Transformation and topology pipeline for the National Road Network distribution product."]

pub mod config;
pub mod conform;
pub mod error;
pub mod ids;
pub mod pipeline;
pub mod reader;
pub mod reproject;
pub mod stages;
pub mod store;
pub mod value;
pub mod wkb;
pub mod writer;

#[doc(inline)]
pub use config::{ConformDoc, DataConfig, MappingEntry, SourceConfig};

#[doc(inline)]
pub use error::{ConformError, SchemaError};

#[doc(inline)]
pub use pipeline::{Pipeline, PipelineInputs};

#[doc(inline)]
pub use store::{Geometry, Table, TableStore};

#[doc(inline)]
pub use value::{AttrValue, Scalar};

#[doc(inline)]
pub use writer::LayerWriter;
