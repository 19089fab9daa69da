//! Canonical registry of NRN tables, fields, and controlled vocabularies.
//!
//! Everything here is static data transcribed from the distribution
//! specification rather than computed: table layouts and domain label sets
//! do not change at runtime, so lookups are linear scans over small arrays
//! rather than hash maps built at startup.

pub mod domains;
pub mod tables;

/// Output language for external field/table names and domain labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Fr,
}

/// Storage type a field's values are interpreted as, independent of any
/// particular output format's column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Str,
    Int,
    Real,
}

/// Geometry carried by a table, or `None` for attribute-only tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    None,
    Point,
    LineString,
}

/// A single format's en/fr external name pair. Either side may be absent,
/// meaning the owning table/field is not carried in that format at all
/// (e.g. most attribute fields are dropped from KML, which only carries
/// geometry plus a handful of display fields).
#[derive(Debug, Clone, Copy)]
pub struct FmtNames {
    pub en: Option<&'static str>,
    pub fr: Option<&'static str>,
}

impl FmtNames {
    pub fn for_lang(&self, lang: Lang) -> Option<&'static str> {
        match lang {
            Lang::En => self.en,
            Lang::Fr => self.fr,
        }
    }
}

/// External names across all four emitted formats.
#[derive(Debug, Clone, Copy)]
pub struct ExtNames {
    pub gpkg: FmtNames,
    pub shp: FmtNames,
    pub gml: FmtNames,
    pub kml: FmtNames,
}

impl ExtNames {
    pub fn for_format(&self, format: crate::OutputFormat) -> &FmtNames {
        match format {
            OutputFormat::Gpkg => &self.gpkg,
            OutputFormat::Shp => &self.shp,
            OutputFormat::Gml => &self.gml,
            OutputFormat::Kml => &self.kml,
        }
    }
}

/// One of the four NRN distribution formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Gpkg,
    Shp,
    Gml,
    Kml,
}

/// A controlled vocabulary: label/code pairs for each output language.
/// Both arrays must have the same length and pairwise-corresponding codes.
#[derive(Debug)]
pub struct Domain {
    pub name: &'static str,
    pub en: &'static [(&'static str, i32)],
    pub fr: &'static [(&'static str, i32)],
}

impl Domain {
    fn table_for(&self, lang: Lang) -> &'static [(&'static str, i32)] {
        match lang {
            Lang::En => self.en,
            Lang::Fr => self.fr,
        }
    }

    /// Looks up the shared code for a label, case-insensitively, in the
    /// given language's table.
    pub fn code_for(&self, lang: Lang, label: &str) -> Option<i32> {
        let needle = label.to_lowercase();
        self.table_for(lang)
            .iter()
            .find(|(l, _)| l.to_lowercase() == needle)
            .map(|(_, c)| *c)
    }

    /// Looks up the label for a code in the requested output language.
    /// Codes are shared across languages, so this does not need to know
    /// which language the code was originally resolved from.
    pub fn label_for(&self, lang: Lang, code: i32) -> Option<&'static str> {
        self.table_for(lang)
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(l, _)| *l)
    }
}

/// Definition of a single table field: its semantic type, fixed width, and
/// per-format external names, plus an optional controlled vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub semantic: SemanticType,
    pub width: u32,
    pub ext: ExtNames,
    pub domain: Option<&'static Domain>,
}

/// Definition of one of the eight NRN tables.
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub geometry: GeometryKind,
    pub fields: &'static [FieldSpec],
    pub table_names: ExtNames,
}

impl TableSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// External table/layer name for a format+language, if the table is
    /// carried in that format at all (altnamlink has no SHP counterpart).
    pub fn layer_name(&self, format: OutputFormat, lang: Lang) -> Option<&'static str> {
        self.table_names.for_format(format).for_lang(lang)
    }
}

pub use tables::{table, ALL_TABLES};
