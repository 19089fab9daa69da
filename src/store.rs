//! The in-memory working table: a column-major struct-of-vectors with a
//! side UUID index and, for spatial layers, a parallel geometry vector.
//! Row objects are never the primary representation — every stage walks
//! columns, not rows, except where row order itself is the payload
//! (`roadsegid` renumbering, KML chunking).

use std::collections::HashMap;

use geo::{LineString, Point};

use crate::value::AttrValue;

#[derive(Clone, Debug)]
pub enum Geometry {
    Point(Point<f64>),
    LineString(LineString<f64>),
}

impl Geometry {
    pub fn as_point(&self) -> Option<&Point<f64>> {
        match self {
            Geometry::Point(p) => Some(p),
            Geometry::LineString(_) => None,
        }
    }

    pub fn as_linestring(&self) -> Option<&LineString<f64>> {
        match self {
            Geometry::LineString(ls) => Some(ls),
            Geometry::Point(_) => None,
        }
    }

    pub fn to_wkb(&self) -> Vec<u8> {
        match self {
            Geometry::Point(p) => crate::wkb::point_to_wkb(p),
            Geometry::LineString(ls) => crate::wkb::linestring_to_wkb(ls),
        }
    }

    /// Rounds every coordinate to 7 decimal places (§3 invariant 6).
    pub fn round7(&self) -> Geometry {
        let round = |v: f64| (v * 1e7).round() / 1e7;
        match self {
            Geometry::Point(p) => Geometry::Point(Point::new(round(p.x()), round(p.y()))),
            Geometry::LineString(ls) => Geometry::LineString(LineString::from(
                ls.0.iter()
                    .map(|c| geo::Coord {
                        x: round(c.x),
                        y: round(c.y),
                    })
                    .collect::<Vec<_>>(),
            )),
        }
    }
}

/// One of the eight canonical layers, in column-major form.
#[derive(Clone, Debug)]
pub struct Table {
    pub name: &'static str,
    pub uuid: Vec<String>,
    pub columns: HashMap<String, Vec<AttrValue>>,
    /// `None` for the three attribute-only tables.
    pub geometry: Option<Vec<Option<Geometry>>>,
}

impl Table {
    pub fn new(schema: &'static nrn_schema::TableSchema) -> Self {
        let mut columns = HashMap::new();
        for field in schema.fields {
            columns.insert(field.name.to_string(), Vec::new());
        }
        let geometry = match schema.geometry {
            nrn_schema::GeometryKind::None => None,
            _ => Some(Vec::new()),
        };
        Table {
            name: schema.name,
            uuid: Vec::new(),
            columns,
            geometry,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.uuid.len()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&[AttrValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Vec<AttrValue>> {
        self.columns.get_mut(name)
    }

    /// Appends a new row with every declared column defaulted to
    /// `AttrValue::Scalar(Scalar::Null)` and no geometry, returning its
    /// row index. Callers fill in columns (and geometry) afterward.
    pub fn push_default_row(&mut self, uuid: String) -> usize {
        let idx = self.uuid.len();
        self.uuid.push(uuid);
        for col in self.columns.values_mut() {
            col.push(AttrValue::default());
        }
        if let Some(geom) = self.geometry.as_mut() {
            geom.push(None);
        }
        idx
    }

    /// Duplicates row `src` onto the end of the table verbatim (geometry
    /// included), returning the new row's index. Used by S3's strplaname
    /// split, which then overwrites the packed columns and identifiers on
    /// each of the two resulting rows.
    pub fn duplicate_row(&mut self, src: usize, new_uuid: String) -> usize {
        let idx = self.uuid.len();
        self.uuid.push(new_uuid);
        for col in self.columns.values_mut() {
            let v = col[src].clone();
            col.push(v);
        }
        if let Some(geom) = self.geometry.as_mut() {
            let v = geom[src].clone();
            geom.push(v);
        }
        idx
    }

    /// Removes rows at the given (sorted, deduplicated) indices, preserving
    /// the relative order of survivors. Used by S3 de-duplication.
    pub fn remove_rows(&mut self, mut indices: Vec<usize>) {
        indices.sort_unstable();
        indices.dedup();
        let keep = |i: &usize| indices.binary_search(i).is_err();

        let mut kept = Vec::with_capacity(self.uuid.len());
        for (i, u) in self.uuid.iter().enumerate() {
            if keep(&i) {
                kept.push(u.clone());
            }
        }
        self.uuid = kept;

        for col in self.columns.values_mut() {
            let mut kept = Vec::with_capacity(col.len());
            for (i, v) in col.iter().enumerate() {
                if keep(&i) {
                    kept.push(v.clone());
                }
            }
            *col = kept;
        }

        if let Some(geom) = self.geometry.as_mut() {
            let mut kept = Vec::with_capacity(geom.len());
            for (i, v) in geom.iter().enumerate() {
                if keep(&i) {
                    kept.push(v.clone());
                }
            }
            *geom = kept;
        }
    }

    pub fn nid_of(&self, row: usize) -> Option<&str> {
        self.column("nid")
            .and_then(|c| c.get(row))
            .and_then(|v| v.scalar())
            .and_then(|s| s.as_str())
    }

    pub fn row_index_of_nid(&self, nid: &str) -> Option<usize> {
        self.column("nid")?.iter().position(|v| {
            v.scalar()
                .and_then(|s| s.as_str())
                .map(|s| s == nid)
                .unwrap_or(false)
        })
    }
}

/// All eight layers, keyed by canonical table name.
#[derive(Clone, Debug)]
pub struct TableStore {
    pub tables: HashMap<&'static str, Table>,
}

impl TableStore {
    pub fn empty() -> Self {
        let mut tables = HashMap::new();
        for schema in nrn_schema::ALL_TABLES {
            tables.insert(schema.name, Table::new(schema));
        }
        TableStore { tables }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::empty()
    }
}
