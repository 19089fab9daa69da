//! KML delivery writer: one file per placename partition (§4.7), each a
//! `Placemark` per road segment with attributes folded into
//! `ExtendedData` since KML has no native attribute table.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use nrn_core::stages::s7_project::PreparedTable;
use nrn_core::store::Geometry;
use nrn_core::value::{AttrValue, Scalar};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer as XmlWriter;

pub struct KmlWriter {
    path: PathBuf,
}

impl KmlWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn write_table(&mut self, table: &PreparedTable) -> Result<()> {
        let file = BufWriter::new(File::create(&self.path)?);
        let mut writer = XmlWriter::new_with_indent(file, b' ', 2);

        writer.write_event(Event::Start(BytesStart::new("kml")))?;
        writer.write_event(Event::Start(BytesStart::new("Document")))?;

        let num_rows = table.columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        for row in 0..num_rows {
            writer.write_event(Event::Start(BytesStart::new("Placemark")))?;

            writer.write_event(Event::Start(BytesStart::new("ExtendedData")))?;
            for (name, values) in &table.columns {
                if let Some(text) = cell_text(values.get(row)) {
                    let mut data = BytesStart::new("Data");
                    data.push_attribute(("name", name.as_str()));
                    writer.write_event(Event::Start(data))?;
                    writer.write_event(Event::Start(BytesStart::new("value")))?;
                    writer.write_event(Event::Text(BytesText::new(&text)))?;
                    writer.write_event(Event::End(BytesEnd::new("value")))?;
                    writer.write_event(Event::End(BytesEnd::new("Data")))?;
                }
            }
            writer.write_event(Event::End(BytesEnd::new("ExtendedData")))?;

            if let Some(Geometry::LineString(ls)) = table.geometry.as_ref().and_then(|g| g.get(row)).and_then(Option::as_ref) {
                let coords: Vec<String> = ls.points().map(|p| format!("{},{}", p.x(), p.y())).collect();
                writer.write_event(Event::Start(BytesStart::new("LineString")))?;
                writer.write_event(Event::Start(BytesStart::new("coordinates")))?;
                writer.write_event(Event::Text(BytesText::new(&coords.join(" "))))?;
                writer.write_event(Event::End(BytesEnd::new("coordinates")))?;
                writer.write_event(Event::End(BytesEnd::new("LineString")))?;
            }

            writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("Document")))?;
        writer.write_event(Event::End(BytesEnd::new("kml")))?;
        Ok(())
    }

    pub fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

fn cell_text(value: Option<&AttrValue>) -> Option<String> {
    match value {
        Some(AttrValue::Scalar(Scalar::Str(s))) if !s.is_empty() => Some(s.clone()),
        Some(AttrValue::Scalar(Scalar::Int(i))) => Some(i.to_string()),
        Some(AttrValue::Scalar(Scalar::Real(r))) => Some(r.to_string()),
        _ => None,
    }
}
