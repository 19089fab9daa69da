//! GML delivery writer: one file per layer inside a per-language
//! directory (§6 "Output naming"), `gml:featureMember` elements built
//! with `quick-xml`'s pull writer the way the other formats build their
//! records field-by-field.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use nrn_core::stages::s7_project::PreparedTable;
use nrn_core::store::Geometry;
use nrn_core::value::{AttrValue, Scalar};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer as XmlWriter;

pub struct GmlWriter {
    dir: PathBuf,
}

impl GmlWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write_table(&mut self, table: &PreparedTable) -> Result<()> {
        let path = self.dir.join(format!("{}.gml", table.layer_name));
        let file = BufWriter::new(File::create(&path)?);
        let mut writer = XmlWriter::new_with_indent(file, b' ', 2);

        writer.write_event(Event::Start(BytesStart::new("gml:FeatureCollection")))?;

        let num_rows = table.columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        for row in 0..num_rows {
            writer.write_event(Event::Start(BytesStart::new("gml:featureMember")))?;
            writer.write_event(Event::Start(BytesStart::new(table.layer_name.as_str())))?;

            for (name, values) in &table.columns {
                if let Some(text) = cell_text(values.get(row)) {
                    writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
                    writer.write_event(Event::Text(BytesText::new(&text)))?;
                    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
                }
            }
            if let Some(geom) = table.geometry.as_ref().and_then(|g| g.get(row)).and_then(Option::as_ref) {
                write_geometry(&mut writer, geom)?;
            }

            writer.write_event(Event::End(BytesEnd::new(table.layer_name.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("gml:featureMember")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("gml:FeatureCollection")))?;
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

fn write_geometry(writer: &mut XmlWriter<BufWriter<File>>, geom: &Geometry) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("gml:geometryProperty")))?;
    match geom {
        Geometry::Point(p) => {
            writer.write_event(Event::Start(BytesStart::new("gml:Point")))?;
            writer.write_event(Event::Start(BytesStart::new("gml:coordinates")))?;
            writer.write_event(Event::Text(BytesText::new(&format!("{},{}", p.x(), p.y()))))?;
            writer.write_event(Event::End(BytesEnd::new("gml:coordinates")))?;
            writer.write_event(Event::End(BytesEnd::new("gml:Point")))?;
        }
        Geometry::LineString(ls) => {
            let coords: Vec<String> = ls.points().map(|p| format!("{},{}", p.x(), p.y())).collect();
            writer.write_event(Event::Start(BytesStart::new("gml:LineString")))?;
            writer.write_event(Event::Start(BytesStart::new("gml:coordinates")))?;
            writer.write_event(Event::Text(BytesText::new(&coords.join(" "))))?;
            writer.write_event(Event::End(BytesEnd::new("gml:coordinates")))?;
            writer.write_event(Event::End(BytesEnd::new("gml:LineString")))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new("gml:geometryProperty")))?;
    Ok(())
}
