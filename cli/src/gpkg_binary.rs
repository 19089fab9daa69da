//! GeoPackageBinary header framing (OGC GeoPackage §2.1.3) around the
//! core's minimal WKB encoding, used by both the canonical store
//! round-trip (`storefile`) and the generic source reader
//! (`readers::gpkg`). Only the no-envelope, non-empty, little-endian
//! case is produced or consumed; that covers every geometry this tool
//! ever writes or reads back from its own checkpoints.

use nrn_core::store::Geometry;

const MAGIC: [u8; 2] = [0x47, 0x50];

pub fn encode(geom: &Geometry, srs_id: i32) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC);
    out.push(0); // version 0
    out.push(0x01); // little-endian, no envelope, not empty
    out.extend_from_slice(&srs_id.to_le_bytes());
    out.extend_from_slice(&geom.to_wkb());
    out
}

/// Decodes a GeoPackageBinary blob back into raw WKB type+coordinates.
/// Returns `None` for anything other than a 2D Point or LineString, or a
/// header this tool didn't itself produce (big-endian, envelope present).
pub fn decode_wkb_body(blob: &[u8]) -> Option<&[u8]> {
    if blob.len() < 8 || blob[0..2] != MAGIC {
        return None;
    }
    let flags = blob[3];
    if flags & 0x01 == 0 {
        return None; // big-endian header, not produced by this tool
    }
    let envelope_indicator = (flags >> 1) & 0x07;
    let envelope_len = match envelope_indicator {
        0 => 0,
        1 => 32,
        2 | 3 => 48,
        4 => 64,
        _ => return None,
    };
    let body_start = 8 + envelope_len;
    blob.get(body_start..)
}

/// Decodes the little-endian WKB body this tool's own `wkb.rs` writes:
/// byteorder byte, u32 type code, then raw doubles.
pub fn decode_point_or_linestring(wkb: &[u8]) -> Option<Vec<(f64, f64)>> {
    if wkb.is_empty() || wkb[0] != 1 {
        return None;
    }
    let type_code = u32::from_le_bytes(wkb[1..5].try_into().ok()?);
    match type_code {
        1 => {
            let x = f64::from_le_bytes(wkb[5..13].try_into().ok()?);
            let y = f64::from_le_bytes(wkb[13..21].try_into().ok()?);
            Some(vec![(x, y)])
        }
        2 => {
            let count = u32::from_le_bytes(wkb[5..9].try_into().ok()?) as usize;
            let mut coords = Vec::with_capacity(count);
            let mut offset = 9;
            for _ in 0..count {
                let x = f64::from_le_bytes(wkb[offset..offset + 8].try_into().ok()?);
                let y = f64::from_le_bytes(wkb[offset + 8..offset + 16].try_into().ok()?);
                coords.push((x, y));
                offset += 16;
            }
            Some(coords)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Point};

    #[test]
    fn point_round_trips_through_the_gpkg_header() {
        let geom = Geometry::Point(Point::new(-75.5, 45.25));
        let blob = encode(&geom, 4617);
        let wkb = decode_wkb_body(&blob).unwrap();
        let coords = decode_point_or_linestring(wkb).unwrap();
        assert_eq!(coords, vec![(-75.5, 45.25)]);
    }

    #[test]
    fn linestring_round_trips_through_the_gpkg_header() {
        let geom = Geometry::LineString(LineString::from(vec![(-75.0, 45.0), (-75.1, 45.1)]));
        let blob = encode(&geom, 4617);
        let wkb = decode_wkb_body(&blob).unwrap();
        let coords = decode_point_or_linestring(wkb).unwrap();
        assert_eq!(coords, vec![(-75.0, 45.0), (-75.1, 45.1)]);
    }
}
