//! Output file naming, left unspecified beyond "GPKG bundles both
//! languages in one file, SHP and GML are per-layer": `NRN` becomes
//! `RRN` for French, and KML's combined `nrn_rrn` stem is used
//! regardless of language since a single KML chunk is a web-map
//! artifact shared by both locales' placename labels.

use nrn_schema::Lang;

pub fn brand(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "NRN",
        Lang::Fr => "RRN",
    }
}

pub fn gpkg_filename(source: &str, major: u32, minor: u32) -> String {
    format!("NRN_{source}_{major}_{minor}_GPKG.gpkg")
}

pub fn shp_filename(source: &str, major: u32, minor: u32, lang: Lang, layer_name: &str) -> String {
    format!(
        "{}_{source}_{major}_{minor}_{}_{}.shp",
        brand(lang),
        layer_name.to_uppercase(),
        lang_suffix(lang)
    )
}

pub fn gml_dirname(source: &str, major: u32, minor: u32, lang: Lang) -> String {
    format!("{}_{source}_{major}_{minor}_GML_{}", brand(lang), lang_suffix(lang))
}

pub fn kml_filename(placename_stem: &str) -> String {
    format!("nrn_rrn_{placename_stem}.kml")
}

fn lang_suffix(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "en",
        Lang::Fr => "fr",
    }
}
