//! Canonical table/field registry, transcribed from the NRN schema definition.

use crate::{FieldSpec, SemanticType, TableSchema, GeometryKind, ExtNames, FmtNames};

pub static ADDRANGE_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "metacover", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, shp: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, gml: FmtNames { en: Some("metadataCoverage"), fr: Some("couvertureMetadonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::METACOVER) },
    FieldSpec { name: "accuracy", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, shp: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, gml: FmtNames { en: Some("planimetricAccuracy"), fr: Some("precisionPlanimetrique") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "provider", semantic: SemanticType::Str, width: 24, ext: ExtNames { gpkg: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, shp: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, gml: FmtNames { en: Some("provider"), fr: Some("fournisseur") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PROVIDER) },
    FieldSpec { name: "l_altnamnid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("L_ALTNANID"), fr: Some("IDNOMNOF_G") }, shp: FmtNames { en: Some("L_ALTNANID"), fr: Some("IDNOMNOF_G") }, gml: FmtNames { en: Some("left_AlternateStreetNameNid"), fr: Some("idnNomRueNonOfficiel_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_altnamnid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("R_ALTNANID"), fr: Some("IDNOMNOF_D") }, shp: FmtNames { en: Some("R_ALTNANID"), fr: Some("IDNOMNOF_D") }, gml: FmtNames { en: Some("right_AlternateStreetNameNid"), fr: Some("idnNomRueNonOfficiel_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_digdirfg", semantic: SemanticType::Str, width: 18, ext: ExtNames { gpkg: FmtNames { en: Some("L_DIGDIRFG"), fr: Some("SENSNUM_G") }, shp: FmtNames { en: Some("L_DIGDIRFG"), fr: Some("SENSNUM_G") }, gml: FmtNames { en: Some("left_DigitizingDirectionFlag"), fr: Some("sensNumerisation_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DIGDIRFG) },
    FieldSpec { name: "r_digdirfg", semantic: SemanticType::Str, width: 18, ext: ExtNames { gpkg: FmtNames { en: Some("R_DIGDIRFG"), fr: Some("SENSNUM_D") }, shp: FmtNames { en: Some("R_DIGDIRFG"), fr: Some("SENSNUM_D") }, gml: FmtNames { en: Some("right_DigitizingDirectionFlag"), fr: Some("sensNumerisation_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DIGDIRFG) },
    FieldSpec { name: "l_hnumf", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUMF"), fr: Some("NUMP_G") }, shp: FmtNames { en: Some("L_HNUMF"), fr: Some("NUMP_G") }, gml: FmtNames { en: Some("left_FirstHouseNumber"), fr: Some("numPremiereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_hnumf", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUMF"), fr: Some("NUMP_D") }, shp: FmtNames { en: Some("R_HNUMF"), fr: Some("NUMP_D") }, gml: FmtNames { en: Some("right_FirstHouseNumber"), fr: Some("numPremiereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_hnumsuff", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUMSUFF"), fr: Some("SUFNUMP_G") }, shp: FmtNames { en: Some("L_HNUMSUFF"), fr: Some("SUFNUMP_G") }, gml: FmtNames { en: Some("left_FirstHouseNumberSuffix"), fr: Some("suffixNumPremiereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_hnumsuff", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUMSUFF"), fr: Some("SUFNUMP_D") }, shp: FmtNames { en: Some("R_HNUMSUFF"), fr: Some("SUFNUMP_D") }, gml: FmtNames { en: Some("right_FirstHouseNumberSuffix"), fr: Some("suffixNumPremiereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_hnumtypf", semantic: SemanticType::Str, width: 16, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUMTYPF"), fr: Some("TYPENUMP_G") }, shp: FmtNames { en: Some("L_HNUMTYPF"), fr: Some("TYPENUMP_G") }, gml: FmtNames { en: Some("left_FirstHouseNumberType"), fr: Some("typeNumPremiereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::HNUMTYPE) },
    FieldSpec { name: "r_hnumtypf", semantic: SemanticType::Str, width: 16, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUMTYPF"), fr: Some("TYPENUMP_D") }, shp: FmtNames { en: Some("R_HNUMTYPF"), fr: Some("TYPENUMP_D") }, gml: FmtNames { en: Some("right_FirstHouseNumberType"), fr: Some("typeNumPremiereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::HNUMTYPE) },
    FieldSpec { name: "l_hnumstr", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUMSTR"), fr: Some("STRUNUM_G") }, shp: FmtNames { en: Some("L_HNUMSTR"), fr: Some("STRUNUM_G") }, gml: FmtNames { en: Some("left_HouseNumberStructure"), fr: Some("structureNumMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::HNUMSTR) },
    FieldSpec { name: "r_hnumstr", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUMSTR"), fr: Some("STRUNUM_D") }, shp: FmtNames { en: Some("R_HNUMSTR"), fr: Some("STRUNUM_D") }, gml: FmtNames { en: Some("right_HouseNumberStructure"), fr: Some("structureNumMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::HNUMSTR) },
    FieldSpec { name: "l_hnuml", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUML"), fr: Some("NUMD_G") }, shp: FmtNames { en: Some("L_HNUML"), fr: Some("NUMD_G") }, gml: FmtNames { en: Some("left_LastHouseNumber"), fr: Some("numDerniereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_hnuml", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUML"), fr: Some("NUMD_D") }, shp: FmtNames { en: Some("R_HNUML"), fr: Some("NUMD_D") }, gml: FmtNames { en: Some("right_LastHouseNumber"), fr: Some("numDerniereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_hnumsufl", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUMSUFL"), fr: Some("SUFNUMD_G") }, shp: FmtNames { en: Some("L_HNUMSUFL"), fr: Some("SUFNUMD_G") }, gml: FmtNames { en: Some("left_LastHouseNumberSuffix"), fr: Some("suffixNumDerniereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_hnumsufl", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUMSUFL"), fr: Some("SUFNUMD_D") }, shp: FmtNames { en: Some("R_HNUMSUFL"), fr: Some("SUFNUMD_D") }, gml: FmtNames { en: Some("right_LastHouseNumberSuffix"), fr: Some("suffixNumDerniereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_hnumtypl", semantic: SemanticType::Str, width: 16, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUMTYPL"), fr: Some("TYPENUMD_G") }, shp: FmtNames { en: Some("L_HNUMTYPL"), fr: Some("TYPENUMD_G") }, gml: FmtNames { en: Some("left_LastHouseNumberType"), fr: Some("typeNumDerniereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::HNUMTYPE) },
    FieldSpec { name: "r_hnumtypl", semantic: SemanticType::Str, width: 16, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUMTYPL"), fr: Some("TYPENUMD_D") }, shp: FmtNames { en: Some("R_HNUMTYPL"), fr: Some("TYPENUMD_D") }, gml: FmtNames { en: Some("right_LastHouseNumberType"), fr: Some("typeNumDerniereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::HNUMTYPE) },
    FieldSpec { name: "l_offnanid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("L_OFFNANID"), fr: Some("IDNOMOFF_G") }, shp: FmtNames { en: Some("L_OFFNANID"), fr: Some("IDNOMOFF_G") }, gml: FmtNames { en: Some("left_OfficialStreetNameNid"), fr: Some("idnNomRueOfficiel_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_offnanid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("R_OFFNANID"), fr: Some("IDNOMOFF_D") }, shp: FmtNames { en: Some("R_OFFNANID"), fr: Some("IDNOMOFF_D") }, gml: FmtNames { en: Some("right_OfficialStreetNameNid"), fr: Some("idnNomRueOfficiel_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_rfsysind", semantic: SemanticType::Str, width: 18, ext: ExtNames { gpkg: FmtNames { en: Some("L_RFSYSIND"), fr: Some("SYSREF_G") }, shp: FmtNames { en: Some("L_RFSYSIND"), fr: Some("SYSREF_G") }, gml: FmtNames { en: Some("left_ReferenceSystemIndicator"), fr: Some("indicSystemeReference_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::RFSYSIND) },
    FieldSpec { name: "r_rfsysind", semantic: SemanticType::Str, width: 18, ext: ExtNames { gpkg: FmtNames { en: Some("R_RFSYSIND"), fr: Some("SYSREF_D") }, shp: FmtNames { en: Some("R_RFSYSIND"), fr: Some("SYSREF_D") }, gml: FmtNames { en: Some("right_ReferenceSystemIndicator"), fr: Some("indicSystemeReference_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::RFSYSIND) },
];
pub static ADDRANGE: TableSchema = TableSchema { name: "addrange", geometry: GeometryKind::None, fields: ADDRANGE_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("ADDRANGE"), fr: Some("INTERVADR") }, shp: FmtNames { en: Some("ADDRANGE"), fr: Some("INTERVADR") }, gml: FmtNames { en: Some("AddressRange"), fr: Some("IntervalleAddresse") }, kml: FmtNames { en: None, fr: None } } };

pub static ALTNAMLINK_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "strnamenid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("STRNAMENID"), fr: Some("IDNOMRUE") }, shp: FmtNames { en: Some("STRNAMENID"), fr: Some("IDNOMRUE") }, gml: FmtNames { en: Some("streetNameNid"), fr: Some("idnNomRue") }, kml: FmtNames { en: None, fr: None } }, domain: None },
];
pub static ALTNAMLINK: TableSchema = TableSchema { name: "altnamlink", geometry: GeometryKind::None, fields: ALTNAMLINK_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("ALTNAMELINK"), fr: Some("LIENNOFF") }, shp: FmtNames { en: None, fr: None }, gml: FmtNames { en: Some("AlternateNameLink"), fr: Some("LieuNomNonOfficiel") }, kml: FmtNames { en: None, fr: None } } };

pub static BLKPASSAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "metacover", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, shp: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, gml: FmtNames { en: Some("metadataCoverage"), fr: Some("couvertureMetadonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::METACOVER) },
    FieldSpec { name: "accuracy", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, shp: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, gml: FmtNames { en: Some("planimetricAccuracy"), fr: Some("precisionPlanimetrique") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "provider", semantic: SemanticType::Str, width: 24, ext: ExtNames { gpkg: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, shp: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, gml: FmtNames { en: Some("provider"), fr: Some("fournisseur") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PROVIDER) },
    FieldSpec { name: "blkpassty", semantic: SemanticType::Str, width: 17, ext: ExtNames { gpkg: FmtNames { en: Some("BLKPASSTY"), fr: Some("TYPEOBSTRU") }, shp: FmtNames { en: Some("BLKPASSTY"), fr: Some("TYPEOBSTRU") }, gml: FmtNames { en: Some("blockedPassageType"), fr: Some("typePassageObstrue") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::BLKPASSTY) },
    FieldSpec { name: "roadnid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("ROADNID"), fr: Some("IDNELEMRTE") }, shp: FmtNames { en: Some("ROADNID"), fr: Some("IDNELEMRTE") }, gml: FmtNames { en: Some("roadElementNid"), fr: Some("idnElementRoutier") }, kml: FmtNames { en: None, fr: None } }, domain: None },
];
pub static BLKPASSAGE: TableSchema = TableSchema { name: "blkpassage", geometry: GeometryKind::Point, fields: BLKPASSAGE_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("BLKPASSAGE"), fr: Some("PASSAGEOBS") }, shp: FmtNames { en: Some("BLKPASSAGE"), fr: Some("PASSAGEOBS") }, gml: FmtNames { en: Some("BlockedPassage"), fr: Some("PassageObstrue") }, kml: FmtNames { en: None, fr: None } } };

pub static FERRYSEG_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "metacover", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, shp: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, gml: FmtNames { en: Some("metadataCoverage"), fr: Some("couvertureMetadonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::METACOVER) },
    FieldSpec { name: "accuracy", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, shp: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, gml: FmtNames { en: Some("planimetricAccuracy"), fr: Some("precisionPlanimetrique") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "provider", semantic: SemanticType::Str, width: 24, ext: ExtNames { gpkg: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, shp: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, gml: FmtNames { en: Some("provider"), fr: Some("fournisseur") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PROVIDER) },
    FieldSpec { name: "closing", semantic: SemanticType::Str, width: 7, ext: ExtNames { gpkg: FmtNames { en: Some("CLOSING"), fr: Some("FERMETURE") }, shp: FmtNames { en: Some("CLOSING"), fr: Some("FERMETURE") }, gml: FmtNames { en: Some("closingPeriod"), fr: Some("periodeFermeture") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::CLOSING) },
    FieldSpec { name: "ferrysegid", semantic: SemanticType::Int, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("FERRYSEGID"), fr: Some("IDSEGMLTR") }, shp: FmtNames { en: Some("FERRYSEGID"), fr: Some("IDSEGMLTR") }, gml: FmtNames { en: Some("ferrySegmentId"), fr: Some("idSegmentLiaisonTransbordeur") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "roadclass", semantic: SemanticType::Str, width: 21, ext: ExtNames { gpkg: FmtNames { en: Some("ROADCLASS"), fr: Some("CLASSROUTE") }, shp: FmtNames { en: Some("ROADCLASS"), fr: Some("CLASSROUTE") }, gml: FmtNames { en: Some("functionalRoadClass"), fr: Some("classRoutiereFonctionnelle") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ROADCLASS) },
    FieldSpec { name: "rtename1en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME1EN"), fr: Some("NOMRTE1AN") }, shp: FmtNames { en: Some("RTENAME1EN"), fr: Some("NOMRTE1AN") }, gml: FmtNames { en: Some("routeNameEnglish1"), fr: Some("nomRouteAnglais1") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename2en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME2EN"), fr: Some("NOMRTE2AN") }, shp: FmtNames { en: Some("RTENAME2EN"), fr: Some("NOMRTE2AN") }, gml: FmtNames { en: Some("routeNameEnglish2"), fr: Some("nomRouteAnglais2") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename3en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME3EN"), fr: Some("NOMRTE3AN") }, shp: FmtNames { en: Some("RTENAME3EN"), fr: Some("NOMRTE3AN") }, gml: FmtNames { en: Some("routeNameEnglish3"), fr: Some("nomRouteAnglais3") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename4en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME4EN"), fr: Some("NOMRTE4AN") }, shp: FmtNames { en: Some("RTENAME4EN"), fr: Some("NOMRTE4AN") }, gml: FmtNames { en: Some("routeNameEnglish4"), fr: Some("nomRouteAnglais4") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename1fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME1FR"), fr: Some("NOMRTE1FR") }, shp: FmtNames { en: Some("RTENAME1FR"), fr: Some("NOMRTE1FR") }, gml: FmtNames { en: Some("routeNameFrench1"), fr: Some("nomRouteFrançais1") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename2fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME2FR"), fr: Some("NOMRTE2FR") }, shp: FmtNames { en: Some("RTENAME2FR"), fr: Some("NOMRTE2FR") }, gml: FmtNames { en: Some("routeNameFrench2"), fr: Some("nomRouteFrançais2") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename3fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME3FR"), fr: Some("NOMRTE3FR") }, shp: FmtNames { en: Some("RTENAME3FR"), fr: Some("NOMRTE3FR") }, gml: FmtNames { en: Some("routeNameFrench3"), fr: Some("nomRouteFrançais3") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename4fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME4FR"), fr: Some("NOMRTE4FR") }, shp: FmtNames { en: Some("RTENAME4FR"), fr: Some("NOMRTE4FR") }, gml: FmtNames { en: Some("routeNameFrench4"), fr: Some("nomRouteFrançais4") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber1", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER1"), fr: Some("NUMROUTE1") }, shp: FmtNames { en: Some("RTNUMBER1"), fr: Some("NUMROUTE1") }, gml: FmtNames { en: Some("routeNumber1"), fr: Some("numeroRoute1") }, kml: FmtNames { en: Some("routeNumber1"), fr: Some("numeroRoute1") } }, domain: None },
    FieldSpec { name: "rtnumber2", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER2"), fr: Some("NUMROUTE2") }, shp: FmtNames { en: Some("RTNUMBER2"), fr: Some("NUMROUTE2") }, gml: FmtNames { en: Some("routeNumber2"), fr: Some("numeroRoute2") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber3", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER3"), fr: Some("NUMROUTE3") }, shp: FmtNames { en: Some("RTNUMBER3"), fr: Some("NUMROUTE3") }, gml: FmtNames { en: Some("routeNumber3"), fr: Some("numeroRoute3") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber4", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER4"), fr: Some("NUMROUTE4") }, shp: FmtNames { en: Some("RTNUMBER4"), fr: Some("NUMROUTE4") }, gml: FmtNames { en: Some("routeNumber4"), fr: Some("numeroRoute4") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber5", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER5"), fr: Some("NUMROUTE5") }, shp: FmtNames { en: Some("RTNUMBER5"), fr: Some("NUMROUTE5") }, gml: FmtNames { en: Some("routeNumber5"), fr: Some("numeroRoute5") }, kml: FmtNames { en: None, fr: None } }, domain: None },
];
pub static FERRYSEG: TableSchema = TableSchema { name: "ferryseg", geometry: GeometryKind::LineString, fields: FERRYSEG_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("FERRYSEG"), fr: Some("SLIAISONTR") }, shp: FmtNames { en: Some("FERRYSEG"), fr: Some("SLIAISONTR") }, gml: FmtNames { en: Some("FerrySegment"), fr: Some("SegmentLiaisonTransbordeur") }, kml: FmtNames { en: None, fr: None } } };

pub static JUNCTION_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "metacover", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, shp: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, gml: FmtNames { en: Some("metadataCoverage"), fr: Some("couvertureMetadonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::METACOVER) },
    FieldSpec { name: "accuracy", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, shp: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, gml: FmtNames { en: Some("planimetricAccuracy"), fr: Some("precisionPlanimetrique") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "provider", semantic: SemanticType::Str, width: 24, ext: ExtNames { gpkg: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, shp: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, gml: FmtNames { en: Some("provider"), fr: Some("fournisseur") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PROVIDER) },
    FieldSpec { name: "exitnbr", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("EXITNBR"), fr: Some("NUMSORTIE") }, shp: FmtNames { en: Some("EXITNBR"), fr: Some("NUMSORTIE") }, gml: FmtNames { en: Some("exitNumber"), fr: Some("numeroSortie") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "junctype", semantic: SemanticType::Str, width: 12, ext: ExtNames { gpkg: FmtNames { en: Some("JUNCTYPE"), fr: Some("TYPEJONC") }, shp: FmtNames { en: Some("JUNCTYPE"), fr: Some("TYPEJONC") }, gml: FmtNames { en: Some("junctionType"), fr: Some("typeJonction") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::JUNCTYPE) },
];
pub static JUNCTION: TableSchema = TableSchema { name: "junction", geometry: GeometryKind::Point, fields: JUNCTION_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("JUNCTION"), fr: Some("JONCTION") }, shp: FmtNames { en: Some("JUNCTION"), fr: Some("JONCTION") }, gml: FmtNames { en: Some("Junction"), fr: Some("Jonction") }, kml: FmtNames { en: None, fr: None } } };

pub static ROADSEG_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "metacover", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, shp: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, gml: FmtNames { en: Some("metadataCoverage"), fr: Some("couvertureMetadonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::METACOVER) },
    FieldSpec { name: "accuracy", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, shp: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, gml: FmtNames { en: Some("planimetricAccuracy"), fr: Some("precisionPlanimetrique") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "provider", semantic: SemanticType::Str, width: 24, ext: ExtNames { gpkg: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, shp: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, gml: FmtNames { en: Some("provider"), fr: Some("fournisseur") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PROVIDER) },
    FieldSpec { name: "l_adddirfg", semantic: SemanticType::Str, width: 18, ext: ExtNames { gpkg: FmtNames { en: Some("L_ADDDIRFG"), fr: Some("ADRSENS_G") }, shp: FmtNames { en: Some("L_ADDDIRFG"), fr: Some("ADRSENS_G") }, gml: FmtNames { en: Some("left_AddressDirectionFlag"), fr: Some("sensNumerisationAdresse_Gauche") }, kml: FmtNames { en: Some("left_AddressDirectionFlag"), fr: Some("sensNumerisationAdresse_Gauche") } }, domain: Some(&crate::domains::DIGDIRFG) },
    FieldSpec { name: "r_adddirfg", semantic: SemanticType::Str, width: 18, ext: ExtNames { gpkg: FmtNames { en: Some("R_ADDDIRFG"), fr: Some("ADRSENS_D") }, shp: FmtNames { en: Some("R_ADDDIRFG"), fr: Some("ADRSENS_D") }, gml: FmtNames { en: Some("right_AddressDirectionFlag"), fr: Some("sensNumerisationAdresse_Droite") }, kml: FmtNames { en: Some("right_AddressDirectionFlag"), fr: Some("sensNumerisationAdresse_Droite") } }, domain: Some(&crate::domains::DIGDIRFG) },
    FieldSpec { name: "adrangenid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("ADRANGENID"), fr: Some("IDINTERVAD") }, shp: FmtNames { en: Some("ADRANGENID"), fr: Some("IDINTERVAD") }, gml: FmtNames { en: Some("addressRangeNid"), fr: Some("idnIntervalleAdresse") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "closing", semantic: SemanticType::Str, width: 7, ext: ExtNames { gpkg: FmtNames { en: Some("CLOSING"), fr: Some("FERMETURE") }, shp: FmtNames { en: Some("CLOSING"), fr: Some("FERMETURE") }, gml: FmtNames { en: Some("closingPeriod"), fr: Some("periodeFermeture") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::CLOSING) },
    FieldSpec { name: "exitnbr", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("EXITNBR"), fr: Some("NUMSORTIE") }, shp: FmtNames { en: Some("EXITNBR"), fr: Some("NUMSORTIE") }, gml: FmtNames { en: Some("exitNumber"), fr: Some("numeroSortie") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_hnumf", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUMF"), fr: Some("NUMP_G") }, shp: FmtNames { en: Some("L_HNUMF"), fr: Some("NUMP_G") }, gml: FmtNames { en: Some("left_FirstHouseNumber"), fr: Some("numPremiereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_hnumf", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUMF"), fr: Some("NUMP_D") }, shp: FmtNames { en: Some("R_HNUMF"), fr: Some("NUMP_D") }, gml: FmtNames { en: Some("right_FirstHouseNumber"), fr: Some("numPremiereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "roadclass", semantic: SemanticType::Str, width: 21, ext: ExtNames { gpkg: FmtNames { en: Some("ROADCLASS"), fr: Some("CLASSROUTE") }, shp: FmtNames { en: Some("ROADCLASS"), fr: Some("CLASSROUTE") }, gml: FmtNames { en: Some("functionalRoadClass"), fr: Some("classRoutiereFonctionnelle") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ROADCLASS) },
    FieldSpec { name: "l_hnuml", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("L_HNUML"), fr: Some("NUMD_G") }, shp: FmtNames { en: Some("L_HNUML"), fr: Some("NUMD_G") }, gml: FmtNames { en: Some("left_LastHouseNumber"), fr: Some("numDerniereMaison_Gauche") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "r_hnuml", semantic: SemanticType::Str, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("R_HNUML"), fr: Some("NUMD_D") }, shp: FmtNames { en: Some("R_HNUML"), fr: Some("NUMD_D") }, gml: FmtNames { en: Some("right_LastHouseNumber"), fr: Some("numDerniereMaison_Droite") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "nbrlanes", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("NBRLANES"), fr: Some("NBRVOIES") }, shp: FmtNames { en: Some("NBRLANES"), fr: Some("NBRVOIES") }, gml: FmtNames { en: Some("numberLanes"), fr: Some("nombreVoies") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "l_placenam", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("L_PLACENAM"), fr: Some("NOMLIEU_G") }, shp: FmtNames { en: Some("L_PLACENAM"), fr: Some("NOMLIEU_G") }, gml: FmtNames { en: Some("left_OfficialPlaceName"), fr: Some("nomLieuOfficiel_Gauche") }, kml: FmtNames { en: Some("left_OfficialPlaceName"), fr: Some("nomLieuOfficiel_Gauche") } }, domain: None },
    FieldSpec { name: "r_placenam", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("R_PLACENAM"), fr: Some("NOMLIEU_D") }, shp: FmtNames { en: Some("R_PLACENAM"), fr: Some("NOMLIEU_D") }, gml: FmtNames { en: Some("right_OfficialPlaceName"), fr: Some("nomLieuOfficiel_Droite") }, kml: FmtNames { en: Some("right_OfficialPlaceName"), fr: Some("nomLieuOfficiel_Droite") } }, domain: None },
    FieldSpec { name: "l_stname_c", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("L_STNAME_C"), fr: Some("NOMRUE_C_G") }, shp: FmtNames { en: Some("L_STNAME_C"), fr: Some("NOMRUE_C_G") }, gml: FmtNames { en: Some("left_OfficialStreetNameConcat"), fr: Some("nomRueOfficielConcat_Gauche") }, kml: FmtNames { en: Some("left_OfficialStreetNameConcat"), fr: Some("nomRueOfficielConcat_Gauche") } }, domain: None },
    FieldSpec { name: "r_stname_c", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("R_STNAME_C"), fr: Some("NOMRUE_C_D") }, shp: FmtNames { en: Some("R_STNAME_C"), fr: Some("NOMRUE_C_D") }, gml: FmtNames { en: Some("right_OfficialStreetNameConcat"), fr: Some("nomRueOfficielConcat_Droite") }, kml: FmtNames { en: Some("right_OfficialStreetNameConcat"), fr: Some("nomRueOfficielConcat_Droite") } }, domain: None },
    FieldSpec { name: "pavsurf", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("PAVSURF"), fr: Some("TYPEREV") }, shp: FmtNames { en: Some("PAVSURF"), fr: Some("TYPEREV") }, gml: FmtNames { en: Some("pavedRoadSurfaceType"), fr: Some("typeChausseeRevetue") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PAVSURF) },
    FieldSpec { name: "pavstatus", semantic: SemanticType::Str, width: 7, ext: ExtNames { gpkg: FmtNames { en: Some("PAVSTATUS"), fr: Some("ETATREV") }, shp: FmtNames { en: Some("PAVSTATUS"), fr: Some("ETATREV") }, gml: FmtNames { en: Some("pavementStatus"), fr: Some("etatRevetement") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PAVSTATUS) },
    FieldSpec { name: "roadjuris", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("ROADJURIS"), fr: Some("AUTORITE") }, shp: FmtNames { en: Some("ROADJURIS"), fr: Some("AUTORITE") }, gml: FmtNames { en: Some("roadJurisdiction"), fr: Some("autoriteRoute") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "roadsegid", semantic: SemanticType::Int, width: 9, ext: ExtNames { gpkg: FmtNames { en: Some("ROADSEGID"), fr: Some("IDSEGMRTE") }, shp: FmtNames { en: Some("ROADSEGID"), fr: Some("IDSEGMRTE") }, gml: FmtNames { en: Some("roadSegmentId"), fr: Some("idSegmentRoutier") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename1en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME1EN"), fr: Some("NOMRTE1AN") }, shp: FmtNames { en: Some("RTENAME1EN"), fr: Some("NOMRTE1AN") }, gml: FmtNames { en: Some("routeNameEnglish1"), fr: Some("nomRouteAnglais1") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename2en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME2EN"), fr: Some("NOMRTE2AN") }, shp: FmtNames { en: Some("RTENAME2EN"), fr: Some("NOMRTE2AN") }, gml: FmtNames { en: Some("routeNameEnglish2"), fr: Some("nomRouteAnglais2") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename3en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME3EN"), fr: Some("NOMRTE3AN") }, shp: FmtNames { en: Some("RTENAME3EN"), fr: Some("NOMRTE3AN") }, gml: FmtNames { en: Some("routeNameEnglish3"), fr: Some("nomRouteAnglais3") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename4en", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME4EN"), fr: Some("NOMRTE4AN") }, shp: FmtNames { en: Some("RTENAME4EN"), fr: Some("NOMRTE4AN") }, gml: FmtNames { en: Some("routeNameEnglish4"), fr: Some("nomRouteAnglais4") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename1fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME1FR"), fr: Some("NOMRTE1FR") }, shp: FmtNames { en: Some("RTENAME1FR"), fr: Some("NOMRTE1FR") }, gml: FmtNames { en: Some("routeNameFrench1"), fr: Some("nomRouteFrançais1") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename2fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME2FR"), fr: Some("NOMRTE2FR") }, shp: FmtNames { en: Some("RTENAME2FR"), fr: Some("NOMRTE2FR") }, gml: FmtNames { en: Some("routeNameFrench2"), fr: Some("nomRouteFrançais2") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename3fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME3FR"), fr: Some("NOMRTE3FR") }, shp: FmtNames { en: Some("RTENAME3FR"), fr: Some("NOMRTE3FR") }, gml: FmtNames { en: Some("routeNameFrench3"), fr: Some("nomRouteFrançais3") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtename4fr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("RTENAME4FR"), fr: Some("NOMRTE4FR") }, shp: FmtNames { en: Some("RTENAME4FR"), fr: Some("NOMRTE4FR") }, gml: FmtNames { en: Some("routeNameFrench4"), fr: Some("nomRouteFrançais4") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber1", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER1"), fr: Some("NUMROUTE1") }, shp: FmtNames { en: Some("RTNUMBER1"), fr: Some("NUMROUTE1") }, gml: FmtNames { en: Some("routeNumber1"), fr: Some("numeroRoute1") }, kml: FmtNames { en: Some("routeNumber1"), fr: Some("numeroRoute1") } }, domain: None },
    FieldSpec { name: "rtnumber2", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER2"), fr: Some("NUMROUTE2") }, shp: FmtNames { en: Some("RTNUMBER2"), fr: Some("NUMROUTE2") }, gml: FmtNames { en: Some("routeNumber2"), fr: Some("numeroRoute2") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber3", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER3"), fr: Some("NUMROUTE3") }, shp: FmtNames { en: Some("RTNUMBER3"), fr: Some("NUMROUTE3") }, gml: FmtNames { en: Some("routeNumber3"), fr: Some("numeroRoute3") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber4", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER4"), fr: Some("NUMROUTE4") }, shp: FmtNames { en: Some("RTNUMBER4"), fr: Some("NUMROUTE4") }, gml: FmtNames { en: Some("routeNumber4"), fr: Some("numeroRoute4") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "rtnumber5", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("RTNUMBER5"), fr: Some("NUMROUTE5") }, shp: FmtNames { en: Some("RTNUMBER5"), fr: Some("NUMROUTE5") }, gml: FmtNames { en: Some("routeNumber5"), fr: Some("numeroRoute5") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "speed", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("SPEED"), fr: Some("VITESSE") }, shp: FmtNames { en: Some("SPEED"), fr: Some("VITESSE") }, gml: FmtNames { en: Some("speedRestrictions"), fr: Some("limitesVitesse") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "strunameen", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("STRUNAMEEN"), fr: Some("NOMSTRUCAN") }, shp: FmtNames { en: Some("STRUNAMEEN"), fr: Some("NOMSTRUCAN") }, gml: FmtNames { en: Some("structureNameEnglish"), fr: Some("nomStructureAnglais") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "strunamefr", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("STRUNAMEFR"), fr: Some("NOMSTRUCFR") }, shp: FmtNames { en: Some("STRUNAMEFR"), fr: Some("NOMSTRUCFR") }, gml: FmtNames { en: Some("structureNameFrench"), fr: Some("nomStructureFrançais") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "structid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("STRUCTID"), fr: Some("IDSTRUCT") }, shp: FmtNames { en: Some("STRUCTID"), fr: Some("IDSTRUCT") }, gml: FmtNames { en: Some("structureId"), fr: Some("idStructure") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "structtype", semantic: SemanticType::Str, width: 15, ext: ExtNames { gpkg: FmtNames { en: Some("STRUCTTYPE"), fr: Some("TYPESTRUCT") }, shp: FmtNames { en: Some("STRUCTTYPE"), fr: Some("TYPESTRUCT") }, gml: FmtNames { en: Some("structureType"), fr: Some("typeStructure") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::STRUCTTYPE) },
    FieldSpec { name: "trafficdir", semantic: SemanticType::Str, width: 18, ext: ExtNames { gpkg: FmtNames { en: Some("TRAFFICDIR"), fr: Some("SENSCIRCUL") }, shp: FmtNames { en: Some("TRAFFICDIR"), fr: Some("SENSCIRCUL") }, gml: FmtNames { en: Some("trafficDirection"), fr: Some("sensCirculation") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::TRAFFICDIR) },
    FieldSpec { name: "unpavsurf", semantic: SemanticType::Str, width: 7, ext: ExtNames { gpkg: FmtNames { en: Some("UNPAVSURF"), fr: Some("TYPENONREV") }, shp: FmtNames { en: Some("UNPAVSURF"), fr: Some("TYPENONREV") }, gml: FmtNames { en: Some("unpavedRoadSurfaceType"), fr: Some("typeChausseeNonRevetue") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::UNPAVSURF) },
];
pub static ROADSEG: TableSchema = TableSchema { name: "roadseg", geometry: GeometryKind::LineString, fields: ROADSEG_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("ROADSEG"), fr: Some("SEGMROUT") }, shp: FmtNames { en: Some("ROADSEG"), fr: Some("SEGMROUT") }, gml: FmtNames { en: Some("RoadSegment"), fr: Some("SegmentRoutier") }, kml: FmtNames { en: None, fr: None } } };

pub static STRPLANAME_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "metacover", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, shp: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, gml: FmtNames { en: Some("metadataCoverage"), fr: Some("couvertureMetadonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::METACOVER) },
    FieldSpec { name: "accuracy", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, shp: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, gml: FmtNames { en: Some("planimetricAccuracy"), fr: Some("precisionPlanimetrique") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "provider", semantic: SemanticType::Str, width: 24, ext: ExtNames { gpkg: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, shp: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, gml: FmtNames { en: Some("provider"), fr: Some("fournisseur") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PROVIDER) },
    FieldSpec { name: "dirprefix", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("DIRPREFIX"), fr: Some("PREDIR") }, shp: FmtNames { en: Some("DIRPREFIX"), fr: Some("PREDIR") }, gml: FmtNames { en: Some("directionalPrefix"), fr: Some("prefixeDirection") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DIRECTIONAL) },
    FieldSpec { name: "dirsuffix", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("DIRSUFFIX"), fr: Some("SUFDIR") }, shp: FmtNames { en: Some("DIRSUFFIX"), fr: Some("SUFDIR") }, gml: FmtNames { en: Some("directionalSuffix"), fr: Some("suffixeDirection") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DIRECTIONAL) },
    FieldSpec { name: "muniquad", semantic: SemanticType::Str, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("MUNIQUAD"), fr: Some("MUNIQUAD") }, shp: FmtNames { en: Some("MUNIQUAD"), fr: Some("MUNIQUAD") }, gml: FmtNames { en: Some("muniQuadrant"), fr: Some("muniQuadrant") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::MUNIQUAD) },
    FieldSpec { name: "placename", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("PLACENAME"), fr: Some("NOMLIEU") }, shp: FmtNames { en: Some("PLACENAME"), fr: Some("NOMLIEU") }, gml: FmtNames { en: Some("placeName"), fr: Some("nomLieu") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "placetype", semantic: SemanticType::Str, width: 100, ext: ExtNames { gpkg: FmtNames { en: Some("PLACETYPE"), fr: Some("TYPELIEU") }, shp: FmtNames { en: Some("PLACETYPE"), fr: Some("TYPELIEU") }, gml: FmtNames { en: Some("placeType"), fr: Some("typeLieu") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PLACETYPE) },
    FieldSpec { name: "province", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("PROVINCE"), fr: Some("PROVINCE") }, shp: FmtNames { en: Some("PROVINCE"), fr: Some("PROVINCE") }, gml: FmtNames { en: Some("province"), fr: Some("province") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "starticle", semantic: SemanticType::Str, width: 20, ext: ExtNames { gpkg: FmtNames { en: Some("STARTICLE"), fr: Some("ARTNOMRUE") }, shp: FmtNames { en: Some("STARTICLE"), fr: Some("ARTNOMRUE") }, gml: FmtNames { en: Some("streetNameArticle"), fr: Some("articleNomRue") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::STARTICLE) },
    FieldSpec { name: "namebody", semantic: SemanticType::Str, width: 50, ext: ExtNames { gpkg: FmtNames { en: Some("NAMEBODY"), fr: Some("CORPSNOM") }, shp: FmtNames { en: Some("NAMEBODY"), fr: Some("CORPSNOM") }, gml: FmtNames { en: Some("streetNameBody"), fr: Some("corpsNomRue") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "strtypre", semantic: SemanticType::Str, width: 30, ext: ExtNames { gpkg: FmtNames { en: Some("STRTYPRE"), fr: Some("PRETYPRUE") }, shp: FmtNames { en: Some("STRTYPRE"), fr: Some("PRETYPRUE") }, gml: FmtNames { en: Some("streetTypePrefix"), fr: Some("prefixeTypeRue") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::STRTYPE) },
    FieldSpec { name: "strtysuf", semantic: SemanticType::Str, width: 30, ext: ExtNames { gpkg: FmtNames { en: Some("STRTYSUF"), fr: Some("SUFTYPRUE") }, shp: FmtNames { en: Some("STRTYSUF"), fr: Some("SUFTYPRUE") }, gml: FmtNames { en: Some("streetTypeSuffix"), fr: Some("suffixeTypeRue") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::STRTYPE) },
];
pub static STRPLANAME: TableSchema = TableSchema { name: "strplaname", geometry: GeometryKind::None, fields: STRPLANAME_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("STRPLANAME"), fr: Some("NOMRUELIEU") }, shp: FmtNames { en: Some("STRPLANAME"), fr: Some("NOMRUELIEU") }, gml: FmtNames { en: Some("StreetPlaceName"), fr: Some("NomRueLieu") }, kml: FmtNames { en: None, fr: None } } };

pub static TOLLPOINT_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "nid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("NID"), fr: Some("IDN") }, shp: FmtNames { en: Some("NID"), fr: Some("IDN") }, gml: FmtNames { en: Some("nid"), fr: Some("idn") }, kml: FmtNames { en: Some("nid"), fr: Some("idn") } }, domain: None },
    FieldSpec { name: "credate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, shp: FmtNames { en: Some("CREDATE"), fr: Some("DATECRE") }, gml: FmtNames { en: Some("creationDate"), fr: Some("dateCreation") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "revdate", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, shp: FmtNames { en: Some("REVDATE"), fr: Some("DATEREV") }, gml: FmtNames { en: Some("revisionDate"), fr: Some("dateRevision") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "datasetnam", semantic: SemanticType::Str, width: 25, ext: ExtNames { gpkg: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, shp: FmtNames { en: Some("DATASETNAM"), fr: Some("NOMJEUDONN") }, gml: FmtNames { en: Some("datasetName"), fr: Some("nomJeuDonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::DATASETNAM) },
    FieldSpec { name: "acqtech", semantic: SemanticType::Str, width: 23, ext: ExtNames { gpkg: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, shp: FmtNames { en: Some("ACQTECH"), fr: Some("TECHACQ") }, gml: FmtNames { en: Some("acquisitionTechnique"), fr: Some("techniqueAcquisition") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::ACQTECH) },
    FieldSpec { name: "specvers", semantic: SemanticType::Real, width: 10, ext: ExtNames { gpkg: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, shp: FmtNames { en: Some("SPECVERS"), fr: Some("VERSNORMES") }, gml: FmtNames { en: Some("standardVersion"), fr: Some("versionNormes") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "metacover", semantic: SemanticType::Str, width: 8, ext: ExtNames { gpkg: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, shp: FmtNames { en: Some("METACOVER"), fr: Some("COUVERMETA") }, gml: FmtNames { en: Some("metadataCoverage"), fr: Some("couvertureMetadonnees") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::METACOVER) },
    FieldSpec { name: "accuracy", semantic: SemanticType::Int, width: 4, ext: ExtNames { gpkg: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, shp: FmtNames { en: Some("ACCURACY"), fr: Some("PRECISION") }, gml: FmtNames { en: Some("planimetricAccuracy"), fr: Some("precisionPlanimetrique") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "provider", semantic: SemanticType::Str, width: 24, ext: ExtNames { gpkg: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, shp: FmtNames { en: Some("PROVIDER"), fr: Some("FOURNISSR") }, gml: FmtNames { en: Some("provider"), fr: Some("fournisseur") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::PROVIDER) },
    FieldSpec { name: "roadnid", semantic: SemanticType::Str, width: 32, ext: ExtNames { gpkg: FmtNames { en: Some("ROADNID"), fr: Some("IDNELEMRTE") }, shp: FmtNames { en: Some("ROADNID"), fr: Some("IDNELEMRTE") }, gml: FmtNames { en: Some("roadElementNid"), fr: Some("idnElementRoutier") }, kml: FmtNames { en: None, fr: None } }, domain: None },
    FieldSpec { name: "tollpttype", semantic: SemanticType::Str, width: 22, ext: ExtNames { gpkg: FmtNames { en: Some("TOLLPTTYPE"), fr: Some("TYPEPTEPEA") }, shp: FmtNames { en: Some("TOLLPTTYPE"), fr: Some("TYPEPTEPEA") }, gml: FmtNames { en: Some("tollPointType"), fr: Some("typePassageObstrue") }, kml: FmtNames { en: None, fr: None } }, domain: Some(&crate::domains::TOLLPTTYPE) },
];
pub static TOLLPOINT: TableSchema = TableSchema { name: "tollpoint", geometry: GeometryKind::Point, fields: TOLLPOINT_FIELDS, table_names: ExtNames { gpkg: FmtNames { en: Some("TOLLPOINT"), fr: Some("POSTEPEAGE") }, shp: FmtNames { en: Some("TOLLPOINT"), fr: Some("POSTEPEAGE") }, gml: FmtNames { en: Some("TollPoint"), fr: Some("PostePeage") }, kml: FmtNames { en: None, fr: None } } };

pub static ALL_TABLES: &[&TableSchema] = &[
    &ADDRANGE,
    &ALTNAMLINK,
    &BLKPASSAGE,
    &FERRYSEG,
    &JUNCTION,
    &ROADSEG,
    &STRPLANAME,
    &TOLLPOINT,
];

pub fn table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().copied().find(|t| t.name == name)
}
