//! Domain vocabularies: canonical English/French label -> shared integer code.
//! Transcribed as static data from the NRN domain registry (dict-valued domains
//! keep their declared codes; list-valued domains use 0-based position as the code,
//! matching the convention that position 0 is the None/Aucun sentinel).

use crate::Domain;

pub static ACQTECH_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("None", 0),
    ("Other", 1),
    ("GPS", 2),
    ("Orthoimage", 3),
    ("Orthophoto", 4),
    ("Vector Data", 5),
    ("Paper Map", 6),
    ("Field Completion", 7),
    ("Raster Data", 8),
    ("Digital Elevation Model", 9),
    ("Aerial Photo", 10),
    ("Raw Imagery Data", 11),
    ("Computed", 12),
];
pub static ACQTECH_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Aucun", 0),
    ("Autre", 1),
    ("GPS", 2),
    ("Ortho-image", 3),
    ("Ortho-photo", 4),
    ("Données vectorielles", 5),
    ("Carte papier", 6),
    ("Complètement terrain", 7),
    ("Données matricielles", 8),
    ("Modèle numérique d'élévation", 9),
    ("Photographie aérienne", 10),
    ("Image satellite brute", 11),
    ("Calculé", 12),
];
pub static ACQTECH: Domain = Domain { name: "acquisition_technique", en: ACQTECH_EN, fr: ACQTECH_FR };

pub static METACOVER_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("Complete", 1),
    ("Partial", 2),
];
pub static METACOVER_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Complet", 1),
    ("Partiel", 2),
];
pub static METACOVER: Domain = Domain { name: "metadata_coverage", en: METACOVER_EN, fr: METACOVER_FR };

pub static DATASETNAM_EN: &[(&str, i32)] = &[
    ("Newfoundland and Labrador", 1),
    ("Nova Scotia", 2),
    ("Prince Edward Island", 3),
    ("New Brunswick", 4),
    ("Quebec", 5),
    ("Ontario", 6),
    ("Manitoba", 7),
    ("Saskatchewan", 8),
    ("Alberta", 9),
    ("British Columbia", 10),
    ("Yukon Territory", 11),
    ("Northwest Territories", 12),
    ("Nunavut", 13),
];
pub static DATASETNAM_FR: &[(&str, i32)] = &[
    ("Terre-Neuve et Labrador", 1),
    ("Nouvelle-Écosse", 2),
    ("Île-du-Prince-Édouard", 3),
    ("Nouveau-Brunswick", 4),
    ("Québec", 5),
    ("Ontario", 6),
    ("Manitoba", 7),
    ("Saskatchewan", 8),
    ("Alberta", 9),
    ("Colombie-Britannique", 10),
    ("Territoire du Yukon", 11),
    ("Territoires du Nord-Ouest", 12),
    ("Nunavut", 13),
];
pub static DATASETNAM: Domain = Domain { name: "dataset_name", en: DATASETNAM_EN, fr: DATASETNAM_FR };

pub static PROVIDER_EN: &[(&str, i32)] = &[
    ("Other", 1),
    ("Federal", 2),
    ("Provincial / Territorial", 3),
    ("Municipal", 4),
];
pub static PROVIDER_FR: &[(&str, i32)] = &[
    ("Autre", 1),
    ("Fédéral", 2),
    ("Provincial / Territorial", 3),
    ("Municipal", 4),
];
pub static PROVIDER: Domain = Domain { name: "provider", en: PROVIDER_EN, fr: PROVIDER_FR };

pub static DIGDIRFG_EN: &[(&str, i32)] = &[
    ("Same Direction", 1),
    ("Opposite Direction", 2),
    ("Not Applicable", 3),
];
pub static DIGDIRFG_FR: &[(&str, i32)] = &[
    ("Même sens", 1),
    ("Sens opposé", 2),
    ("Sans objet", 3),
];
pub static DIGDIRFG: Domain = Domain { name: "digitizing_direction_flag", en: DIGDIRFG_EN, fr: DIGDIRFG_FR };

pub static HNUMTYPE_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("None", 0),
    ("Actual Located", 1),
    ("Actual Unlocated", 2),
    ("Projected", 3),
    ("Interpolated", 4),
];
pub static HNUMTYPE_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Aucun", 0),
    ("Localisation réelle", 1),
    ("Localisation présumée", 2),
    ("Projeté", 3),
    ("Interpolé", 4),
];
pub static HNUMTYPE: Domain = Domain { name: "house_number_type", en: HNUMTYPE_EN, fr: HNUMTYPE_FR };

pub static HNUMSTR_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("None", 0),
    ("Even", 1),
    ("Odd", 2),
    ("Mixed", 3),
    ("Irregular", 4),
];
pub static HNUMSTR_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Aucun", 0),
    ("Numéros pairs", 1),
    ("Numéros impairs", 2),
    ("Numéros mixtes", 3),
    ("Numéros irréguliers", 4),
];
pub static HNUMSTR: Domain = Domain { name: "house_number_structure", en: HNUMSTR_EN, fr: HNUMSTR_FR };

pub static RFSYSIND_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("None", 0),
    ("Civic", 1),
    ("Lot and Concession", 2),
    ("911 Measured", 3),
    ("911 Civic", 4),
    ("DLS Townships", 5),
];
pub static RFSYSIND_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Aucun", 0),
    ("Civique", 1),
    ("Lot et concession", 2),
    ("Mesuré 911", 3),
    ("Civique 911", 4),
    ("DLS", 5),
];
pub static RFSYSIND: Domain = Domain { name: "reference_system_indicator", en: RFSYSIND_EN, fr: RFSYSIND_FR };

pub static BLKPASSTY_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("Permanently Fixed", 1),
    ("Removable", 2),
];
pub static BLKPASSTY_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Permanente", 1),
    ("Amovible", 2),
];
pub static BLKPASSTY: Domain = Domain { name: "blocked_passage_type", en: BLKPASSTY_EN, fr: BLKPASSTY_FR };

pub static JUNCTYPE_EN: &[(&str, i32)] = &[
    ("Intersection", 1),
    ("Dead End", 2),
    ("Ferry", 3),
    ("NatProvTer", 4),
];
pub static JUNCTYPE_FR: &[(&str, i32)] = &[
    ("Intersection", 1),
    ("Cul-de-sac", 2),
    ("Transbordement", 3),
    ("NatProvTer", 4),
];
pub static JUNCTYPE: Domain = Domain { name: "junction_type", en: JUNCTYPE_EN, fr: JUNCTYPE_FR };

pub static CLOSING_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("None", 0),
    ("Summer", 1),
    ("Winter", 2),
];
pub static CLOSING_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Aucun", 0),
    ("Été", 1),
    ("Hiver", 2),
];
pub static CLOSING: Domain = Domain { name: "closing_period", en: CLOSING_EN, fr: CLOSING_FR };

pub static ROADCLASS_EN: &[(&str, i32)] = &[
    ("Freeway", 1),
    ("Expressway / Highway", 2),
    ("Arterial", 3),
    ("Collector", 4),
    ("Local / Street", 5),
    ("Local / Strata", 6),
    ("Local / Unknown", 7),
    ("Alleyway / Lane", 8),
    ("Ramp", 9),
    ("Resource / Recreation", 10),
    ("Rapid Transit", 11),
    ("Service Lane", 12),
    ("Winter", 13),
];
pub static ROADCLASS_FR: &[(&str, i32)] = &[
    ("Autoroute", 1),
    ("Route express", 2),
    ("Artère", 3),
    ("Route collectrice", 4),
    ("Local / Rue", 5),
    ("Local / Semi-privé", 6),
    ("Local / Inconnu", 7),
    ("Ruelle / Voie", 8),
    ("Bretelle", 9),
    ("Route d'accès ressources / Site récréatif", 10),
    ("Réservée transport commun", 11),
    ("Service", 12),
    ("Hiver", 13),
];
pub static ROADCLASS: Domain = Domain { name: "functional_roadclass", en: ROADCLASS_EN, fr: ROADCLASS_FR };

pub static PAVSURF_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("None", 0),
    ("Rigid", 1),
    ("Flexible", 2),
    ("Blocks", 3),
];
pub static PAVSURF_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Aucun", 0),
    ("Rigide", 1),
    ("Souple", 2),
    ("Pavés", 3),
];
pub static PAVSURF: Domain = Domain { name: "paved_road_surface_type", en: PAVSURF_EN, fr: PAVSURF_FR };

pub static PAVSTATUS_EN: &[(&str, i32)] = &[
    ("Paved", 1),
    ("Unpaved", 2),
];
pub static PAVSTATUS_FR: &[(&str, i32)] = &[
    ("Revêtue", 1),
    ("Non revêtue", 2),
];
pub static PAVSTATUS: Domain = Domain { name: "pavement_status", en: PAVSTATUS_EN, fr: PAVSTATUS_FR };

pub static STRUCTTYPE_EN: &[(&str, i32)] = &[
    ("None", 0),
    ("Bridge", 1),
    ("Bridge covered", 2),
    ("Bridge moveable", 3),
    ("Bridge unknown", 4),
    ("Tunnel", 5),
    ("Snowshed", 6),
    ("Dam", 7),
];
pub static STRUCTTYPE_FR: &[(&str, i32)] = &[
    ("Aucun", 0),
    ("Pont", 1),
    ("Pont couvert", 2),
    ("Pont mobile", 3),
    ("Pont inconnu", 4),
    ("Tunnel", 5),
    ("Paraneige", 6),
    ("Barrage", 7),
];
pub static STRUCTTYPE: Domain = Domain { name: "structure_type", en: STRUCTTYPE_EN, fr: STRUCTTYPE_FR };

pub static TRAFFICDIR_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("Both directions", 1),
    ("Same direction", 2),
    ("Opposite direction", 3),
];
pub static TRAFFICDIR_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Bi-directionel", 1),
    ("Même direction", 2),
    ("Direction contraire", 3),
];
pub static TRAFFICDIR: Domain = Domain { name: "traffic_direction", en: TRAFFICDIR_EN, fr: TRAFFICDIR_FR };

pub static UNPAVSURF_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("None", 0),
    ("Gravel", 1),
    ("Dirt", 2),
];
pub static UNPAVSURF_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Aucun", 0),
    ("Gravier", 1),
    ("Terre", 2),
];
pub static UNPAVSURF: Domain = Domain { name: "unpaved_road_surface_type", en: UNPAVSURF_EN, fr: UNPAVSURF_FR };

pub static DIRECTIONAL_EN: &[(&str, i32)] = &[
    ("None", 0),
    ("North", 1),
    ("Nord", 2),
    ("South", 3),
    ("Sud", 4),
    ("East", 5),
    ("Est", 6),
    ("West", 7),
    ("Ouest", 8),
    ("Northwest", 9),
    ("Nord-ouest", 10),
    ("Northeast", 11),
    ("Nord-est", 12),
    ("Southwest", 13),
    ("Sud-ouest", 14),
    ("Southeast", 15),
    ("Sud-est", 16),
    ("Central", 17),
    ("Centre", 18),
];
pub static DIRECTIONAL_FR: &[(&str, i32)] = &[
    ("Aucun", 0),
    ("North", 1),
    ("Nord", 2),
    ("South", 3),
    ("Sud", 4),
    ("East", 5),
    ("Est", 6),
    ("West", 7),
    ("Ouest", 8),
    ("Northwest", 9),
    ("Nord-ouest", 10),
    ("Northeast", 11),
    ("Nord-est", 12),
    ("Southwest", 13),
    ("Sud-ouest", 14),
    ("Southeast", 15),
    ("Sud-est", 16),
    ("Central", 17),
    ("Centre", 18),
];
pub static DIRECTIONAL: Domain = Domain { name: "directional_indicator", en: DIRECTIONAL_EN, fr: DIRECTIONAL_FR };

pub static MUNIQUAD_EN: &[(&str, i32)] = &[
    ("None", 0),
    ("South-West", 1),
    ("South-East", 2),
    ("North-East", 3),
    ("North-West", 4),
];
pub static MUNIQUAD_FR: &[(&str, i32)] = &[
    ("Aucun", 0),
    ("South-West", 1),
    ("South-East", 2),
    ("North-East", 3),
    ("North-West", 4),
];
pub static MUNIQUAD: Domain = Domain { name: "muni_quadrant", en: MUNIQUAD_EN, fr: MUNIQUAD_FR };

pub static PLACETYPE_EN: &[(&str, i32)] = &[
    ("None", 0),
    ("Borough / Borough", 1),
    ("Chartered Community", 2),
    ("City / Cité", 3),
    ("City / Ville", 4),
    ("Community / Communauté", 5),
    ("County (Municipality) / Comté (Municipalité)", 6),
    ("Cree Village / Village Cri", 7),
    ("Crown Colony / Colonie de la couronne", 8),
    ("District (Municipality) / District (Municipalité)", 9),
    ("Hamlet / Hameau", 10),
    ("Improvement District", 11),
    ("Indian Government District", 12),
    ("Indian Reserve / Réserve indienne", 13),
    ("Indian Settlement / Établissement indien", 14),
    ("Island Municipality", 15),
    ("Local Government District", 16),
    ("Lot / Lot", 17),
    ("Municipal District / District municipal", 18),
    ("Municipality / Municipalité", 19),
    ("Naskapi Village / Village Naskapi", 20),
    ("Nisga'a land / Terre Nisga'a", 21),
    ("Nisga'a Village / Village Nisga'a", 22),
    ("Northern Hamlet / Hameau nordique", 23),
    ("Northern Town / Ville nordique", 24),
    ("Northern Village / Village nordique", 25),
    ("Parish (Municipality) / Paroisse (Municipalité)", 26),
    ("Parish / Paroisse", 27),
    ("Region / Région", 28),
    ("Regional District Electoral Area", 29),
    ("Regional Municipality / Municipalité régionale", 30),
    ("Resort Village / Centre de villégiature", 31),
    ("Rural Community", 32),
    ("Rural Municipality / Municipalité rurale", 33),
    ("Settlement / Établissement", 34),
    ("Special Area", 35),
    ("Specialized Municipality / Municipalité spécialisée", 36),
    ("Subdivision of County Municipality", 37),
    ("Subdivision of Regional District", 38),
    ("Subdivision of Unorganized", 39),
    ("Summer Village / Village estival", 40),
    ("Terre inuite", 41),
    ("Terres réservées", 42),
    ("Teslin land / Terre Teslin", 43),
    ("Town / Ville", 44),
    ("Township (Municipality) / Canton (Municipalité)", 45),
    ("Township / Canton", 46),
    ("United Township (Municipality) / Cantons-unis (Municipalité)", 47),
    ("Unorganized / Non-organisé", 48),
    ("Village / Village", 49),
    ("Without Designation (Municipality) / Sans désignation (Municipalité)", 50),
];
pub static PLACETYPE_FR: &[(&str, i32)] = &[
    ("Aucun", 0),
    ("Borough / Borough", 1),
    ("Chartered Community", 2),
    ("City / Cité", 3),
    ("City / Ville", 4),
    ("Community / Communauté", 5),
    ("County (Municipality) / Comté (Municipalité)", 6),
    ("Cree Village / Village Cri", 7),
    ("Crown Colony / Colonie de la couronne", 8),
    ("District (Municipality) / District (Municipalité)", 9),
    ("Hamlet / Hameau", 10),
    ("Improvement District", 11),
    ("Indian Government District", 12),
    ("Indian Reserve / Réserve indienne", 13),
    ("Indian Settlement / Établissement indien", 14),
    ("Island Municipality", 15),
    ("Local Government District", 16),
    ("Lot / Lot", 17),
    ("Municipal District / District municipal", 18),
    ("Municipality / Municipalité", 19),
    ("Naskapi Village / Village Naskapi", 20),
    ("Nisga'a land / Terre Nisga'a", 21),
    ("Nisga'a Village / Village Nisga'a", 22),
    ("Northern Hamlet / Hameau nordique", 23),
    ("Northern Town / Ville nordique", 24),
    ("Northern Village / Village nordique", 25),
    ("Parish (Municipality) / Paroisse (Municipalité)", 26),
    ("Parish / Paroisse", 27),
    ("Region / Région", 28),
    ("Regional District Electoral Area", 29),
    ("Regional Municipality / Municipalité régionale", 30),
    ("Resort Village / Centre de villégiature", 31),
    ("Rural Community", 32),
    ("Rural Municipality / Municipalité rurale", 33),
    ("Settlement / Établissement", 34),
    ("Special Area", 35),
    ("Specialized Municipality / Municipalité spécialisée", 36),
    ("Subdivision of County Municipality", 37),
    ("Subdivision of Regional District", 38),
    ("Subdivision of Unorganized", 39),
    ("Summer Village / Village estival", 40),
    ("Terre inuite", 41),
    ("Terres réservées", 42),
    ("Teslin land / Terre Teslin", 43),
    ("Town / Ville", 44),
    ("Township (Municipality) / Canton (Municipalité)", 45),
    ("Township / Canton", 46),
    ("United Township (Municipality) / Cantons-unis (Municipalité)", 47),
    ("Unorganized / Non-organisé", 48),
    ("Village / Village", 49),
    ("Without Designation (Municipality) / Sans désignation (Municipalité)", 50),
];
pub static PLACETYPE: Domain = Domain { name: "place_type", en: PLACETYPE_EN, fr: PLACETYPE_FR };

pub static STARTICLE_EN: &[(&str, i32)] = &[
    ("None", 0),
    ("à", 1),
    ("à l'", 2),
    ("à la", 3),
    ("au", 4),
    ("aux", 5),
    ("by the", 6),
    ("chez", 7),
    ("d'", 8),
    ("de", 9),
    ("de l'", 10),
    ("de la", 11),
    ("des", 12),
    ("du", 13),
    ("l'", 14),
    ("la", 15),
    ("le", 16),
    ("les", 17),
    ("of the", 18),
    ("the", 19),
];
pub static STARTICLE_FR: &[(&str, i32)] = &[
    ("Aucun", 0),
    ("à", 1),
    ("à l'", 2),
    ("à la", 3),
    ("au", 4),
    ("aux", 5),
    ("by the", 6),
    ("chez", 7),
    ("d'", 8),
    ("de", 9),
    ("de l'", 10),
    ("de la", 11),
    ("des", 12),
    ("du", 13),
    ("l'", 14),
    ("la", 15),
    ("le", 16),
    ("les", 17),
    ("of the", 18),
    ("the", 19),
];
pub static STARTICLE: Domain = Domain { name: "street_name_article", en: STARTICLE_EN, fr: STARTICLE_FR };

pub static STRTYPE_EN: &[(&str, i32)] = &[
    ("None", 0),
    ("Abbey", 1),
    ("Access", 2),
    ("Acres", 3),
    ("Aire", 4),
    ("Allée", 5),
    ("Alley", 6),
    ("Autoroute", 7),
    ("Avenue", 8),
    ("Barrage", 9),
    ("Bay", 10),
    ("Beach", 11),
    ("Bend", 12),
    ("Bloc", 13),
    ("Block", 14),
    ("Boulevard", 15),
    ("Bourg", 16),
    ("Brook", 17),
    ("By-pass", 18),
    ("Byway", 19),
    ("Campus", 20),
    ("Cape", 21),
    ("Carre", 22),
    ("Carrefour", 23),
    ("Centre", 24),
    ("Cercle", 25),
    ("Chase", 26),
    ("Chemin", 27),
    ("Circle", 28),
    ("Circuit", 29),
    ("Close", 30),
    ("Common", 31),
    ("Concession", 32),
    ("Corners", 33),
    ("Côte", 34),
    ("Cour", 35),
    ("Court", 36),
    ("Cove", 37),
    ("Crescent", 38),
    ("Croft", 39),
    ("Croissant", 40),
    ("Crossing", 41),
    ("Crossroads", 42),
    ("Cul-de-sac", 43),
    ("Dale", 44),
    ("Dell", 45),
    ("Desserte", 46),
    ("Diversion", 47),
    ("Downs", 48),
    ("Drive", 49),
    ("Droit de passage", 50),
    ("Échangeur", 51),
    ("End", 52),
    ("Esplanade", 53),
    ("Estates", 54),
    ("Expressway", 55),
    ("Extension", 56),
    ("Farm", 57),
    ("Field", 58),
    ("Forest", 59),
    ("Front", 60),
    ("Gardens", 61),
    ("Gate", 62),
    ("Glade", 63),
    ("Glen", 64),
    ("Green", 65),
    ("Grounds", 66),
    ("Grove", 67),
    ("Harbour", 68),
    ("Haven", 69),
    ("Heath", 70),
    ("Heights", 71),
    ("Highlands", 72),
    ("Highway", 73),
    ("Hill", 74),
    ("Hollow", 75),
    ("Île", 76),
    ("Impasse", 77),
    ("Island", 78),
    ("Key", 79),
    ("Knoll", 80),
    ("Landing", 81),
    ("Lane", 82),
    ("Laneway", 83),
    ("Limits", 84),
    ("Line", 85),
    ("Link", 86),
    ("Lookout", 87),
    ("Loop", 88),
    ("Mall", 89),
    ("Manor", 90),
    ("Maze", 91),
    ("Meadow", 92),
    ("Mews", 93),
    ("Montée", 94),
    ("Moor", 95),
    ("Mount", 96),
    ("Mountain", 97),
    ("Orchard", 98),
    ("Parade", 99),
    ("Parc", 100),
    ("Park", 101),
    ("Parkway", 102),
    ("Passage", 103),
    ("Path", 104),
    ("Pathway", 105),
    ("Peak", 106),
    ("Pines", 107),
    ("Place", 108),
    ("Plateau", 109),
    ("Plaza", 110),
    ("Point", 111),
    ("Port", 112),
    ("Private", 113),
    ("Promenade", 114),
    ("Quay", 115),
    ("Rang", 116),
    ("Range", 117),
    ("Reach", 118),
    ("Ridge", 119),
    ("Right of Way", 120),
    ("Rise", 121),
    ("Road", 122),
    ("Rond Point", 123),
    ("Route", 124),
    ("Row", 125),
    ("Rue", 126),
    ("Ruelle", 127),
    ("Ruisseau", 128),
    ("Run", 129),
    ("Section", 130),
    ("Sentier", 131),
    ("Sideroad", 132),
    ("Square", 133),
    ("Street", 134),
    ("Stroll", 135),
    ("Subdivision", 136),
    ("Terrace", 137),
    ("Terrasse", 138),
    ("Thicket", 139),
    ("Towers", 140),
    ("Townline", 141),
    ("Trace", 142),
    ("Trail", 143),
    ("Trunk", 144),
    ("Turnabout", 145),
    ("Vale", 146),
    ("Via", 147),
    ("View", 148),
    ("Village", 149),
    ("Vista", 150),
    ("Voie", 151),
    ("Walk", 152),
    ("Way", 153),
    ("Wharf", 154),
    ("Wood", 155),
    ("Woods", 156),
    ("Wynd", 157),
];
pub static STRTYPE_FR: &[(&str, i32)] = &[
    ("Aucun", 0),
    ("Abbey", 1),
    ("Access", 2),
    ("Acres", 3),
    ("Aire", 4),
    ("Allée", 5),
    ("Alley", 6),
    ("Autoroute", 7),
    ("Avenue", 8),
    ("Barrage", 9),
    ("Bay", 10),
    ("Beach", 11),
    ("Bend", 12),
    ("Bloc", 13),
    ("Block", 14),
    ("Boulevard", 15),
    ("Bourg", 16),
    ("Brook", 17),
    ("By-pass", 18),
    ("Byway", 19),
    ("Campus", 20),
    ("Cape", 21),
    ("Carre", 22),
    ("Carrefour", 23),
    ("Centre", 24),
    ("Cercle", 25),
    ("Chase", 26),
    ("Chemin", 27),
    ("Circle", 28),
    ("Circuit", 29),
    ("Close", 30),
    ("Common", 31),
    ("Concession", 32),
    ("Corners", 33),
    ("Côte", 34),
    ("Cour", 35),
    ("Court", 36),
    ("Cove", 37),
    ("Crescent", 38),
    ("Croft", 39),
    ("Croissant", 40),
    ("Crossing", 41),
    ("Crossroads", 42),
    ("Cul-de-sac", 43),
    ("Dale", 44),
    ("Dell", 45),
    ("Desserte", 46),
    ("Diversion", 47),
    ("Downs", 48),
    ("Drive", 49),
    ("Droit de passage", 50),
    ("Échangeur", 51),
    ("End", 52),
    ("Esplanade", 53),
    ("Estates", 54),
    ("Expressway", 55),
    ("Extension", 56),
    ("Farm", 57),
    ("Field", 58),
    ("Forest", 59),
    ("Front", 60),
    ("Gardens", 61),
    ("Gate", 62),
    ("Glade", 63),
    ("Glen", 64),
    ("Green", 65),
    ("Grounds", 66),
    ("Grove", 67),
    ("Harbour", 68),
    ("Haven", 69),
    ("Heath", 70),
    ("Heights", 71),
    ("Highlands", 72),
    ("Highway", 73),
    ("Hill", 74),
    ("Hollow", 75),
    ("Île", 76),
    ("Impasse", 77),
    ("Island", 78),
    ("Key", 79),
    ("Knoll", 80),
    ("Landing", 81),
    ("Lane", 82),
    ("Laneway", 83),
    ("Limits", 84),
    ("Line", 85),
    ("Link", 86),
    ("Lookout", 87),
    ("Loop", 88),
    ("Mall", 89),
    ("Manor", 90),
    ("Maze", 91),
    ("Meadow", 92),
    ("Mews", 93),
    ("Montée", 94),
    ("Moor", 95),
    ("Mount", 96),
    ("Mountain", 97),
    ("Orchard", 98),
    ("Parade", 99),
    ("Parc", 100),
    ("Park", 101),
    ("Parkway", 102),
    ("Passage", 103),
    ("Path", 104),
    ("Pathway", 105),
    ("Peak", 106),
    ("Pines", 107),
    ("Place", 108),
    ("Plateau", 109),
    ("Plaza", 110),
    ("Point", 111),
    ("Port", 112),
    ("Private", 113),
    ("Promenade", 114),
    ("Quay", 115),
    ("Rang", 116),
    ("Range", 117),
    ("Reach", 118),
    ("Ridge", 119),
    ("Right of Way", 120),
    ("Rise", 121),
    ("Road", 122),
    ("Rond Point", 123),
    ("Route", 124),
    ("Row", 125),
    ("Rue", 126),
    ("Ruelle", 127),
    ("Ruisseau", 128),
    ("Run", 129),
    ("Section", 130),
    ("Sentier", 131),
    ("Sideroad", 132),
    ("Square", 133),
    ("Street", 134),
    ("Stroll", 135),
    ("Subdivision", 136),
    ("Terrace", 137),
    ("Terrasse", 138),
    ("Thicket", 139),
    ("Towers", 140),
    ("Townline", 141),
    ("Trace", 142),
    ("Trail", 143),
    ("Trunk", 144),
    ("Turnabout", 145),
    ("Vale", 146),
    ("Via", 147),
    ("View", 148),
    ("Village", 149),
    ("Vista", 150),
    ("Voie", 151),
    ("Walk", 152),
    ("Way", 153),
    ("Wharf", 154),
    ("Wood", 155),
    ("Woods", 156),
    ("Wynd", 157),
];
pub static STRTYPE: Domain = Domain { name: "street_type", en: STRTYPE_EN, fr: STRTYPE_FR };

pub static TOLLPTTYPE_EN: &[(&str, i32)] = &[
    ("Unknown", -1),
    ("Physical Toll Booth", 1),
    ("Virtual Toll Booth", 2),
    ("Hybrid", 3),
];
pub static TOLLPTTYPE_FR: &[(&str, i32)] = &[
    ("Inconnu", -1),
    ("Poste de péage", 1),
    ("Poste de péage virtuel", 2),
    ("Hybride", 3),
];
pub static TOLLPTTYPE: Domain = Domain { name: "toll_point_type", en: TOLLPTTYPE_EN, fr: TOLLPTTYPE_FR };

pub static ALL_DOMAINS: &[&Domain] = &[
    &ACQTECH,
    &METACOVER,
    &DATASETNAM,
    &PROVIDER,
    &DIGDIRFG,
    &HNUMTYPE,
    &HNUMSTR,
    &RFSYSIND,
    &BLKPASSTY,
    &JUNCTYPE,
    &CLOSING,
    &ROADCLASS,
    &PAVSURF,
    &PAVSTATUS,
    &STRUCTTYPE,
    &TRAFFICDIR,
    &UNPAVSURF,
    &DIRECTIONAL,
    &MUNIQUAD,
    &PLACETYPE,
    &STARTICLE,
    &STRTYPE,
    &TOLLPTTYPE,
];

/// Looks up a domain by its canonical snake_case name (e.g. the value the
/// `conform` document's `apply_domain`/`extract_domain` functions refer to
/// it by), not by the Rust constant's identifier.
pub fn by_name(name: &str) -> Option<&'static Domain> {
    ALL_DOMAINS.iter().find(|d| d.name == name).copied()
}

