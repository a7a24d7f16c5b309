//! Application constants for NextGen content
//!
//! Published sheet locations, display defaults, column contracts and the
//! static reference data (municipalities and tour routes) used throughout
//! the crate.

// =============================================================================
// Published Sheets
// =============================================================================

/// Community profiles sheet
pub const COMMUNITY_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTR1m8c_M-L39OfXRC4qqGkMuT2liOaogntkZntOeHOiQ7hXTrUFKJrIjOG4amjpCJ7LmTPKzF5GcD9/pub?gid=1269159520&single=true&output=csv";

/// News (showcase) sheet
pub const NEWS_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR5wG7maDoWY1HJrLAF9bJBFKs8B1loTiOn1SYuzS9_gr50-JwMAoArtKAP8wLIBYSVqHT_FIbNlyaC/pub?gid=372344697&single=true&output=csv";

/// Applications sheet, only counted
pub const APPLICATIONS_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRkc4vazCHrgzXe9gkhMqZPKEQFor5493mm9iwZ8AqUO3wLMl4WbmJvv6leMBrmRlwX9bOF0-mzsZOF/pub?gid=0&single=true&output=csv";

/// Query parameter appended to defeat intermediate caches
pub const CACHE_BUST_PARAM: &str = "_";

// =============================================================================
// Display Defaults
// =============================================================================

pub const FALLBACK_IMAGE: &str = "img/LOGO NEXT GEN .png";
pub const DEFAULT_IMAGE_WIDTH: u32 = 1200;
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;
pub const DEFAULT_SECTOR: &str = "Otro";
pub const REGION_NAME: &str = "Norte de Santander";

/// Filter value meaning "no filter"
pub const FILTER_ALL: &str = "Todos";

/// Social URLs this short or shorter are treated as placeholders
pub const MIN_SOCIAL_URL_LEN: usize = 5;

/// Hosts whose image URLs are already directly loadable
pub const DIRECT_IMAGE_HOSTS: &[&str] = &["lh3.googleusercontent.com", "drive.google.com/thumbnail"];

pub const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "gif", "png", "webp", "bmp", "svg"];

// =============================================================================
// Fetch Defaults
// =============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;

/// Upper bound accepted for `fetch.max_retries`
pub const MAX_FETCH_RETRIES: u32 = 10;

/// Longest single wait between retries
pub const MAX_BACKOFF_MS: u64 = 30_000;

// =============================================================================
// Column Contracts
// =============================================================================

/// Column positions in the community sheet (column 0 is the form timestamp)
pub mod community_columns {
    pub const ENTREPRENEUR_NAME: usize = 1;
    pub const ENTREPRENEUR_BIO: usize = 2;
    pub const ENTREPRENEUR_VIDEO: usize = 3;
    pub const ENTREPRENEUR_PHOTO: usize = 4;
    pub const BUSINESS_NAME: usize = 5;
    pub const BUSINESS_DESCRIPTION: usize = 6;
    pub const SECTOR: usize = 7;
    pub const ADDRESS: usize = 8;
    pub const MUNICIPALITY: usize = 9;
    pub const BUSINESS_IMAGE: usize = 10;
    pub const BUSINESS_VIDEO: usize = 11;
    pub const TIKTOK: usize = 12;
    pub const INSTAGRAM: usize = 13;
    pub const FACEBOOK: usize = 14;
}

/// Column positions in the news sheet
pub mod news_columns {
    pub const TITLE: usize = 1;
    pub const MUNICIPALITY: usize = 2;
    pub const DESCRIPTION: usize = 3;
    pub const IMAGE: usize = 4;
    pub const DATE: usize = 5;

    /// Rows shorter than this are skipped
    pub const MIN_COLUMNS: usize = 6;
}

// =============================================================================
// Reference Data
// =============================================================================

/// Benefiting municipalities as (name, latitude, longitude)
pub const MUNICIPALITIES: &[(&str, f64, f64)] = &[
    ("Ábrego", 8.081, -73.216),
    ("Arboledas", 7.643, -72.784),
    ("Bochalema", 7.610, -72.645),
    ("Cáchira", 7.740, -73.048),
    ("Chitagá", 7.135, -72.663),
    ("Convención", 8.435, -73.214),
    ("Cúcuta", 7.8939, -72.5078),
    ("El Carmen", 8.509, -73.447),
    ("El Zulia", 7.930, -72.600),
    ("La Playa de Belén", 8.232, -73.238),
    ("Los Patios", 7.8464, -72.5036),
    ("Ocaña", 8.2373, -73.3560),
    ("Pamplona", 7.3756, -72.6473),
    ("Puerto Santander", 8.356, -72.436),
    ("San Calixto", 8.4, -73.15),
    ("Sardinata", 8.083, -72.8),
    ("Salazar de las Palmas", 7.776, -72.813),
    ("Teorama", 8.435, -73.284),
    ("Tibú", 8.6397, -72.7358),
    ("Toledo", 7.307, -72.482),
    ("Villa del Rosario", 7.8336, -72.4739),
];

/// Tour routes as (route name, [(date, municipality)])
pub const ROUTES: &[(&str, &[(&str, &str)])] = &[
    (
        "Ruta 1",
        &[
            ("Viernes 6 de febrero", "Teorama"),
            ("Viernes 6 de febrero", "San Calixto"),
            ("Sabado 7 de febrero", "Cáchira"),
            ("Lunes 9 de febrero", "El Carmen"),
            ("Lunes 9 de febrero", "Convención"),
            ("Martes 10 de febrero", "Abrego"),
            ("Martes 10 de febrero", "La Playa"),
            ("Miercoles 11 de febrero", "Ocaña"),
        ],
    ),
    (
        "Ruta 2",
        &[
            ("Viernes 6 de febrero", "Puerto Santander"),
            ("Viernes 6 de febrero", "Villa del Rosario"),
            ("Lunes 9 de febrero", "Tibú"),
            ("Martes 10 de febrero", "Los Patios"),
            ("Martes 10 de febrero", "Cúcuta"),
        ],
    ),
    (
        "Ruta 3",
        &[
            ("Lunes 9 de febrero", "Sardinata"),
            ("Lunes 9 de febrero", "El Zulia"),
            ("Martes 10 de febrero", "Salazar"),
            ("Martes 10 de febrero", "Arboledas"),
            ("Miercoles 11 de febrero", "Bochalema"),
            ("Miercoles 11 de febrero", "Pamplona"),
            ("Jueves 12 de febrero", "Chitagá"),
            ("Jueves 12 de febrero", "Toledo"),
        ],
    ),
];
