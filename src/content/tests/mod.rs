//! Test fixtures for content loading
//!
//! Sheet exports shaped like the published NextGen spreadsheets, plus a
//! helper that writes them to temporary files.

use std::io::Write;
use tempfile::NamedTempFile;

mod reference_tests;
mod views_tests;

/// Community sheet export with one row of every kind the mapper meets
pub fn community_csv() -> String {
    [
        "Marca temporal,Nombre,Bio,Video,Foto,Negocio,Descripción,Sector,Dirección,Municipio,Imagen negocio,Video negocio,TikTok,Instagram,Facebook",
        "1/2/2026 10:00,Ana Pérez,\"Caficultora, 20 años\",https://drive.google.com/file/d/vidA/view,https://drive.google.com/open?id=fotoA,Café Ana,\"Café de origen\nTostado artesanal\",Agro,Calle 1,Ocaña,https://drive.google.com/file/d/imgA/view,,,https://instagram.com/cafeana,",
        "1/2/2026 11:00,Luis Gómez,,,,Tejidos Luis,,,Carrera 5, Pamplona ,,https://youtu.be/luis,https://tiktok.com/@luis",
        "1/2/2026 12:00,,Sin nombre,,,Negocio X,,Comercio,,Cúcuta",
        "1/2/2026 13:00,Marta Ruiz,,,,Dulces Marta,,Agro,,Ocaña",
        "1/2/2026 14:00,Pedro,,,,,,Turismo,,Tibú",
        "",
    ]
    .join("\n")
}

/// News sheet export
pub fn news_csv() -> String {
    [
        "Marca temporal,Título,Municipio,Descripción,Imagen,Fecha",
        "t,Feria regional,Ocaña,\"Más de 40 \"\"emprendedores\"\"\",https://drive.google.com/file/d/n1/view,6 de febrero",
        "t,Taller digital,Cúcuta,Formación,,9 de febrero",
        "t,Sin fecha,Tibú,Descripción,,",
        "t,Corta,Pamplona",
        "t,Ruta 3,Ocaña,Visita,https://example.com/foto,11 de febrero",
    ]
    .join("\r\n")
}

/// Applications sheet export, one answer spans two lines
pub fn applications_csv() -> String {
    "Marca temporal,Nombre,Motivación\n\
     t1,Ana,\"Quiero crecer\ny exportar\"\n\
     t2,Luis,Aprender\n\
     \n\
     t3,Marta,Vender más\n"
        .to_string()
}

/// Write content to a temporary file
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
